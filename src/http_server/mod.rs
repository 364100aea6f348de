//! # HTTP Server Module
//!
//! Axum server exposing the sortable record admin.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/admin/records` - List view, bulk move actions
//! - `/admin/records/add` - Create a record at the end of the list
//! - `/admin/records/:id` - Delete a record
//! - `/admin/records/sortable-update` - Single-record drag reorder

pub mod admin_routes;
pub mod config;
pub mod errors;
pub mod forms;
pub mod server;

pub use admin_routes::AdminState;
pub use config::HttpServerConfig;
pub use errors::AdminError;
pub use server::HttpServer;
