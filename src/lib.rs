//! ordin - a strict, deterministic list-ordering service
//!
//! Maintains a set of records whose `order` values are always exactly
//! `{1..N}`, exposes drag reordering and bulk page moves over HTTP, and
//! announces every order write through save events.

pub mod admin;
pub mod cli;
pub mod engine;
pub mod events;
pub mod http_server;
pub mod observability;
pub mod store;
