//! Form body parsing
//!
//! Bulk actions submit `application/x-www-form-urlencoded` bodies with the
//! selection id repeated under one key, which rules out struct-based form
//! extraction. Bodies are decoded into an ordered multimap instead.

use super::errors::{AdminError, AdminResult};

/// Decoded form body preserving key repetition and order
#[derive(Debug, Default)]
pub struct FormValues {
    pairs: Vec<(String, String)>,
}

impl FormValues {
    /// Decode a urlencoded body
    pub fn parse(body: &[u8]) -> Self {
        let pairs = form_urlencoded::parse(body)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value for `key`, if any
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted under `key`, in submission order
    pub fn all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// First value for `key`, or a missing-field error
    pub fn require(&self, key: &str) -> AdminResult<&str> {
        self.first(key)
            .ok_or_else(|| AdminError::MissingField(key.to_string()))
    }

    /// Required integer field
    pub fn require_u32(&self, key: &str) -> AdminResult<u32> {
        self.require(key)?
            .parse()
            .map_err(|_| AdminError::InvalidFormInt(key.to_string()))
    }

    /// Required integer field
    pub fn require_usize(&self, key: &str) -> AdminResult<usize> {
        self.require(key)?
            .parse()
            .map_err(|_| AdminError::InvalidFormInt(key.to_string()))
    }

    /// All values under `key` parsed as record ids
    pub fn u64_list(&self, key: &str) -> AdminResult<Vec<u64>> {
        self.all(key)
            .into_iter()
            .map(|v| {
                v.parse()
                    .map_err(|_| AdminError::InvalidFormInt(key.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_keys_preserve_order() {
        let form = FormValues::parse(b"_selected_action=11&_selected_action=10&action=x");
        assert_eq!(form.all("_selected_action"), vec!["11", "10"]);
        assert_eq!(form.u64_list("_selected_action").unwrap(), vec![11, 10]);
        assert_eq!(form.first("action"), Some("x"));
    }

    #[test]
    fn test_require_reports_missing_field() {
        let form = FormValues::parse(b"startorder=7");
        assert_eq!(form.require_u32("startorder").unwrap(), 7);
        assert!(matches!(
            form.require("endorder"),
            Err(AdminError::MissingField(_))
        ));
    }

    #[test]
    fn test_non_integer_is_rejected() {
        let form = FormValues::parse(b"startorder=seven");
        assert!(matches!(
            form.require_u32("startorder"),
            Err(AdminError::InvalidFormInt(_))
        ));
    }

    #[test]
    fn test_urlencoded_values_are_decoded() {
        let form = FormValues::parse(b"title=Hello%20World");
        assert_eq!(form.first("title"), Some("Hello World"));
    }
}
