//! Template - An immutable, named prompt body
//!
//! Templates are constructed once and never mutated. The placeholder names
//! found in the body are computed at construction time.

mod placeholder;

pub use placeholder::{scan, substitute};

use serde::Serialize;

use crate::error::{RegistryError, Result};

/// A named prompt body with its placeholder names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    key: String,
    body: String,
    placeholders: Vec<String>,
}

impl Template {
    /// Create a template, rejecting an empty key or body
    pub fn new(key: impl Into<String>, body: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let body = body.into();

        if key.is_empty() {
            return Err(RegistryError::EmptyKey);
        }
        if body.is_empty() {
            return Err(RegistryError::EmptyBody(key));
        }

        let placeholders = scan(&body);
        Ok(Self {
            key,
            body,
            placeholders,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Placeholder names in first-occurrence order
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    pub fn has_placeholders(&self) -> bool {
        !self.placeholders.is_empty()
    }

    /// Substitute every placeholder using `lookup`
    pub(crate) fn fill<'a, F>(&self, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        // Fast path keeps the stored bytes untouched
        if self.placeholders.is_empty() {
            return Ok(self.body.clone());
        }

        substitute(&self.body, lookup).map_err(|placeholder| RegistryError::UnresolvedPlaceholder {
            key: self.key.clone(),
            placeholder,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_template() {
        let t = Template::new("greet", "Hello, {name}!").unwrap();
        assert_eq!(t.key(), "greet");
        assert_eq!(t.body(), "Hello, {name}!");
        assert_eq!(t.placeholders(), &["name".to_string()]);
        assert!(t.has_placeholders());
    }

    #[test]
    fn test_new_without_placeholders() {
        let t = Template::new("plain", "No markers here.").unwrap();
        assert!(t.placeholders().is_empty());
        assert!(!t.has_placeholders());
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = Template::new("", "body");
        assert!(matches!(result, Err(RegistryError::EmptyKey)));
    }

    #[test]
    fn test_empty_body_rejected() {
        let result = Template::new("greet", "");
        assert!(matches!(result, Err(RegistryError::EmptyBody(ref k)) if k == "greet"));
    }

    #[test]
    fn test_fill() {
        let t = Template::new("greet", "Hello, {name}!").unwrap();
        let rendered = t.fill(|n| (n == "name").then_some("Ava")).unwrap();
        assert_eq!(rendered, "Hello, Ava!");
    }

    #[test]
    fn test_fill_unresolved() {
        let t = Template::new("greet", "Hello, {name}!").unwrap();
        let err = t.fill(|_| None).unwrap_err();
        match err {
            RegistryError::UnresolvedPlaceholder { key, placeholder } => {
                assert_eq!(key, "greet");
                assert_eq!(placeholder, "name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_serialize() {
        let t = Template::new("greet", "Hi {who}").unwrap();
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["key"], "greet");
        assert_eq!(json["placeholders"][0], "who");
    }
}
