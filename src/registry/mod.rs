//! Prompt Registry - Named templates with lookup and strict rendering
//!
//! The registry is built once at startup through `&mut self` and then shared
//! by reference. Entries are immutable, so concurrent readers need no locks.
//!
//! Rendering is strict: a placeholder without a value is always an error and
//! is never left verbatim in the output.

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RegistryError, Result};
use crate::prompt::embedded;
use crate::template::Template;

/// What `register_with` does when the key already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with `DuplicateKey`
    #[default]
    Reject,
    /// Replace the existing entry with the new template
    Overwrite,
}

/// In-memory store of named prompt templates
#[derive(Debug, Default)]
pub struct Registry {
    templates: HashMap<String, Template>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in prompts
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for name in embedded::builtin_names() {
            if let Some(body) = embedded::get_embedded(name) {
                registry.register(*name, body)?;
            }
        }
        Ok(registry)
    }

    /// Register a template, failing if the key is already present
    pub fn register(&mut self, key: impl Into<String>, body: impl Into<String>) -> Result<()> {
        self.register_with(key, body, DuplicatePolicy::Reject).map(|_| ())
    }

    /// Register a template with an explicit duplicate policy
    ///
    /// # Returns
    /// `true` if an existing entry was replaced
    pub fn register_with(
        &mut self,
        key: impl Into<String>,
        body: impl Into<String>,
        policy: DuplicatePolicy,
    ) -> Result<bool> {
        let template = Template::new(key, body)?;
        self.check_duplicate(template.key(), policy)?;
        Ok(self.insert(template))
    }

    /// Register a batch of templates, all or nothing
    ///
    /// Every key is checked before any entry is inserted, so an error leaves
    /// the registry unchanged.
    ///
    /// # Returns
    /// The number of templates registered
    pub fn register_all(&mut self, templates: Vec<Template>, policy: DuplicatePolicy) -> Result<usize> {
        let mut seen: Vec<&str> = Vec::with_capacity(templates.len());
        for template in &templates {
            if seen.contains(&template.key()) {
                return Err(RegistryError::DuplicateKey(template.key().to_string()));
            }
            self.check_duplicate(template.key(), policy)?;
            seen.push(template.key());
        }

        let count = templates.len();
        for template in templates {
            self.insert(template);
        }
        Ok(count)
    }

    fn check_duplicate(&self, key: &str, policy: DuplicatePolicy) -> Result<()> {
        if !self.templates.contains_key(key) {
            return Ok(());
        }
        match policy {
            DuplicatePolicy::Reject => Err(RegistryError::DuplicateKey(key.to_string())),
            DuplicatePolicy::Overwrite => {
                warn!("Overwriting template '{}'", key);
                Ok(())
            }
        }
    }

    fn insert(&mut self, template: Template) -> bool {
        debug!(
            "Registered template '{}' ({} bytes, {} placeholders)",
            template.key(),
            template.body().len(),
            template.placeholders().len()
        );
        self.templates
            .insert(template.key().to_string(), template)
            .is_some()
    }

    /// Get the stored body unchanged
    pub fn get(&self, key: &str) -> Result<&str> {
        self.template(key).map(Template::body)
    }

    /// Get the full template entry
    pub fn template(&self, key: &str) -> Result<&Template> {
        self.templates.get(key).ok_or_else(|| {
            debug!("Template lookup miss: {}", key);
            RegistryError::NotFound(key.to_string())
        })
    }

    /// Placeholder names for a template, in first-occurrence order
    pub fn placeholders(&self, key: &str) -> Result<&[String]> {
        self.template(key).map(Template::placeholders)
    }

    /// Render a template, substituting every placeholder from `params`
    ///
    /// Params the body does not reference are ignored.
    pub fn render(&self, key: &str, params: &HashMap<String, String>) -> Result<String> {
        self.template(key)?
            .fill(|name| params.get(name).map(String::as_str))
    }

    /// Render a template with any context that serializes to a JSON object
    ///
    /// Strings substitute as-is, numbers and booleans use their JSON text.
    /// Only fields the body references are converted; the rest are ignored.
    pub fn render_with<T: Serialize>(&self, key: &str, context: &T) -> Result<String> {
        let template = self.template(key)?;
        let params = params_from_context(context, template.placeholders())?;
        template.fill(|name| params.get(name).map(String::as_str))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    /// All registered keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn params_from_context<T: Serialize>(context: &T, wanted: &[String]) -> Result<HashMap<String, String>> {
    let value = serde_json::to_value(context)?;
    let Value::Object(mut map) = value else {
        return Err(RegistryError::InvalidParam {
            name: "<context>".to_string(),
            reason: "context must serialize to an object".to_string(),
        });
    };

    let mut params = HashMap::with_capacity(wanted.len());
    for name in wanted {
        // Absent fields surface later as UnresolvedPlaceholder
        let Some(value) = map.remove(name.as_str()) else {
            continue;
        };
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => {
                return Err(RegistryError::InvalidParam {
                    name: name.clone(),
                    reason: "null cannot be substituted".to_string(),
                });
            }
            Value::Array(_) | Value::Object(_) => {
                return Err(RegistryError::InvalidParam {
                    name: name.clone(),
                    reason: "only scalar values can be substituted".to_string(),
                });
            }
        };
        params.insert(name.clone(), text);
    }
    Ok(params)
}
