//! Promptbook - A registry of named LLM prompt templates
//!
//! Templates are registered once at startup, looked up by key, and rendered
//! with `{name}` placeholder substitution. Rendering is strict: every
//! placeholder in a body must have a value.

pub mod error;
pub mod prompt;
pub mod registry;
pub mod template;

pub use error::{RegistryError, Result};
pub use registry::{DuplicatePolicy, Registry};
pub use template::Template;
