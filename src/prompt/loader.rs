//! Template Loader - Register prompt templates from a directory
//!
//! Each `*.md` file in the directory becomes one template keyed by its file
//! stem. Loading happens once at startup; the registry holds the result.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{RegistryError, Result};
use crate::registry::{DuplicatePolicy, Registry};
use crate::template::Template;

/// Reads prompt templates from a directory
pub struct TemplateLoader {
    /// Base directory containing template files
    templates_dir: PathBuf,
}

impl TemplateLoader {
    /// Create a new TemplateLoader for the given directory
    pub fn new(templates_dir: impl AsRef<Path>) -> Self {
        Self {
            templates_dir: templates_dir.as_ref().to_path_buf(),
        }
    }

    /// Read a template body from disk
    ///
    /// # Arguments
    /// * `name` - The template name (without .md extension)
    pub fn load(&self, name: &str) -> Result<String> {
        let path = self.template_path(name);
        debug!("Loading template '{}' from {:?}", name, path);
        std::fs::read_to_string(&path).map_err(|e| {
            RegistryError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to load template '{}' from {:?}: {}", name, path, e),
            ))
        })
    }

    /// Check if a template exists on disk
    pub fn exists(&self, name: &str) -> bool {
        self.template_path(name).exists()
    }

    fn template_path(&self, name: &str) -> PathBuf {
        self.templates_dir.join(format!("{}.md", name))
    }

    /// List all available templates in the directory, sorted
    pub fn list_available(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.templates_dir).map_err(|e| {
            RegistryError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read templates directory {:?}: {}",
                    self.templates_dir, e
                ),
            ))
        })?;

        let mut templates = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file()
                && path.extension().is_some_and(|ext| ext == "md")
                && let Some(stem) = path.file_stem()
                && let Some(name) = stem.to_str()
            {
                templates.push(name.to_string());
            }
        }

        templates.sort();
        Ok(templates)
    }

    /// Register every available template into `registry`
    ///
    /// All files are read and validated before anything is registered, so an
    /// error leaves the registry unchanged.
    ///
    /// # Returns
    /// The number of templates registered
    pub fn load_into(&self, registry: &mut Registry, policy: DuplicatePolicy) -> Result<usize> {
        let available = self.list_available()?;
        let mut templates = Vec::with_capacity(available.len());
        for name in &available {
            let body = self.load(name)?;
            templates.push(Template::new(name.as_str(), body)?);
        }

        let count = registry.register_all(templates, policy)?;
        info!("Loaded {} templates from {}", count, self.templates_dir.display());
        Ok(count)
    }

    /// Get the templates directory path
    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_loader() -> (TemplateLoader, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let loader = TemplateLoader::new(temp_dir.path());
        (loader, temp_dir)
    }

    fn write_template(temp_dir: &TempDir, name: &str, content: &str) {
        let path = temp_dir.path().join(format!("{}.md", name));
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_new_loader() {
        let (loader, temp_dir) = create_test_loader();
        assert_eq!(loader.templates_dir(), temp_dir.path());
    }

    #[test]
    fn test_load_template() {
        let (loader, temp_dir) = create_test_loader();
        write_template(&temp_dir, "test", "Hello {name}!");

        let content = loader.load("test").unwrap();
        assert_eq!(content, "Hello {name}!");
    }

    #[test]
    fn test_load_nonexistent() {
        let (loader, _temp_dir) = create_test_loader();
        let result = loader.load("nonexistent");
        assert!(matches!(result, Err(RegistryError::Io(_))));
    }

    #[test]
    fn test_exists() {
        let (loader, temp_dir) = create_test_loader();
        write_template(&temp_dir, "exists", "content");

        assert!(loader.exists("exists"));
        assert!(!loader.exists("nonexistent"));
    }

    #[test]
    fn test_template_path() {
        let (loader, temp_dir) = create_test_loader();
        let expected = temp_dir.path().join("mytemplate.md");
        assert_eq!(loader.template_path("mytemplate"), expected);
    }

    #[test]
    fn test_list_available() {
        let (loader, temp_dir) = create_test_loader();
        write_template(&temp_dir, "plan", "plan template");
        write_template(&temp_dir, "spec", "spec template");
        write_template(&temp_dir, "code", "code template");

        let available = loader.list_available().unwrap();
        assert_eq!(available, vec!["code", "plan", "spec"]);
    }

    #[test]
    fn test_list_available_ignores_non_md_entries() {
        let (loader, temp_dir) = create_test_loader();
        write_template(&temp_dir, "valid", "content");
        fs::write(temp_dir.path().join("ignore.txt"), "not a template").unwrap();
        fs::create_dir(temp_dir.path().join("nested.md")).unwrap();

        let available = loader.list_available().unwrap();
        assert_eq!(available, vec!["valid"]);
    }

    #[test]
    fn test_list_available_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let loader = TemplateLoader::new(temp_dir.path().join("missing"));
        assert!(matches!(loader.list_available(), Err(RegistryError::Io(_))));
    }

    #[test]
    fn test_load_into_registry() {
        let (loader, temp_dir) = create_test_loader();
        write_template(&temp_dir, "greet", "Hello, {name}!");
        write_template(&temp_dir, "plain", "No placeholders");

        let mut registry = Registry::new();
        let loaded = loader.load_into(&mut registry, DuplicatePolicy::Reject).unwrap();
        assert_eq!(loaded, 2);
        assert_eq!(registry.get("greet").unwrap(), "Hello, {name}!");
        assert_eq!(registry.placeholders("greet").unwrap(), &["name".to_string()]);
    }

    #[test]
    fn test_load_into_duplicate_rejected() {
        let (loader, temp_dir) = create_test_loader();
        write_template(&temp_dir, "generation", "custom generation prompt");

        let mut registry = Registry::with_builtins().unwrap();
        let err = loader
            .load_into(&mut registry, DuplicatePolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateKey(ref k) if k == "generation"));
    }

    #[test]
    fn test_load_into_overwrite_builtin() {
        let (loader, temp_dir) = create_test_loader();
        write_template(&temp_dir, "generation", "custom generation prompt");

        let mut registry = Registry::with_builtins().unwrap();
        loader
            .load_into(&mut registry, DuplicatePolicy::Overwrite)
            .unwrap();
        assert_eq!(registry.get("generation").unwrap(), "custom generation prompt");
    }

    #[test]
    fn test_load_into_empty_file_fails() {
        let (loader, temp_dir) = create_test_loader();
        write_template(&temp_dir, "blank", "");

        let mut registry = Registry::new();
        let err = loader
            .load_into(&mut registry, DuplicatePolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, RegistryError::EmptyBody(_)));
    }

    #[test]
    fn test_load_into_error_leaves_registry_unchanged() {
        let (loader, temp_dir) = create_test_loader();
        write_template(&temp_dir, "a", "A {x}");
        write_template(&temp_dir, "b", "");

        let mut registry = Registry::with_builtins().unwrap();
        let err = loader
            .load_into(&mut registry, DuplicatePolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, RegistryError::EmptyBody(ref k) if k == "b"));
        assert_eq!(registry.keys(), vec!["generation"]);
    }

    #[test]
    fn test_load_into_duplicate_leaves_registry_unchanged() {
        let (loader, temp_dir) = create_test_loader();
        write_template(&temp_dir, "alpha", "first");
        write_template(&temp_dir, "generation", "custom generation prompt");

        let mut registry = Registry::with_builtins().unwrap();
        assert!(loader.load_into(&mut registry, DuplicatePolicy::Reject).is_err());
        assert_eq!(registry.keys(), vec!["generation"]);
        assert_eq!(registry.get("generation").unwrap(), crate::prompt::embedded::GENERATION);
    }
}
