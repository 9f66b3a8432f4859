//! Prompt Sources - Embedded prompts and directory loading
//!
//! Built-in prompts are compiled into the binary. Extra templates can be
//! loaded from a directory of `*.md` files at startup.

pub mod embedded;
mod loader;

pub use loader::TemplateLoader;
