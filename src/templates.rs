//! Template loading and rendering
//!
//! This module provides access to pageshell-templates: named templates
//! fetched over HTTP, cached for the lifetime of their manager and rendered
//! into containers with Tera.

// Re-export all pageshell-templates functionality
pub use pageshell_templates::*;
