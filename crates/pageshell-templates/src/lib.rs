//! Pageshell Templates
//!
//! Named HTML templates fetched from the server, cached in memory and
//! rendered into page containers.
//!
//! ## Architecture
//!
//! - [`source`]: where template text comes from ([`HttpTemplateSource`],
//!   [`InMemorySource`])
//! - [`engine`]: how data is substituted ([`MustacheEngine`],
//!   [`TeraEngine`])
//! - [`container`]: where rendered markup goes (`web_sys::Element` on wasm,
//!   [`MemoryContainer`] elsewhere)
//! - [`manager`]: [`TemplateManager`] tying the three together
//!
//! ## Example
//!
//! ```ignore
//! use pageshell_templates::{HttpTemplateSource, MustacheEngine, TemplateManager};
//! use serde_json::json;
//!
//! let manager = TemplateManager::new(
//!     HttpTemplateSource::new("http://localhost:8080/template"),
//!     MustacheEngine::new(),
//! );
//! manager.render(&frame_area, "home", &json!({ "name": "Tyler" })).await?;
//! ```

pub mod container;
pub mod engine;
pub mod error;
pub mod manager;
pub mod source;

pub use container::{Container, MemoryContainer};
pub use engine::{MustacheEngine, TemplateEngine, TeraEngine};
pub use error::TemplateError;
pub use manager::TemplateManager;
pub use source::{HttpTemplateSource, InMemorySource, TemplateSource};
