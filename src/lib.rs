//! # Pageshell
//!
//! A minimal single-page application shell. A page loads once; after that,
//! navigation is handled in the browser:
//!
//! - [`router`]: exact-path routes dispatched on programmatic navigation and
//!   on back/forward
//! - [`templates`]: named HTML templates fetched from the server once,
//!   cached, and rendered into page containers
//! - [`settings`]: [`ShellSettings`], loadable from TOML
//! - [`shell`]: [`Shell`], the composition root that owns one router and
//!   one template manager
//!
//! On `wasm32` the crate also exports a `#[wasm_bindgen(start)]` entry point
//! that builds a [`Shell`] with [`ShellSettings::default`], dispatches the
//! current path and renders the `home` template into `#frame_area` once the
//! document is interactive.
//!
//! ## Quick Example
//!
//! ```rust
//! use pageshell::{MemoryHistory, Shell, ShellSettings};
//! use pageshell::templates::InMemorySource;
//! use std::sync::Arc;
//!
//! let history = Arc::new(MemoryHistory::new("/"));
//! let shell = Shell::with_source(
//!     ShellSettings::default(),
//!     history.clone(),
//!     InMemorySource::new().with_template("home", "<h1>Hello {{name}}</h1>"),
//! );
//!
//! shell.start(history.as_ref()).unwrap();
//! assert_eq!(shell.router().go("/durp", "Durp"), Ok(true));
//! ```
//!
//! ## Logging
//!
//! The crate logs through `debug_log!`, `info_log!`, `warn_log!` and
//! `error_log!`: the browser console on wasm debug builds, nothing on wasm
//! release builds, and `tracing` on native targets.

pub mod router;
pub mod settings;
pub mod shell;
pub mod templates;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{launch, launch_with_source};

pub use pageshell_core::{debug_log, error_log, info_log, warn_log};
pub use pageshell_router::{History, MemoryHistory, PopStateTarget, Router, RouterError};
pub use pageshell_templates::{Container, TemplateError, TemplateManager};
pub use settings::{EngineKind, SettingsError, ShellSettings};
pub use shell::{Shell, ShellError};
