//! Shell configuration
//!
//! Re-exports [`ShellSettings`] from pageshell-core.
//!
//! ## Example
//!
//! ```rust
//! use pageshell::settings::ShellSettings;
//!
//! let settings = ShellSettings::from_toml_str(
//!     r#"
//!     template_path = "/views"
//!     coalesce_template_requests = true
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.template_base_url("http://localhost:8080"), "http://localhost:8080/views");
//! assert_eq!(settings.initial_template, "home");
//! ```

pub use pageshell_core::settings::*;
