//! Pageshell Core
//!
//! Pieces shared by every pageshell crate:
//!
//! - [`logging`]: `debug_log!` / `info_log!` / `warn_log!` / `error_log!`,
//!   routed to the browser console on wasm and to `tracing` elsewhere
//! - [`settings`]: [`ShellSettings`], loadable from TOML

pub mod logging;
pub mod settings;

pub use settings::{EngineKind, SettingsError, ShellSettings};

// Used by the exported logging macros.
#[doc(hidden)]
pub use tracing;
#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub use web_sys;
