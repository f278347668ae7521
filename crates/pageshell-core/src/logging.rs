//! Logging macros shared by the router and the template manager
//!
//! The same call site works on both targets:
//!
//! | Macro | WASM (debug build) | WASM (release build) | Native |
//! |-------|--------------------|----------------------|--------|
//! | `debug_log!` | `console.debug` | no-op | `tracing::debug!` |
//! | `info_log!` | `console.info` | no-op | `tracing::info!` |
//! | `warn_log!` | `console.warn` | no-op | `tracing::warn!` |
//! | `error_log!` | `console.error` | no-op | `tracing::error!` |
//!
//! Native builds never install a subscriber; the embedding application
//! decides where `tracing` output goes.
//!
//! ## Example
//!
//! ```ignore
//! use pageshell_core::{debug_log, warn_log};
//!
//! debug_log!("cache hit for template {}", name);
//! warn_log!("template fetch failed: {}", err);
//! ```

/// Logs a debug message.
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// No-op debug_log in release wasm builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs a debug message.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::tracing::debug!($($arg)*);
	}};
}

/// Logs an info message.
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// No-op info_log in release wasm builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::tracing::info!($($arg)*);
	}};
}

/// Logs a warning message.
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// No-op warn_log in release wasm builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::tracing::warn!($($arg)*);
	}};
}

/// Logs an error message.
///
/// Render failures in the wasm entry point go through this macro, so it is
/// the one most worth keeping visible in a debug build.
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// No-op error_log in release wasm builds
#[macro_export]
#[cfg(all(not(debug_assertions), target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::tracing::error!($($arg)*);
	}};
}
