//! Client-side routing
//!
//! This module provides access to pageshell-router: exact-path routes
//! dispatched on programmatic navigation and on browser back/forward.
//!
//! ## Example
//!
//! ```rust
//! use pageshell::router::{MemoryHistory, Router};
//! use std::sync::Arc;
//!
//! let history = Arc::new(MemoryHistory::new("/"));
//! let router = Router::new(history.clone());
//! router.install_route("/durp", || {});
//! router.connect_signals(history.as_ref()).unwrap();
//!
//! assert_eq!(router.go("/durp", "Durp"), Ok(true));
//! ```

// Re-export all pageshell-router functionality
pub use pageshell_router::*;
