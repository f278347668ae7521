//! Pageshell Router
//!
//! Client-side routing for a single-page application: exact path strings
//! mapped to zero-argument callbacks, dispatched on programmatic navigation
//! and on browser back/forward.
//!
//! ## Example
//!
//! ```ignore
//! use pageshell_router::{BrowserHistory, Router};
//! use std::sync::Arc;
//!
//! let router = Router::new(Arc::new(BrowserHistory));
//! router.install_route("/", || {});
//! router.install_route("/durp", || {});
//!
//! let window = web_sys::window().unwrap();
//! let target: &web_sys::EventTarget = window.as_ref();
//! router.connect_signals(target)?;
//! router.route()?;
//! ```

pub mod error;
pub mod history;
pub mod router;

pub use error::RouterError;
#[cfg(target_arch = "wasm32")]
pub use history::BrowserHistory;
pub use history::{History, HistoryEntry, MemoryHistory, PopStateListener, PopStateTarget};
pub use router::{RouteCallback, Router};
