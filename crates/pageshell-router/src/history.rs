//! History API abstraction.
//!
//! The router never talks to the browser directly. It reads and pushes
//! locations through [`History`] and subscribes to back/forward navigation
//! through [`PopStateTarget`]. On wasm [`BrowserHistory`] and
//! `web_sys::EventTarget` implement these against the real page;
//! [`MemoryHistory`] implements both in memory for native builds and tests.

use crate::error::RouterError;
use parking_lot::Mutex;
use std::sync::Arc;

/// Listener fired on back/forward navigation.
pub type PopStateListener = Arc<dyn Fn() + Send + Sync>;

/// Read and push the visible location.
pub trait History: Send + Sync {
	/// Returns the path component of the current location.
	fn current_path(&self) -> Result<String, RouterError>;

	/// Pushes a new entry without a full page load.
	///
	/// Pushing does not notify pop-state listeners.
	fn push_state(&self, path: &str, title: &str) -> Result<(), RouterError>;
}

/// Something that emits back/forward navigation notifications.
pub trait PopStateTarget {
	/// Subscribes `listener` for the lifetime of the target.
	fn on_pop_state(&self, listener: PopStateListener) -> Result<(), RouterError>;
}

/// A single entry of a [`MemoryHistory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
	/// Location path.
	pub path: String,
	/// Title passed to `push_state`. Empty for the initial entry.
	pub title: String,
}

#[derive(Debug)]
struct MemoryState {
	entries: Vec<HistoryEntry>,
	index: usize,
}

/// In-memory session history.
///
/// Behaves like a browser tab's history: pushing drops every entry after the
/// cursor, and `back`/`forward` move the cursor and fire pop-state listeners.
///
/// # Examples
///
/// ```
/// use pageshell_router::{History, MemoryHistory};
///
/// let history = MemoryHistory::new("/");
/// history.push_state("/durp", "Durp").unwrap();
/// assert_eq!(history.current_path().unwrap(), "/durp");
///
/// assert!(history.back());
/// assert_eq!(history.current_path().unwrap(), "/");
/// ```
pub struct MemoryHistory {
	state: Mutex<MemoryState>,
	listeners: Mutex<Vec<PopStateListener>>,
}

impl std::fmt::Debug for MemoryHistory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state.lock();
		f.debug_struct("MemoryHistory")
			.field("entries", &state.entries)
			.field("index", &state.index)
			.field("listeners", &self.listeners.lock().len())
			.finish()
	}
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new("/")
	}
}

impl MemoryHistory {
	/// Creates a history whose only entry is `initial_path`.
	pub fn new(initial_path: impl Into<String>) -> Self {
		Self {
			state: Mutex::new(MemoryState {
				entries: vec![HistoryEntry {
					path: initial_path.into(),
					title: String::new(),
				}],
				index: 0,
			}),
			listeners: Mutex::new(Vec::new()),
		}
	}

	/// Returns a snapshot of all entries.
	pub fn entries(&self) -> Vec<HistoryEntry> {
		self.state.lock().entries.clone()
	}

	/// Returns the entry under the cursor.
	pub fn current_entry(&self) -> HistoryEntry {
		let state = self.state.lock();
		state.entries[state.index].clone()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.state.lock().entries.len()
	}

	/// Always false; a history has at least its initial entry.
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Number of subscribed pop-state listeners.
	pub fn listener_count(&self) -> usize {
		self.listeners.lock().len()
	}

	/// Moves one entry back and notifies listeners.
	///
	/// Returns `false` without notifying when already at the first entry.
	pub fn back(&self) -> bool {
		let moved = {
			let mut state = self.state.lock();
			if state.index == 0 {
				false
			} else {
				state.index -= 1;
				true
			}
		};
		if moved {
			self.fire_pop_state();
		}
		moved
	}

	/// Moves one entry forward and notifies listeners.
	///
	/// Returns `false` without notifying when already at the last entry.
	pub fn forward(&self) -> bool {
		let moved = {
			let mut state = self.state.lock();
			if state.index + 1 >= state.entries.len() {
				false
			} else {
				state.index += 1;
				true
			}
		};
		if moved {
			self.fire_pop_state();
		}
		moved
	}

	// Listeners may read the location, so neither lock is held while they run.
	fn fire_pop_state(&self) {
		let listeners: Vec<PopStateListener> = self.listeners.lock().clone();
		for listener in listeners {
			listener();
		}
	}
}

impl History for MemoryHistory {
	fn current_path(&self) -> Result<String, RouterError> {
		Ok(self.current_entry().path)
	}

	fn push_state(&self, path: &str, title: &str) -> Result<(), RouterError> {
		let mut state = self.state.lock();
		let keep = state.index + 1;
		state.entries.truncate(keep);
		state.entries.push(HistoryEntry {
			path: path.to_string(),
			title: title.to_string(),
		});
		state.index = keep;
		Ok(())
	}
}

impl PopStateTarget for MemoryHistory {
	fn on_pop_state(&self, listener: PopStateListener) -> Result<(), RouterError> {
		self.listeners.lock().push(listener);
		Ok(())
	}
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;

#[cfg(target_arch = "wasm32")]
mod browser {
	use super::{History, PopStateListener, PopStateTarget};
	use crate::error::RouterError;
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;
	use web_sys::Event;

	/// The page's own `window.location` and `window.history`.
	#[derive(Debug, Default, Clone, Copy)]
	pub struct BrowserHistory;

	fn window() -> Option<web_sys::Window> {
		web_sys::window()
	}

	impl History for BrowserHistory {
		fn current_path(&self) -> Result<String, RouterError> {
			let window = window()
				.ok_or_else(|| RouterError::LocationUnavailable("No window object".to_string()))?;
			window
				.location()
				.pathname()
				.map_err(|e| RouterError::LocationUnavailable(format!("{:?}", e)))
		}

		fn push_state(&self, path: &str, title: &str) -> Result<(), RouterError> {
			let window = window()
				.ok_or_else(|| RouterError::NavigationFailed("No window object".to_string()))?;
			let history = window
				.history()
				.map_err(|e| RouterError::NavigationFailed(format!("{:?}", e)))?;
			history
				.push_state_with_url(&JsValue::NULL, title, Some(path))
				.map_err(|e| RouterError::NavigationFailed(format!("{:?}", e)))
		}
	}

	impl PopStateTarget for web_sys::EventTarget {
		fn on_pop_state(&self, listener: PopStateListener) -> Result<(), RouterError> {
			let handler = Closure::wrap(Box::new(move |_event: Event| {
				listener();
			}) as Box<dyn FnMut(_)>);

			self.add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())
				.map_err(|e| RouterError::ListenerFailed(format!("{:?}", e)))?;

			// Lives as long as the page does.
			handler.forget();
			Ok(())
		}
	}
}
