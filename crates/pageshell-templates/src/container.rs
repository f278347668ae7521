//! Render targets.

use parking_lot::Mutex;

/// A node whose content is replaced wholesale by each render.
pub trait Container {
	/// Replaces the node's entire content with `html`.
	fn replace_content(&self, html: &str);
}

#[cfg(target_arch = "wasm32")]
impl Container for web_sys::Element {
	fn replace_content(&self, html: &str) {
		self.set_inner_html(html);
	}
}

/// Records what was rendered into it.
#[derive(Debug, Default)]
pub struct MemoryContainer {
	content: Mutex<String>,
	replacements: Mutex<usize>,
}

impl MemoryContainer {
	/// Creates an empty container.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a container holding `initial` content.
	pub fn with_content(initial: impl Into<String>) -> Self {
		Self {
			content: Mutex::new(initial.into()),
			replacements: Mutex::new(0),
		}
	}

	/// Current content.
	pub fn content(&self) -> String {
		self.content.lock().clone()
	}

	/// How many times the content was replaced.
	pub fn replacements(&self) -> usize {
		*self.replacements.lock()
	}
}

impl Container for MemoryContainer {
	fn replace_content(&self, html: &str) {
		*self.content.lock() = html.to_string();
		*self.replacements.lock() += 1;
	}
}
