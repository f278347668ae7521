//! Error types for template loading and rendering.

/// Error type for template operations.
///
/// Cloneable so that one failed fetch can be handed to every caller that
/// was waiting on it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
	/// The server answered with something other than 200.
	#[error("Template `{name}` request returned status {status}")]
	Status { name: String, status: u16 },

	/// The request never produced a response, or its body could not be read.
	#[error("Template `{name}` request failed: {message}")]
	Transport { name: String, message: String },

	/// An in-memory source has no template under this name.
	#[error("Template `{0}` not found")]
	NotFound(String),

	/// The engine rejected the template or the data context.
	#[error("Template rendering error: {0}")]
	Render(String),
}

impl TemplateError {
	/// Name of the template whose fetch failed, if this is a fetch error.
	pub fn template_name(&self) -> Option<&str> {
		match self {
			Self::Status { name, .. } | Self::Transport { name, .. } => Some(name),
			Self::NotFound(name) => Some(name),
			Self::Render(_) => None,
		}
	}
}
