//! Error types for client-side routing.

/// Error type for router operations.
///
/// An unmatched path is not an error; it only ever shows up as a dispatch
/// that ran no callback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// Pushing a history entry failed.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),
	/// The current location could not be read.
	#[error("Location unavailable: {0}")]
	LocationUnavailable(String),
	/// Subscribing to back/forward notifications failed.
	#[error("Listener registration failed: {0}")]
	ListenerFailed(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(RouterError::NavigationFailed("denied".into()), "Navigation failed: denied")]
	#[case(RouterError::LocationUnavailable("no window".into()), "Location unavailable: no window")]
	#[case(RouterError::ListenerFailed("detached".into()), "Listener registration failed: detached")]
	fn test_router_error_display(#[case] err: RouterError, #[case] expected: &str) {
		assert_eq!(err.to_string(), expected);
	}
}
