//! Core Router Implementation.
//!
//! Routes are exact path strings mapped to zero-argument callbacks. There is
//! no pattern matching and no fallback route: a path either has a callback
//! or dispatching it does nothing.

use super::error::RouterError;
use super::history::{History, PopStateTarget};
use pageshell_core::debug_log;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Handler invoked when its path is dispatched.
pub type RouteCallback = Arc<dyn Fn() + Send + Sync>;

/// The client-side router.
///
/// `Router` is a cheap handle: clones share one route table and one history,
/// which is how the pop-state listener installed by
/// [`connect_signals`](Router::connect_signals) reaches the same routes.
///
/// # Examples
///
/// ```
/// use pageshell_router::{MemoryHistory, Router};
/// use std::sync::Arc;
///
/// let router = Router::new(Arc::new(MemoryHistory::new("/")));
/// router.install_route("/durp", || {});
///
/// assert_eq!(router.go("/durp", "Durp"), Ok(true));
/// assert_eq!(router.go("/nowhere", ""), Ok(false));
/// ```
#[derive(Clone)]
pub struct Router {
	routes: Arc<RwLock<HashMap<String, RouteCallback>>>,
	history: Arc<dyn History>,
}

impl std::fmt::Debug for Router {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let routes = self.routes.read();
		let mut paths: Vec<&String> = routes.keys().collect();
		paths.sort();
		f.debug_struct("Router").field("routes", &paths).finish()
	}
}

impl Router {
	/// Creates a router with an empty route table over `history`.
	pub fn new(history: Arc<dyn History>) -> Self {
		Self {
			routes: Arc::new(RwLock::new(HashMap::new())),
			history,
		}
	}

	/// Registers `callback` under `path`, replacing any previous callback for
	/// exactly that path.
	pub fn install_route<F>(&self, path: impl Into<String>, callback: F)
	where
		F: Fn() + Send + Sync + 'static,
	{
		let path = path.into();
		if self
			.routes
			.write()
			.insert(path.clone(), Arc::new(callback))
			.is_some()
		{
			debug_log!("Replaced route handler for {}", path);
		}
	}

	/// Dispatches the current path whenever `target` reports back/forward
	/// navigation.
	///
	/// The listener holds the router weakly: a target that outlives every
	/// handle to this router (or is the router's own history) does not keep
	/// the route table alive, and notifications after the last handle is
	/// dropped are ignored.
	pub fn connect_signals<T>(&self, target: &T) -> Result<(), RouterError>
	where
		T: PopStateTarget + ?Sized,
	{
		let routes = Arc::downgrade(&self.routes);
		let history = Arc::downgrade(&self.history);
		target.on_pop_state(Arc::new(move || {
			let (Some(routes), Some(history)) = (routes.upgrade(), history.upgrade()) else {
				debug_log!("Pop-state ignored: router dropped");
				return;
			};
			if let Err(err) = (Router { routes, history }).route() {
				debug_log!("Pop-state dispatch skipped: {}", err);
			}
		}))
	}

	/// Dispatches the current path.
	///
	/// Returns `Ok(true)` when a callback ran and `Ok(false)` when the path
	/// has no route. Fails only when the location cannot be read.
	pub fn route(&self) -> Result<bool, RouterError> {
		let path = self.history.current_path()?;
		Ok(self.dispatch(&path))
	}

	/// Pushes `path` onto the history and dispatches it.
	pub fn go(&self, path: &str, title: &str) -> Result<bool, RouterError> {
		self.history.push_state(path, title)?;
		self.route()
	}

	/// Looks up the callback registered for exactly `path`.
	pub fn match_path(&self, path: &str) -> Option<RouteCallback> {
		self.routes.read().get(path).cloned()
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.read().len()
	}

	/// Checks if a route is registered for exactly `path`.
	pub fn has_route(&self, path: &str) -> bool {
		self.routes.read().contains_key(path)
	}

	/// Returns the history this router reads and pushes.
	pub fn history(&self) -> &Arc<dyn History> {
		&self.history
	}

	fn dispatch(&self, path: &str) -> bool {
		// The callback runs after the read guard is gone, so it may navigate
		// or register routes itself.
		match self.match_path(path) {
			Some(callback) => {
				callback();
				true
			}
			None => {
				debug_log!("No route for {}", path);
				false
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::history::MemoryHistory;
	use rstest::{fixture, rstest};
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[fixture]
	fn history() -> Arc<MemoryHistory> {
		Arc::new(MemoryHistory::new("/"))
	}

	fn counter() -> Arc<AtomicUsize> {
		Arc::new(AtomicUsize::new(0))
	}

	fn counting(counter: &Arc<AtomicUsize>) -> impl Fn() + Send + Sync + 'static {
		let counter = Arc::clone(counter);
		move || {
			counter.fetch_add(1, Ordering::SeqCst);
		}
	}

	#[rstest]
	fn test_router_new(history: Arc<MemoryHistory>) {
		let router = Router::new(history);
		assert_eq!(router.route_count(), 0);
	}

	#[rstest]
	fn test_install_route(history: Arc<MemoryHistory>) {
		let router = Router::new(history);
		router.install_route("/", || {});
		router.install_route("/durp", || {});

		assert_eq!(router.route_count(), 2);
		assert!(router.has_route("/"));
		assert!(router.has_route("/durp"));
		assert!(!router.has_route("/durp/"));
	}

	#[rstest]
	fn test_install_route_overwrites(history: Arc<MemoryHistory>) {
		let router = Router::new(history);
		let first = counter();
		let second = counter();
		router.install_route("/page", counting(&first));
		router.install_route("/page", counting(&second));

		assert_eq!(router.route_count(), 1);
		assert_eq!(router.go("/page", ""), Ok(true));
		assert_eq!(first.load(Ordering::SeqCst), 0);
		assert_eq!(second.load(Ordering::SeqCst), 1);
	}

	#[rstest]
	fn test_route_dispatches_current_path() {
		let history = Arc::new(MemoryHistory::new("/durp"));
		let router = Router::new(history);
		let hits = counter();
		router.install_route("/durp", counting(&hits));

		assert_eq!(router.route(), Ok(true));
		assert_eq!(hits.load(Ordering::SeqCst), 1);
	}

	#[rstest]
	fn test_route_unmatched_is_silent(history: Arc<MemoryHistory>) {
		let router = Router::new(history);
		let hits = counter();
		router.install_route("/other", counting(&hits));

		assert_eq!(router.route(), Ok(false));
		assert_eq!(hits.load(Ordering::SeqCst), 0);
	}

	#[rstest]
	fn test_match_is_exact(history: Arc<MemoryHistory>) {
		let router = Router::new(history);
		router.install_route("/users", || {});

		assert!(router.match_path("/users").is_some());
		assert!(router.match_path("/users/").is_none());
		assert!(router.match_path("/Users").is_none());
		assert!(router.match_path("/users/42").is_none());
	}

	#[rstest]
	fn test_go_pushes_then_dispatches(history: Arc<MemoryHistory>) {
		let router = Router::new(history.clone());
		let hits = counter();
		router.install_route("/durp", counting(&hits));

		assert_eq!(router.go("/durp", "Durp"), Ok(true));
		assert_eq!(history.current_path().unwrap(), "/durp");
		assert_eq!(history.current_entry().title, "Durp");
		assert_eq!(hits.load(Ordering::SeqCst), 1);
	}

	#[rstest]
	fn test_go_to_unregistered_path_still_navigates(history: Arc<MemoryHistory>) {
		let router = Router::new(history.clone());

		assert_eq!(router.go("/missing", ""), Ok(false));
		assert_eq!(history.current_path().unwrap(), "/missing");
	}

	#[rstest]
	fn test_callback_may_navigate(history: Arc<MemoryHistory>) {
		let router = Router::new(history.clone());
		let landed = counter();
		router.install_route("/target", counting(&landed));

		let redirecting = router.clone();
		router.install_route("/old", move || {
			redirecting.go("/target", "").unwrap();
		});

		assert_eq!(router.go("/old", ""), Ok(true));
		assert_eq!(landed.load(Ordering::SeqCst), 1);
		assert_eq!(history.current_path().unwrap(), "/target");
	}

	#[rstest]
	fn test_connect_signals_dispatches_on_back(history: Arc<MemoryHistory>) {
		let router = Router::new(history.clone());
		let home = counter();
		router.install_route("/", counting(&home));
		router.install_route("/durp", || {});
		router.connect_signals(history.as_ref()).unwrap();

		router.go("/durp", "").unwrap();
		assert_eq!(home.load(Ordering::SeqCst), 0);

		history.back();
		assert_eq!(home.load(Ordering::SeqCst), 1);
	}

	#[rstest]
	fn test_connect_signals_does_not_keep_router_alive(history: Arc<MemoryHistory>) {
		let router = Router::new(history.clone());
		let hits = counter();
		router.install_route("/", counting(&hits));
		router.connect_signals(history.as_ref()).unwrap();
		history.push_state("/durp", "").unwrap();
		assert_eq!(Arc::strong_count(&history), 2);

		drop(router);

		assert_eq!(Arc::strong_count(&history), 1);
		assert!(history.back());
		assert_eq!(hits.load(Ordering::SeqCst), 0);
	}

	#[rstest]
	fn test_clones_share_routes(history: Arc<MemoryHistory>) {
		let router = Router::new(history);
		let clone = router.clone();
		clone.install_route("/late", || {});

		assert!(router.has_route("/late"));
	}

	#[rstest]
	fn test_debug_lists_paths(history: Arc<MemoryHistory>) {
		let router = Router::new(history);
		router.install_route("/b", || {});
		router.install_route("/a", || {});

		assert_eq!(format!("{:?}", router), r#"Router { routes: ["/a", "/b"] }"#);
	}
}
