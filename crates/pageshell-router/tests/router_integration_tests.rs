//! Integration tests for the client-side router
//!
//! These tests drive the router through its public API only:
//! 1. Registration and exact-path dispatch
//! 2. Programmatic navigation
//! 3. Back/forward navigation through connected signals

use pageshell_router::{History, MemoryHistory, Router};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counting(counter: &Arc<AtomicUsize>) -> impl Fn() + Send + Sync + 'static {
	let counter = Arc::clone(counter);
	move || {
		counter.fetch_add(1, Ordering::SeqCst);
	}
}

/// Sample wiring: "/" and "/durp" registered, navigate to "/durp".
#[rstest]
fn test_navigate_to_durp_invokes_its_callback_once() {
	let history = Arc::new(MemoryHistory::new("/"));
	let router = Router::new(history.clone());
	let root_hits = Arc::new(AtomicUsize::new(0));
	let durp_hits = Arc::new(AtomicUsize::new(0));
	router.install_route("/", counting(&root_hits));
	router.install_route("/durp", counting(&durp_hits));

	let dispatched = router.go("/durp", "Durp");

	assert_eq!(dispatched, Ok(true));
	assert_eq!(durp_hits.load(Ordering::SeqCst), 1);
	assert_eq!(root_hits.load(Ordering::SeqCst), 0);
}

/// Every registered path dispatches to the callback registered last for it.
#[rstest]
#[case("/")]
#[case("/durp")]
#[case("/users/42")]
#[case("/with space")]
fn test_last_registration_wins(#[case] path: &str) {
	let router = Router::new(Arc::new(MemoryHistory::default()));
	let stale = Arc::new(AtomicUsize::new(0));
	let fresh = Arc::new(AtomicUsize::new(0));
	router.install_route(path, counting(&stale));
	router.install_route(path, counting(&fresh));

	assert_eq!(router.go(path, ""), Ok(true));
	assert_eq!(stale.load(Ordering::SeqCst), 0);
	assert_eq!(fresh.load(Ordering::SeqCst), 1);
}

/// Unregistered paths run nothing and report no error.
#[rstest]
#[case("/nope")]
#[case("/durp/")]
#[case("")]
fn test_unregistered_paths_are_ignored(#[case] path: &str) {
	let router = Router::new(Arc::new(MemoryHistory::default()));
	let hits = Arc::new(AtomicUsize::new(0));
	router.install_route("/durp", counting(&hits));

	assert_eq!(router.go(path, ""), Ok(false));
	assert_eq!(hits.load(Ordering::SeqCst), 0);
}

/// Programmatic navigation and back/forward navigation reach the same
/// callback for the same path.
#[rstest]
fn test_programmatic_and_history_navigation_agree() {
	let history = Arc::new(MemoryHistory::new("/"));
	let router = Router::new(history.clone());
	let durp_hits = Arc::new(AtomicUsize::new(0));
	router.install_route("/", || {});
	router.install_route("/durp", counting(&durp_hits));
	router.connect_signals(history.as_ref()).unwrap();

	router.go("/durp", "").unwrap();
	assert_eq!(history.current_path().unwrap(), "/durp");
	assert_eq!(durp_hits.load(Ordering::SeqCst), 1);

	assert!(history.back());
	assert_eq!(history.current_path().unwrap(), "/");
	assert!(history.forward());
	assert_eq!(durp_hits.load(Ordering::SeqCst), 2);
}

/// Initial dispatch on start-up uses whatever path the page loaded with.
#[rstest]
fn test_initial_dispatch_uses_loaded_path() {
	let history = Arc::new(MemoryHistory::new("/durp"));
	let router = Router::new(history);
	let hits = Arc::new(AtomicUsize::new(0));
	router.install_route("/durp", counting(&hits));

	assert_eq!(router.route(), Ok(true));
	assert_eq!(hits.load(Ordering::SeqCst), 1);
}

/// Routes registered after signals are connected still dispatch on back.
#[rstest]
fn test_late_registration_seen_by_listener() {
	let history = Arc::new(MemoryHistory::new("/"));
	let router = Router::new(history.clone());
	router.connect_signals(history.as_ref()).unwrap();
	router.go("/next", "").unwrap();

	let hits = Arc::new(AtomicUsize::new(0));
	router.install_route("/", counting(&hits));
	history.back();

	assert_eq!(hits.load(Ordering::SeqCst), 1);
}
