//! Browser tests for the router over `window.history`
//!
//! Run with `wasm-pack test --headless --chrome crates/pageshell-router`.

#[cfg(target_arch = "wasm32")]
mod wasm_browser_history_tests {
	use pageshell_router::{BrowserHistory, History, Router};
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use wasm_bindgen_test::*;
	use web_sys::{Event, EventTarget};

	wasm_bindgen_test_configure!(run_in_browser);

	fn window() -> web_sys::Window {
		web_sys::window().unwrap()
	}

	fn counting(counter: &Arc<AtomicUsize>) -> impl Fn() + Send + Sync + 'static {
		let counter = Arc::clone(counter);
		move || {
			counter.fetch_add(1, Ordering::SeqCst);
		}
	}

	#[wasm_bindgen_test]
	fn test_go_updates_location_pathname() {
		let router = Router::new(Arc::new(BrowserHistory));
		let hits = Arc::new(AtomicUsize::new(0));
		router.install_route("/browser-durp", counting(&hits));

		assert_eq!(router.go("/browser-durp", "Durp"), Ok(true));

		assert_eq!(window().location().pathname().unwrap(), "/browser-durp");
		assert_eq!(BrowserHistory.current_path().unwrap(), "/browser-durp");
		assert_eq!(hits.load(Ordering::SeqCst), 1);
	}

	#[wasm_bindgen_test]
	fn test_push_state_does_not_dispatch() {
		let router = Router::new(Arc::new(BrowserHistory));
		let hits = Arc::new(AtomicUsize::new(0));
		router.install_route("/browser-quiet", counting(&hits));

		BrowserHistory.push_state("/browser-quiet", "").unwrap();

		assert_eq!(window().location().pathname().unwrap(), "/browser-quiet");
		assert_eq!(hits.load(Ordering::SeqCst), 0);
	}

	#[wasm_bindgen_test]
	fn test_popstate_event_dispatches_current_path() {
		let window = window();
		let target: &EventTarget = window.as_ref();
		let router = Router::new(Arc::new(BrowserHistory));
		let hits = Arc::new(AtomicUsize::new(0));
		router.install_route("/browser-popstate", counting(&hits));
		router.connect_signals(target).unwrap();

		BrowserHistory.push_state("/browser-popstate", "").unwrap();
		assert_eq!(hits.load(Ordering::SeqCst), 0);

		target
			.dispatch_event(&Event::new("popstate").unwrap())
			.unwrap();

		assert_eq!(hits.load(Ordering::SeqCst), 1);
	}

	#[wasm_bindgen_test]
	fn test_popstate_after_router_dropped_is_ignored() {
		let window = window();
		let target: &EventTarget = window.as_ref();
		let hits = Arc::new(AtomicUsize::new(0));
		{
			let router = Router::new(Arc::new(BrowserHistory));
			router.install_route("/browser-dropped", counting(&hits));
			router.connect_signals(target).unwrap();
		}

		BrowserHistory.push_state("/browser-dropped", "").unwrap();
		target
			.dispatch_event(&Event::new("popstate").unwrap())
			.unwrap();

		assert_eq!(hits.load(Ordering::SeqCst), 0);
	}
}
