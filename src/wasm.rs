//! Browser entry point
//!
//! Wires one [`Shell`] to the page: routes dispatch against
//! `window.location`, back/forward is observed on `window`, and the initial
//! template is rendered into the configured container once the document
//! becomes interactive.

use crate::shell::{Shell, ShellError};
use pageshell_core::{ShellSettings, error_log, info_log};
use pageshell_router::BrowserHistory;
use pageshell_templates::{HttpTemplateSource, TemplateSource};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, Event};

/// Called when the module is loaded.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let shell = launch(ShellSettings::default()).map_err(|err| JsValue::from_str(&err.to_string()))?;

	// The page owns the shell until it unloads; the pop-state listener only
	// holds it weakly.
	std::mem::forget(shell);
	Ok(())
}

/// Builds the shell for this page, fetching templates from the page origin
/// (or `template_origin`), and starts it.
pub fn launch(settings: ShellSettings) -> Result<Rc<Shell>, ShellError> {
	let origin = window()?
		.location()
		.origin()
		.map_err(|e| ShellError::Dom(format!("{:?}", e)))?;
	let source = HttpTemplateSource::new(settings.template_base_url(&origin));
	launch_with_source(settings, source)
}

/// Builds the shell for this page over `source` and starts it.
///
/// The initial render is scheduled right away when the document has left
/// `loading`, and on the first `readystatechange` that leaves it otherwise.
/// The caller must keep the returned shell alive for back/forward dispatch.
pub fn launch_with_source<S>(settings: ShellSettings, source: S) -> Result<Rc<Shell>, ShellError>
where
	S: TemplateSource + 'static,
{
	settings.validate()?;

	let window = window()?;
	let document = window
		.document()
		.ok_or_else(|| ShellError::Dom("No document object".to_string()))?;

	let shell = Rc::new(Shell::with_source(settings, Arc::new(BrowserHistory), source));

	let target: &web_sys::EventTarget = window.as_ref();
	shell.start(target)?;

	if document.ready_state() == DocumentReadyState::Loading {
		render_when_ready(&shell, &document)?;
	} else {
		spawn_initial_render(Rc::clone(&shell), document);
	}

	Ok(shell)
}

fn window() -> Result<web_sys::Window, ShellError> {
	web_sys::window().ok_or_else(|| ShellError::Dom("No window object".to_string()))
}

// Renders once, on the first readystatechange past `loading` (normally
// `interactive`).
fn render_when_ready(shell: &Rc<Shell>, document: &Document) -> Result<(), ShellError> {
	let waiting = Rc::clone(shell);
	let observed = document.clone();
	let rendered = Cell::new(false);
	let handler = Closure::wrap(Box::new(move |_event: Event| {
		if rendered.get() || observed.ready_state() == DocumentReadyState::Loading {
			return;
		}
		rendered.set(true);
		spawn_initial_render(Rc::clone(&waiting), observed.clone());
	}) as Box<dyn FnMut(_)>);

	document
		.add_event_listener_with_callback("readystatechange", handler.as_ref().unchecked_ref())
		.map_err(|e| ShellError::Dom(format!("{:?}", e)))?;
	handler.forget();
	Ok(())
}

fn spawn_initial_render(shell: Rc<Shell>, document: Document) {
	wasm_bindgen_futures::spawn_local(async move {
		let selector = shell.settings().container_selector.clone();
		let container = match document.query_selector(&selector) {
			Ok(Some(element)) => element,
			Ok(None) => {
				error_log!("No element matches {}", selector);
				return;
			}
			Err(e) => {
				error_log!("Invalid selector {}: {:?}", selector, e);
				return;
			}
		};

		match shell.render_initial(&container).await {
			Ok(()) => info_log!(
				"Rendered {} into {}",
				shell.settings().initial_template,
				selector
			),
			Err(err) => error_log!("Initial render failed: {}", err),
		}
	});
}
