//! Template engines
//!
//! The manager hands raw template text and a JSON data context to a
//! [`TemplateEngine`] and writes whatever markup comes back into the
//! container. Substitution syntax and escaping rules belong to the engine.
//!
//! [`MustacheEngine`] matches the syntax server-side templates are written
//! in. [`TeraEngine`] is available for template sets written for Tera.

use crate::error::TemplateError;
use serde_json::Value;
use tera::{Context, Tera};

/// Renders template text against a data context.
pub trait TemplateEngine {
	/// Substitutes `data` into `template`.
	fn render(&self, template: &str, data: &Value) -> Result<String, TemplateError>;
}

/// Renderer for Mustache templates.
///
/// `{{name}}` is HTML-escaped, `{{{name}}}` is inserted verbatim, and
/// `{{#items}}...{{/items}}` repeats once per list element (or once for a
/// truthy value). A name missing from the data renders as nothing.
///
/// # Examples
///
/// ```
/// use pageshell_templates::{MustacheEngine, TemplateEngine};
/// use serde_json::json;
///
/// let html = MustacheEngine::new()
///     .render(
///         "<h1>Hello {{name}}</h1><p>{{subtitle}}</p>",
///         &json!({ "name": "Tyler" }),
///     )
///     .unwrap();
/// assert_eq!(html, "<h1>Hello Tyler</h1><p></p>");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MustacheEngine;

impl MustacheEngine {
	/// Creates the engine.
	pub fn new() -> Self {
		Self
	}
}

impl TemplateEngine for MustacheEngine {
	fn render(&self, template: &str, data: &Value) -> Result<String, TemplateError> {
		let compiled = mustache::compile_str(template)
			.map_err(|e| TemplateError::Render(format!("Failed to parse template: {}", e)))?;

		compiled
			.render_to_string(data)
			.map_err(|e| TemplateError::Render(format!("Failed to render template: {}", e)))
	}
}

/// Runtime renderer backed by Tera.
///
/// Templates arrive over the network and are rendered once per call, so no
/// Tera instance is kept between renders. `{{ name }}` placeholders are
/// resolved against the top-level keys of the data object.
///
/// # Examples
///
/// ```
/// use pageshell_templates::{TemplateEngine, TeraEngine};
/// use serde_json::json;
///
/// let engine = TeraEngine::new();
/// let html = engine
///     .render("<h1>Hello {{ name }}</h1>", &json!({ "name": "Tyler" }))
///     .unwrap();
/// assert_eq!(html, "<h1>Hello Tyler</h1>");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TeraEngine {
	autoescape: bool,
}

impl TeraEngine {
	/// Creates an engine that HTML-escapes substituted values.
	pub fn new() -> Self {
		Self { autoescape: true }
	}

	/// Turns HTML escaping of substituted values on or off.
	pub fn with_autoescape(mut self, autoescape: bool) -> Self {
		self.autoescape = autoescape;
		self
	}

	/// Whether substituted values are HTML-escaped.
	pub fn autoescape(&self) -> bool {
		self.autoescape
	}
}

impl Default for TeraEngine {
	fn default() -> Self {
		Self::new()
	}
}

impl TemplateEngine for TeraEngine {
	fn render(&self, template: &str, data: &Value) -> Result<String, TemplateError> {
		let context = Context::from_value(data.clone())
			.map_err(|e| TemplateError::Render(format!("Failed to create context: {}", e)))?;

		Tera::one_off(template, &context, self.autoescape)
			.map_err(|e| TemplateError::Render(describe(&e)))
	}
}

// Tera's top-level message only names the template; the cause carries the
// parser or lookup detail.
fn describe(err: &tera::Error) -> String {
	use std::error::Error;

	let mut message = err.to_string();
	let mut source = err.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}
