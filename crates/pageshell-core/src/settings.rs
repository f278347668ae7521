//! Shell settings
//!
//! Settings are plain data with a default for every field, so a partial TOML
//! document only overrides what it names.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Error type for settings loading
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid setting `{key}`: {message}")]
	Invalid { key: &'static str, message: String },
}

/// Template syntax the shell renders with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
	/// `{{name}}`, `{{{raw}}}`, `{{#section}}`; unknown names render empty.
	#[default]
	Mustache,
	/// Tera (Jinja2-like); unknown names are render errors.
	Tera,
}

/// Runtime settings for the shell.
///
/// # Examples
///
/// ```
/// use pageshell_core::ShellSettings;
///
/// let settings = ShellSettings::from_toml_str(r#"
///     initial_template = "dashboard"
///     coalesce_template_requests = true
/// "#).unwrap();
///
/// assert_eq!(settings.initial_template, "dashboard");
/// assert_eq!(settings.template_path, "/template");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
	/// Path prefix templates are served under.
	pub template_path: String,
	/// Absolute origin (`scheme://host[:port]`) of the template server.
	///
	/// In the browser the page origin is used when this is unset.
	pub template_origin: Option<String>,
	/// CSS selector of the element the initial template renders into.
	pub container_selector: String,
	/// Template rendered once the document becomes interactive.
	pub initial_template: String,
	/// Data context for the initial render.
	pub initial_context: Value,
	/// Share one fetch between concurrent misses for the same template.
	pub coalesce_template_requests: bool,
	/// Template syntax of the served templates.
	pub engine: EngineKind,
	/// HTML-escape substituted values. Mustache always escapes `{{name}}`
	/// and never `{{{name}}}`, so this only affects Tera.
	pub autoescape: bool,
}

impl Default for ShellSettings {
	fn default() -> Self {
		Self {
			template_path: "/template".to_string(),
			template_origin: None,
			container_selector: "#frame_area".to_string(),
			initial_template: "home".to_string(),
			initial_context: json!({ "name": "Tyler" }),
			coalesce_template_requests: false,
			engine: EngineKind::default(),
			autoescape: true,
		}
	}
}

impl ShellSettings {
	/// Parses settings from a TOML document and validates them.
	pub fn from_toml_str(input: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(input)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks the invariants the rest of the shell relies on.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if !self.template_path.starts_with('/') {
			return Err(SettingsError::Invalid {
				key: "template_path",
				message: format!("must start with '/', got {:?}", self.template_path),
			});
		}
		if self.initial_template.is_empty() {
			return Err(SettingsError::Invalid {
				key: "initial_template",
				message: "must not be empty".to_string(),
			});
		}
		if !self.initial_context.is_object() {
			return Err(SettingsError::Invalid {
				key: "initial_context",
				message: "must be a table".to_string(),
			});
		}
		Ok(())
	}

	/// Joins an origin and the template path into the base URL templates are
	/// fetched from.
	///
	/// `template_origin` wins over `fallback_origin` when it is set.
	pub fn template_base_url(&self, fallback_origin: &str) -> String {
		let origin = self
			.template_origin
			.as_deref()
			.unwrap_or(fallback_origin)
			.trim_end_matches('/');
		format!("{}{}", origin, self.template_path.trim_end_matches('/'))
	}
}
