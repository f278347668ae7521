//! Template sources
//!
//! A [`TemplateSource`] turns a template name into raw template text. The
//! manager caches what a source returns; sources themselves never cache.

use crate::error::TemplateError;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fetches raw template text by name.
///
/// Futures are not required to be `Send`: in the browser every fetch runs on
/// the page's single event loop.
#[async_trait(?Send)]
pub trait TemplateSource {
	/// Fetches the template called `name`.
	async fn fetch(&self, name: &str) -> Result<String, TemplateError>;
}

/// Fetches templates with an HTTP GET to `{base_url}/{name}`.
///
/// Only a `200 OK` response counts as success. Any other status becomes
/// [`TemplateError::Status`]; a request that fails before a status arrives
/// becomes [`TemplateError::Transport`].
///
/// # Examples
///
/// ```
/// use pageshell_templates::HttpTemplateSource;
///
/// let source = HttpTemplateSource::new("http://localhost:8080/template/");
/// assert_eq!(source.template_url("home"), "http://localhost:8080/template/home");
/// ```
#[derive(Debug, Clone)]
pub struct HttpTemplateSource {
	client: reqwest::Client,
	base_url: String,
}

impl HttpTemplateSource {
	/// Creates a source with a default client.
	///
	/// `base_url` must be absolute; in the browser build it from the page
	/// origin.
	pub fn new(base_url: impl Into<String>) -> Self {
		Self::with_client(reqwest::Client::new(), base_url)
	}

	/// Creates a source that sends requests through `client`.
	pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
		let base_url = base_url.into().trim_end_matches('/').to_string();
		Self { client, base_url }
	}

	/// Base URL without a trailing slash.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// URL the template called `name` is fetched from.
	pub fn template_url(&self, name: &str) -> String {
		format!("{}/{}", self.base_url, name)
	}
}

#[async_trait(?Send)]
impl TemplateSource for HttpTemplateSource {
	async fn fetch(&self, name: &str) -> Result<String, TemplateError> {
		let url = self.template_url(name);
		let response = self
			.client
			.get(&url)
			.send()
			.await
			.map_err(|e| TemplateError::Transport {
				name: name.to_string(),
				message: e.to_string(),
			})?;

		let status = response.status();
		if status != reqwest::StatusCode::OK {
			return Err(TemplateError::Status {
				name: name.to_string(),
				status: status.as_u16(),
			});
		}

		response.text().await.map_err(|e| TemplateError::Transport {
			name: name.to_string(),
			message: e.to_string(),
		})
	}
}

/// Serves templates from memory.
///
/// Useful for templates embedded at build time and for tests: every call to
/// [`fetch`](TemplateSource::fetch) is counted, and a name can be made to fail
/// with a chosen error.
///
/// # Examples
///
/// ```
/// use pageshell_templates::InMemorySource;
///
/// let source = InMemorySource::new()
///     .with_template("home", "<h1>Hello {{ name }}</h1>");
/// assert!(source.contains("home"));
/// assert_eq!(source.fetch_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct InMemorySource {
	templates: RwLock<HashMap<String, Result<String, TemplateError>>>,
	fetches: AtomicUsize,
}

impl InMemorySource {
	/// Creates an empty source.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a template, builder style.
	pub fn with_template(self, name: impl Into<String>, body: impl Into<String>) -> Self {
		self.insert(name, body);
		self
	}

	/// Makes fetching `name` fail with `error`, builder style.
	pub fn with_failure(self, name: impl Into<String>, error: TemplateError) -> Self {
		self.templates.write().insert(name.into(), Err(error));
		self
	}

	/// Adds or replaces a template.
	pub fn insert(&self, name: impl Into<String>, body: impl Into<String>) {
		self.templates.write().insert(name.into(), Ok(body.into()));
	}

	/// Checks if `name` is known, successful or not.
	pub fn contains(&self, name: &str) -> bool {
		self.templates.read().contains_key(name)
	}

	/// Number of fetches served so far, including failed ones.
	pub fn fetch_count(&self) -> usize {
		self.fetches.load(Ordering::SeqCst)
	}
}

#[async_trait(?Send)]
impl TemplateSource for InMemorySource {
	async fn fetch(&self, name: &str) -> Result<String, TemplateError> {
		self.fetches.fetch_add(1, Ordering::SeqCst);
		self.templates
			.read()
			.get(name)
			.cloned()
			.unwrap_or_else(|| Err(TemplateError::NotFound(name.to_string())))
	}
}
