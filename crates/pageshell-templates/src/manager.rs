//! Template manager
//!
//! [`TemplateManager`] resolves template names to text through a
//! [`TemplateSource`], keeps every successfully fetched template for its own
//! lifetime, and renders templates into [`Container`]s through a
//! [`TemplateEngine`].
//!
//! ## Concurrent misses
//!
//! By default two overlapping requests for the same uncached name each fetch
//! and each write the cache; whichever finishes last wins. With
//! [`with_coalescing`](TemplateManager::with_coalescing) the first miss
//! registers a pending fetch under the name and later misses await that same
//! fetch instead of starting their own.

use crate::container::Container;
use crate::engine::TemplateEngine;
use crate::error::TemplateError;
use crate::source::TemplateSource;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use pageshell_core::{debug_log, warn_log};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

type PendingFetch = Shared<LocalBoxFuture<'static, Result<Arc<str>, TemplateError>>>;

/// Fetches, caches and renders named templates.
///
/// # Examples
///
/// ```
/// use pageshell_templates::{InMemorySource, MemoryContainer, TemplateManager, TeraEngine};
/// use serde_json::json;
///
/// # futures::executor::block_on(async {
/// let source = InMemorySource::new().with_template("home", "<h1>Hello {{ name }}</h1>");
/// let manager = TemplateManager::new(source, TeraEngine::new());
/// let frame = MemoryContainer::new();
///
/// manager.render(&frame, "home", &json!({ "name": "Tyler" })).await.unwrap();
/// assert_eq!(frame.content(), "<h1>Hello Tyler</h1>");
/// # });
/// ```
pub struct TemplateManager {
	source: Arc<dyn TemplateSource>,
	engine: Arc<dyn TemplateEngine>,
	loaded: RwLock<HashMap<String, Arc<str>>>,
	pending: Mutex<HashMap<String, PendingFetch>>,
	coalesce: bool,
}

impl std::fmt::Debug for TemplateManager {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TemplateManager")
			.field("loaded", &self.cached_names())
			.field("pending", &self.pending.lock().len())
			.field("coalesce", &self.coalesce)
			.finish()
	}
}

impl TemplateManager {
	/// Creates a manager with an empty cache.
	pub fn new<S, E>(source: S, engine: E) -> Self
	where
		S: TemplateSource + 'static,
		E: TemplateEngine + 'static,
	{
		Self::from_shared(Arc::new(source), Arc::new(engine))
	}

	/// Creates a manager over a source and engine the caller keeps handles to.
	pub fn from_shared(source: Arc<dyn TemplateSource>, engine: Arc<dyn TemplateEngine>) -> Self {
		Self {
			source,
			engine,
			loaded: RwLock::new(HashMap::new()),
			pending: Mutex::new(HashMap::new()),
			coalesce: false,
		}
	}

	/// Shares one fetch between concurrent misses for the same name.
	pub fn with_coalescing(mut self, coalesce: bool) -> Self {
		self.coalesce = coalesce;
		self
	}

	/// Whether concurrent misses share a fetch.
	pub fn coalescing(&self) -> bool {
		self.coalesce
	}

	/// Returns the text of template `name`, fetching it on first use.
	///
	/// Once a fetch succeeds the text is served from memory for the lifetime
	/// of the manager. Failed fetches are not cached.
	pub async fn get_template(&self, name: &str) -> Result<Arc<str>, TemplateError> {
		if let Some(text) = self.cached(name) {
			debug_log!("Template cache hit: {}", name);
			return Ok(text);
		}
		debug_log!("Template cache miss: {}", name);

		let text = if self.coalesce {
			self.fetch_shared(name).await?
		} else {
			Arc::from(self.download_template(name).await?)
		};

		self.loaded
			.write()
			.insert(name.to_string(), Arc::clone(&text));
		Ok(text)
	}

	/// Fetches template `name` from the source, bypassing the cache.
	pub async fn download_template(&self, name: &str) -> Result<String, TemplateError> {
		self.source
			.fetch(name)
			.await
			.inspect_err(|err| warn_log!("Template download failed: {}", err))
	}

	/// Renders template `template_name` with `data` into `container`.
	///
	/// The container is left untouched when the template cannot be fetched
	/// or rendered.
	pub async fn render<C, T>(
		&self,
		container: &C,
		template_name: &str,
		data: &T,
	) -> Result<(), TemplateError>
	where
		C: Container + ?Sized,
		T: Serialize + ?Sized,
	{
		let data = serde_json::to_value(data)
			.map_err(|e| TemplateError::Render(format!("Failed to serialize context: {}", e)))?;
		let template = self.get_template(template_name).await?;
		let html = self.engine.render(&template, &data)?;
		container.replace_content(&html);
		Ok(())
	}

	/// Checks if template `name` is cached.
	pub fn is_cached(&self, name: &str) -> bool {
		self.loaded.read().contains_key(name)
	}

	/// Names of all cached templates, sorted.
	pub fn cached_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.loaded.read().keys().cloned().collect();
		names.sort();
		names
	}

	/// Drops every cached template.
	pub fn clear(&self) {
		self.loaded.write().clear();
	}

	fn cached(&self, name: &str) -> Option<Arc<str>> {
		self.loaded.read().get(name).cloned()
	}

	async fn fetch_shared(&self, name: &str) -> Result<Arc<str>, TemplateError> {
		let fetch = {
			let mut pending = self.pending.lock();
			pending
				.entry(name.to_string())
				.or_insert_with(|| {
					let source = Arc::clone(&self.source);
					let name = name.to_string();
					async move {
						source
							.fetch(&name)
							.await
							.map(Arc::<str>::from)
							.inspect_err(|err| warn_log!("Template download failed: {}", err))
					}
					.boxed_local()
					.shared()
				})
				.clone()
		};

		let result = fetch.clone().await;

		// A later miss may already have registered a fresh fetch under this
		// name; only the entry for this fetch is removed.
		let mut pending = self.pending.lock();
		if pending.get(name).is_some_and(|p| p.ptr_eq(&fetch)) {
			pending.remove(name);
		}
		result
	}
}
