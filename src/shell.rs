//! Composition root
//!
//! [`Shell`] owns the application's single [`Router`] and single
//! [`TemplateManager`]. Nothing is global: whoever owns the page lifecycle
//! constructs a `Shell` and keeps it.

use pageshell_core::{EngineKind, SettingsError, ShellSettings, info_log};
use pageshell_router::{History, PopStateTarget, Router, RouterError};
use pageshell_templates::{
	Container, MustacheEngine, TemplateEngine, TemplateError, TemplateManager, TemplateSource,
	TeraEngine,
};
use std::sync::Arc;

/// Error type for shell start-up and rendering.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
	#[error(transparent)]
	Router(#[from] RouterError),

	#[error(transparent)]
	Template(#[from] TemplateError),

	#[error(transparent)]
	Settings(#[from] SettingsError),

	/// The page is missing something the shell needs.
	#[error("DOM error: {0}")]
	Dom(String),
}

/// Paths registered by [`Shell::install_default_routes`].
pub const DEFAULT_ROUTES: [&str; 2] = ["/", "/durp"];

/// The application: one router, one template manager, one set of settings.
///
/// # Examples
///
/// ```
/// use pageshell::{MemoryHistory, Shell, ShellSettings};
/// use pageshell::templates::{InMemorySource, MemoryContainer};
/// use std::sync::Arc;
///
/// # futures::executor::block_on(async {
/// let history = Arc::new(MemoryHistory::new("/durp"));
/// let source = InMemorySource::new().with_template("home", "<h1>Hello {{name}}</h1>");
/// let shell = Shell::with_source(ShellSettings::default(), history.clone(), source);
///
/// assert_eq!(shell.start(history.as_ref()).unwrap(), true);
///
/// let frame = MemoryContainer::new();
/// shell.render_initial(&frame).await.unwrap();
/// assert_eq!(frame.content(), "<h1>Hello Tyler</h1>");
/// # });
/// ```
pub struct Shell {
	settings: ShellSettings,
	router: Router,
	templates: TemplateManager,
}

impl std::fmt::Debug for Shell {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Shell")
			.field("settings", &self.settings)
			.field("router", &self.router)
			.field("templates", &self.templates)
			.finish()
	}
}

impl Shell {
	/// Assembles a shell from ready-made parts.
	pub fn new(settings: ShellSettings, history: Arc<dyn History>, templates: TemplateManager) -> Self {
		Self {
			settings,
			router: Router::new(history),
			templates,
		}
	}

	/// Assembles a shell whose template manager reads from `source` and is
	/// configured from `settings`.
	pub fn with_source<S>(settings: ShellSettings, history: Arc<dyn History>, source: S) -> Self
	where
		S: TemplateSource + 'static,
	{
		let engine: Arc<dyn TemplateEngine> = match settings.engine {
			EngineKind::Mustache => Arc::new(MustacheEngine::new()),
			EngineKind::Tera => Arc::new(TeraEngine::new().with_autoescape(settings.autoescape)),
		};
		let templates = TemplateManager::from_shared(Arc::new(source), engine)
			.with_coalescing(settings.coalesce_template_requests);
		Self::new(settings, history, templates)
	}

	/// Settings the shell was built with.
	pub fn settings(&self) -> &ShellSettings {
		&self.settings
	}

	/// The application router.
	pub fn router(&self) -> &Router {
		&self.router
	}

	/// The application template manager.
	pub fn templates(&self) -> &TemplateManager {
		&self.templates
	}

	/// Registers the sample routes, each a no-op.
	pub fn install_default_routes(&self) {
		for path in DEFAULT_ROUTES {
			self.router.install_route(path, || {});
		}
	}

	/// Installs the default routes, subscribes to `target`'s back/forward
	/// notifications and dispatches the path the page loaded with.
	///
	/// Returns whether the initial path had a route.
	pub fn start<T>(&self, target: &T) -> Result<bool, ShellError>
	where
		T: PopStateTarget + ?Sized,
	{
		self.install_default_routes();
		self.router.connect_signals(target)?;
		let matched = self.router.route()?;
		info_log!(
			"Shell started with {} routes (initial path matched: {})",
			self.router.route_count(),
			matched
		);
		Ok(matched)
	}

	/// Renders the configured initial template and context into `container`.
	pub async fn render_initial<C>(&self, container: &C) -> Result<(), ShellError>
	where
		C: Container + ?Sized,
	{
		self.templates
			.render(
				container,
				&self.settings.initial_template,
				&self.settings.initial_context,
			)
			.await?;
		Ok(())
	}
}
