//! App builder - constructs and runs the Sensorio application

use std::sync::Arc;

use crate::prelude::*;
use crate::routes;
use sensorio_core::app::{Adapters, AppBuilderOpts, AppState, VERSION};
use sensorio_types::auth_adapter::AuthAdapter;
use sensorio_types::meta_adapter::MetaAdapter;
use sensorio_types::worker;

pub struct AppBuilder {
	opts: AppBuilderOpts,
	worker: Option<Arc<worker::WorkerPool>>,
	adapters: Adapters,
}

impl AppBuilder {
	pub fn new() -> Self {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();

		AppBuilder {
			opts: AppBuilderOpts { listen: "127.0.0.1:8001".into() },
			worker: None,
			adapters: Adapters { auth_adapter: None, meta_adapter: None },
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn worker(&mut self, worker: Arc<worker::WorkerPool>) -> &mut Self {
		self.worker = Some(worker);
		self
	}

	// Adapters
	pub fn auth_adapter(&mut self, auth_adapter: Arc<dyn AuthAdapter>) -> &mut Self {
		self.adapters.auth_adapter = Some(auth_adapter);
		self
	}
	pub fn meta_adapter(&mut self, meta_adapter: Arc<dyn MetaAdapter>) -> &mut Self {
		self.adapters.meta_adapter = Some(meta_adapter);
		self
	}

	/// Assemble the shared application state.
	pub fn build(&mut self) -> SnResult<App> {
		let auth_adapter = self
			.adapters
			.auth_adapter
			.take()
			.ok_or_else(|| Error::Internal("auth adapter not configured".into()))?;
		let meta_adapter = self
			.adapters
			.meta_adapter
			.take()
			.ok_or_else(|| Error::Internal("meta adapter not configured".into()))?;
		let worker =
			self.worker.take().unwrap_or_else(|| Arc::new(worker::WorkerPool::new(2)));

		Ok(Arc::new(AppState {
			worker,
			opts: self.opts.clone(),
			auth_adapter,
			meta_adapter,
		}))
	}

	/// Build the app and serve it until the process is stopped.
	pub async fn run(&mut self) -> SnResult<()> {
		let app = self.build()?;
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Sensorio {} listening on {}", VERSION, app.opts.listen);

		axum::serve(listener, router).await?;
		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
