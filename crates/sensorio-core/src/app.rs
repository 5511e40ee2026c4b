//! App state type

use std::sync::Arc;

use sensorio_types::auth_adapter::AuthAdapter;
use sensorio_types::meta_adapter::MetaAdapter;
use sensorio_types::worker;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub worker: Arc<worker::WorkerPool>,
	pub opts: AppBuilderOpts,

	pub auth_adapter: Arc<dyn AuthAdapter>,
	pub meta_adapter: Arc<dyn MetaAdapter>,
}

pub type App = Arc<AppState>;

pub struct Adapters {
	pub auth_adapter: Option<Arc<dyn AuthAdapter>>,
	pub meta_adapter: Option<Arc<dyn MetaAdapter>>,
}

#[derive(Clone, Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
}

// vim: ts=4
