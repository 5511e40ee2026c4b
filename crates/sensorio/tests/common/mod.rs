//! Shared harness for service-level tests: a real app over SQLite adapters
//! in a temp directory.

use std::sync::Arc;

use tempfile::TempDir;

use sensorio::{App, AppBuilder};
use sensorio_auth_adapter_sqlite::AuthAdapterSqlite;
use sensorio_meta_adapter_sqlite::MetaAdapterSqlite;
use sensorio_types::auth_adapter::AuthCtx;
use sensorio_types::schema::{DataType, MeasurementType, MeasurementUnit};

pub async fn test_app() -> (App, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let worker = Arc::new(sensorio_types::worker::WorkerPool::new(1));

	let auth_adapter = Arc::new(
		AuthAdapterSqlite::new(worker.clone(), temp_dir.path().join("auth.db"))
			.await
			.expect("Failed to create auth adapter"),
	);
	let meta_adapter = Arc::new(
		MetaAdapterSqlite::new(temp_dir.path().join("meta.db"))
			.await
			.expect("Failed to create meta adapter"),
	);

	let app = AppBuilder::new()
		.worker(worker)
		.auth_adapter(auth_adapter)
		.meta_adapter(meta_adapter)
		.build()
		.expect("Failed to build app");

	(app, temp_dir)
}

pub async fn register(app: &App, username: &str) -> AuthCtx {
	let email = format!("{username}@example.com");
	let user = sensorio::auth::service::register(app, username, &email, "password1")
		.await
		.expect("Failed to register user");

	AuthCtx { user_id: user.user_id, username: user.username }
}

pub fn celsius() -> DataType {
	DataType {
		measurement_type: MeasurementType::Temperature,
		measurement_unit: MeasurementUnit::Celsius,
	}
}

// vim: ts=4
