//! SQLite-backed entity store for Sensorio.
//!
//! One database file holds the whole entity hierarchy. The child-id lists
//! exposed on parents are derived from the children's forward references
//! through the reverse-lookup indexes created in `init_db`; nothing
//! denormalized is stored, so the lists cannot drift out of sync.

mod device;
mod module;
mod project;
mod reading;
mod utils;

use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use async_trait::async_trait;
use sensorio::meta_adapter::{
	CreateDeviceData, CreateModuleData, CreateProjectData, CreateReadingData, Device,
	MetaAdapter, Module, Project, ReadingFilter, SensorReading, UpdateModuleData,
	UpdateProjectData,
};
use sensorio::prelude::*;

#[derive(Debug)]
pub struct MetaAdapterSqlite {
	db: SqlitePool,
}

impl MetaAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> SnResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		init_db(&db)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl MetaAdapter for MetaAdapterSqlite {
	// Project management
	//********************
	async fn create_project(&self, data: CreateProjectData<'_>) -> SnResult<Project> {
		project::create(&self.db, data).await
	}
	async fn read_project(&self, user_id: &str, project_id: &str) -> SnResult<Project> {
		project::read(&self.db, user_id, project_id).await
	}
	async fn list_projects(&self, user_id: &str) -> SnResult<Vec<Project>> {
		project::list(&self.db, user_id).await
	}
	async fn update_project(
		&self,
		user_id: &str,
		project_id: &str,
		data: &UpdateProjectData,
	) -> SnResult<()> {
		project::update(&self.db, user_id, project_id, data).await
	}
	async fn delete_project(&self, project_id: &str) -> SnResult<()> {
		project::delete(&self.db, project_id).await
	}
	async fn project_exists(&self, project_id: &str) -> SnResult<bool> {
		project::exists(&self.db, project_id).await
	}
	async fn delete_projects_by_user(&self, user_id: &str) -> SnResult<u64> {
		project::delete_by_user(&self.db, user_id).await
	}

	// Module management
	//*******************
	async fn create_module(&self, data: CreateModuleData<'_>) -> SnResult<Module> {
		module::create(&self.db, data).await
	}
	async fn read_module(&self, user_id: &str, module_id: &str) -> SnResult<Module> {
		module::read(&self.db, user_id, module_id).await
	}
	async fn list_modules(&self, user_id: &str, project_id: &str) -> SnResult<Vec<Module>> {
		module::list(&self.db, user_id, project_id).await
	}
	async fn update_module(
		&self,
		user_id: &str,
		module_id: &str,
		data: &UpdateModuleData,
	) -> SnResult<()> {
		module::update(&self.db, user_id, module_id, data).await
	}
	async fn delete_modules(&self, module_ids: &[Box<str>]) -> SnResult<u64> {
		module::delete_many(&self.db, module_ids).await
	}
	async fn module_exists(&self, module_id: &str) -> SnResult<bool> {
		module::exists(&self.db, module_id).await
	}
	async fn list_module_ids(&self, project_id: &str) -> SnResult<Vec<Box<str>>> {
		module::list_ids(&self.db, project_id).await
	}
	async fn delete_modules_by_user(&self, user_id: &str) -> SnResult<u64> {
		module::delete_by_user(&self.db, user_id).await
	}

	// Device management
	//*******************
	async fn create_device(&self, data: CreateDeviceData<'_>) -> SnResult<Device> {
		device::create(&self.db, data).await
	}
	async fn read_device(&self, user_id: &str, device_id: &str) -> SnResult<Device> {
		device::read(&self.db, user_id, device_id).await
	}
	async fn list_devices(&self, user_id: &str, module_id: &str) -> SnResult<Vec<Device>> {
		device::list(&self.db, user_id, module_id).await
	}
	async fn delete_device(&self, device_id: &str) -> SnResult<()> {
		device::delete(&self.db, device_id).await
	}
	async fn device_exists(&self, device_id: &str) -> SnResult<bool> {
		device::exists(&self.db, device_id).await
	}
	async fn list_device_ids(&self, module_id: &str) -> SnResult<Vec<Box<str>>> {
		device::list_ids(&self.db, module_id).await
	}
	async fn list_device_ids_by_modules(
		&self,
		module_ids: &[Box<str>],
	) -> SnResult<Vec<Box<str>>> {
		device::list_ids_by_modules(&self.db, module_ids).await
	}
	async fn delete_devices_by_modules(&self, module_ids: &[Box<str>]) -> SnResult<u64> {
		device::delete_by_modules(&self.db, module_ids).await
	}
	async fn delete_devices_by_user(&self, user_id: &str) -> SnResult<u64> {
		device::delete_by_user(&self.db, user_id).await
	}

	// Sensor reading management
	//***************************
	async fn create_reading(&self, data: CreateReadingData<'_>) -> SnResult<SensorReading> {
		reading::create(&self.db, data).await
	}
	async fn list_readings(
		&self,
		device_id: &str,
		filter: &ReadingFilter,
	) -> SnResult<Vec<SensorReading>> {
		reading::list(&self.db, device_id, filter).await
	}
	async fn delete_readings_by_devices(&self, device_ids: &[Box<str>]) -> SnResult<u64> {
		reading::delete_by_devices(&self.db, device_ids).await
	}
	async fn delete_readings_by_user(&self, user_id: &str) -> SnResult<u64> {
		reading::delete_by_user(&self.db, user_id).await
	}
}

async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Projects //
	//////////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS projects (
		project_id text NOT NULL,
		user_id text NOT NULL,
		name text NOT NULL,
		description text,
		created_at integer DEFAULT (unixepoch()),
		updated_at integer DEFAULT (unixepoch()),
		PRIMARY KEY(project_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_projects_user ON projects(user_id)")
		.execute(&mut *tx)
		.await?;

	// Modules //
	/////////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS modules (
		module_id text NOT NULL,
		user_id text NOT NULL,
		project_id text NOT NULL,
		name text NOT NULL,
		description text,
		created_at integer DEFAULT (unixepoch()),
		updated_at integer DEFAULT (unixepoch()),
		PRIMARY KEY(module_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_modules_project ON modules(project_id)")
		.execute(&mut *tx)
		.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_modules_user ON modules(user_id)")
		.execute(&mut *tx)
		.await?;

	// Devices //
	/////////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS devices (
		device_id text NOT NULL,
		user_id text NOT NULL,
		module_id text NOT NULL,
		name text NOT NULL,
		description text,
		device_type char(1) NOT NULL,		-- 'S' - Sensor, 'A' - Actuator
		data_types json NOT NULL,
		created_at integer DEFAULT (unixepoch()),
		PRIMARY KEY(device_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_devices_module ON devices(module_id)")
		.execute(&mut *tx)
		.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_devices_user ON devices(user_id)")
		.execute(&mut *tx)
		.await?;

	// Sensor readings //
	/////////////////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS readings (
		reading_id text NOT NULL,
		user_id text NOT NULL,
		device_id text NOT NULL,
		data_type text NOT NULL,
		value text,
		created_at integer DEFAULT (unixepoch()),
		PRIMARY KEY(reading_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_readings_device ON readings(device_id)")
		.execute(&mut *tx)
		.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_readings_user ON readings(user_id)")
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
