//! Module storage

use sqlx::{Row, SqlitePool};

use crate::device;
use crate::utils::*;
use sensorio::meta_adapter::{CreateModuleData, Module, UpdateModuleData};
use sensorio::prelude::*;
use sensorio::utils::random_id;

pub(crate) async fn create(db: &SqlitePool, data: CreateModuleData<'_>) -> SnResult<Module> {
	let module_id = random_id();

	sqlx::query(
		"INSERT INTO modules (module_id, user_id, project_id, name, description)
		VALUES (?1, ?2, ?3, ?4, ?5)",
	)
	.bind(module_id.as_ref())
	.bind(data.user_id)
	.bind(data.project_id)
	.bind(data.name)
	.bind(data.description)
	.execute(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	read(db, data.user_id, &module_id).await
}

pub(crate) async fn read(db: &SqlitePool, user_id: &str, module_id: &str) -> SnResult<Module> {
	let row = sqlx::query(
		"SELECT module_id, user_id, project_id, name, description, created_at, updated_at
		FROM modules WHERE user_id=?1 AND module_id=?2",
	)
	.bind(user_id)
	.bind(module_id)
	.fetch_one(db)
	.await;

	let mut module = map_res(row, Error::ModuleNotFound, |row| {
		Ok(Module {
			module_id: row.try_get("module_id")?,
			user_id: row.try_get("user_id")?,
			project_id: row.try_get("project_id")?,
			name: row.try_get("name")?,
			description: row.try_get("description")?,
			devices: Box::from([]),
			created_at: row.try_get::<i64, _>("created_at").map(Timestamp)?,
			updated_at: row.try_get::<i64, _>("updated_at").map(Timestamp)?,
		})
	})?;

	module.devices = device::list_ids(db, module_id).await?.into_boxed_slice();
	Ok(module)
}

pub(crate) async fn list(
	db: &SqlitePool,
	user_id: &str,
	project_id: &str,
) -> SnResult<Vec<Module>> {
	let rows = sqlx::query(
		"SELECT module_id, user_id, project_id, name, description, created_at, updated_at
		FROM modules WHERE user_id=?1 AND project_id=?2",
	)
	.bind(user_id)
	.bind(project_id)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	let mut modules = Vec::with_capacity(rows.len());
	for row in rows {
		let module_id: Box<str> = row.try_get("module_id").or(Err(Error::DbError))?;
		let devices = device::list_ids(db, &module_id).await?.into_boxed_slice();
		modules.push(Module {
			module_id,
			user_id: row.try_get("user_id").or(Err(Error::DbError))?,
			project_id: row.try_get("project_id").or(Err(Error::DbError))?,
			name: row.try_get("name").or(Err(Error::DbError))?,
			description: row.try_get("description").or(Err(Error::DbError))?,
			devices,
			created_at: row
				.try_get::<i64, _>("created_at")
				.map(Timestamp)
				.or(Err(Error::DbError))?,
			updated_at: row
				.try_get::<i64, _>("updated_at")
				.map(Timestamp)
				.or(Err(Error::DbError))?,
		});
	}
	Ok(modules)
}

pub(crate) async fn update(
	db: &SqlitePool,
	user_id: &str,
	module_id: &str,
	data: &UpdateModuleData,
) -> SnResult<()> {
	let mut query = sqlx::QueryBuilder::new("UPDATE modules SET ");
	let mut has_updates = false;

	has_updates = push_patch!(query, has_updates, "name", &data.name);
	has_updates = push_patch!(query, has_updates, "description", &data.description);

	if !has_updates {
		return Ok(());
	}

	query.push(", updated_at=unixepoch()");
	query.push(" WHERE user_id=").push_bind(user_id);
	query.push(" AND module_id=").push_bind(module_id);

	let res = query
		.build()
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::ModuleNotFound);
	}
	Ok(())
}

pub(crate) async fn delete_many(db: &SqlitePool, module_ids: &[Box<str>]) -> SnResult<u64> {
	if module_ids.is_empty() {
		return Ok(0);
	}

	let query = sqlx::QueryBuilder::new("DELETE FROM modules WHERE module_id IN ");
	let mut query = push_in(query, module_ids);

	let res = query
		.build()
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected())
}

pub(crate) async fn exists(db: &SqlitePool, module_id: &str) -> SnResult<bool> {
	let row = sqlx::query("SELECT 1 FROM modules WHERE module_id=?1")
		.bind(module_id)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(row.is_some())
}

pub(crate) async fn list_ids(db: &SqlitePool, project_id: &str) -> SnResult<Vec<Box<str>>> {
	sqlx::query_scalar("SELECT module_id FROM modules WHERE project_id=?1")
		.bind(project_id)
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)
}

pub(crate) async fn delete_by_user(db: &SqlitePool, user_id: &str) -> SnResult<u64> {
	let res = sqlx::query("DELETE FROM modules WHERE user_id=?1")
		.bind(user_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected())
}

// vim: ts=4
