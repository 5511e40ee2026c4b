//! Device storage. Declared data types are kept as a JSON column; the
//! unit compatibility check happens at the service boundary, before the
//! adapter is reached.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::utils::*;
use sensorio::meta_adapter::{CreateDeviceData, Device};
use sensorio::prelude::*;
use sensorio::schema::{DataType, DeviceType};
use sensorio::utils::random_id;

fn device_type_code(device_type: DeviceType) -> &'static str {
	match device_type {
		DeviceType::Sensor => "S",
		DeviceType::Actuator => "A",
	}
}

fn from_row(row: &SqliteRow) -> SnResult<Device> {
	let data_types_json: &str = row.try_get("data_types").or(Err(Error::DbError))?;
	let data_types: Box<[DataType]> =
		serde_json::from_str(data_types_json).or(Err(Error::DbError))?;

	let device_type = match row.try_get::<&str, _>("device_type").or(Err(Error::DbError))? {
		"S" => DeviceType::Sensor,
		"A" => DeviceType::Actuator,
		_ => return Err(Error::DbError),
	};

	Ok(Device {
		device_id: row.try_get("device_id").or(Err(Error::DbError))?,
		user_id: row.try_get("user_id").or(Err(Error::DbError))?,
		module_id: row.try_get("module_id").or(Err(Error::DbError))?,
		name: row.try_get("name").or(Err(Error::DbError))?,
		description: row.try_get("description").or(Err(Error::DbError))?,
		device_type,
		data_types,
		created_at: row
			.try_get::<i64, _>("created_at")
			.map(Timestamp)
			.or(Err(Error::DbError))?,
	})
}

pub(crate) async fn create(db: &SqlitePool, data: CreateDeviceData<'_>) -> SnResult<Device> {
	let device_id = random_id();
	let data_types_json =
		serde_json::to_string(data.data_types).map_err(|_| Error::DbError)?;

	sqlx::query(
		"INSERT INTO devices (device_id, user_id, module_id, name, description, device_type, data_types)
		VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
	)
	.bind(device_id.as_ref())
	.bind(data.user_id)
	.bind(data.module_id)
	.bind(data.name)
	.bind(data.description)
	.bind(device_type_code(data.device_type))
	.bind(&data_types_json)
	.execute(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	read(db, data.user_id, &device_id).await
}

pub(crate) async fn read(db: &SqlitePool, user_id: &str, device_id: &str) -> SnResult<Device> {
	let row = sqlx::query(
		"SELECT device_id, user_id, module_id, name, description, device_type, data_types, created_at
		FROM devices WHERE user_id=?1 AND device_id=?2",
	)
	.bind(user_id)
	.bind(device_id)
	.fetch_optional(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	match row {
		Some(row) => from_row(&row),
		None => Err(Error::DeviceNotFound),
	}
}

pub(crate) async fn list(
	db: &SqlitePool,
	user_id: &str,
	module_id: &str,
) -> SnResult<Vec<Device>> {
	let rows = sqlx::query(
		"SELECT device_id, user_id, module_id, name, description, device_type, data_types, created_at
		FROM devices WHERE user_id=?1 AND module_id=?2",
	)
	.bind(user_id)
	.bind(module_id)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	rows.iter().map(from_row).collect()
}

pub(crate) async fn delete(db: &SqlitePool, device_id: &str) -> SnResult<()> {
	let res = sqlx::query("DELETE FROM devices WHERE device_id=?1")
		.bind(device_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::DeviceNotFound);
	}
	Ok(())
}

pub(crate) async fn exists(db: &SqlitePool, device_id: &str) -> SnResult<bool> {
	let row = sqlx::query("SELECT 1 FROM devices WHERE device_id=?1")
		.bind(device_id)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(row.is_some())
}

pub(crate) async fn list_ids(db: &SqlitePool, module_id: &str) -> SnResult<Vec<Box<str>>> {
	sqlx::query_scalar("SELECT device_id FROM devices WHERE module_id=?1")
		.bind(module_id)
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)
}

pub(crate) async fn list_ids_by_modules(
	db: &SqlitePool,
	module_ids: &[Box<str>],
) -> SnResult<Vec<Box<str>>> {
	if module_ids.is_empty() {
		return Ok(Vec::new());
	}

	let query = sqlx::QueryBuilder::new("SELECT device_id FROM devices WHERE module_id IN ");
	let mut query = push_in(query, module_ids);

	let rows = query
		.build()
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	rows.iter()
		.map(|row| row.try_get("device_id").or(Err(Error::DbError)))
		.collect()
}

pub(crate) async fn delete_by_modules(
	db: &SqlitePool,
	module_ids: &[Box<str>],
) -> SnResult<u64> {
	if module_ids.is_empty() {
		return Ok(0);
	}

	let query = sqlx::QueryBuilder::new("DELETE FROM devices WHERE module_id IN ");
	let mut query = push_in(query, module_ids);

	let res = query
		.build()
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected())
}

pub(crate) async fn delete_by_user(db: &SqlitePool, user_id: &str) -> SnResult<u64> {
	let res = sqlx::query("DELETE FROM devices WHERE user_id=?1")
		.bind(user_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected())
}

// vim: ts=4
