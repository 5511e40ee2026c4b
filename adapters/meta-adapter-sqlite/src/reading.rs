//! Sensor reading storage. Readings are immutable: no update path exists,
//! and deletion happens only through the batch cascade operations.

use chrono::{Days, NaiveDate, NaiveTime};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use crate::utils::*;
use sensorio::meta_adapter::{CreateReadingData, ReadingFilter, SensorReading};
use sensorio::prelude::*;
use sensorio::utils::random_id;

fn day_start(date: NaiveDate) -> i64 {
	date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

fn next_day_start(date: NaiveDate) -> i64 {
	match date.checked_add_days(Days::new(1)) {
		Some(next) => day_start(next),
		None => i64::MAX,
	}
}

fn from_row(row: &SqliteRow) -> SnResult<SensorReading> {
	let data_type_json: &str = row.try_get("data_type").or(Err(Error::DbError))?;
	let value_json: Option<&str> = row.try_get("value").or(Err(Error::DbError))?;

	Ok(SensorReading {
		reading_id: row.try_get("reading_id").or(Err(Error::DbError))?,
		user_id: row.try_get("user_id").or(Err(Error::DbError))?,
		device_id: row.try_get("device_id").or(Err(Error::DbError))?,
		data_type: serde_json::from_str(data_type_json).or(Err(Error::DbError))?,
		value: match value_json {
			Some(json) => serde_json::from_str(json).or(Err(Error::DbError))?,
			None => serde_json::Value::Null,
		},
		created_at: row
			.try_get::<i64, _>("created_at")
			.map(Timestamp)
			.or(Err(Error::DbError))?,
	})
}

pub(crate) async fn create(
	db: &SqlitePool,
	data: CreateReadingData<'_>,
) -> SnResult<SensorReading> {
	let reading_id = random_id();
	let data_type_json = serde_json::to_string(&data.data_type).map_err(|_| Error::DbError)?;
	let value_json = serde_json::to_string(data.value).map_err(|_| Error::DbError)?;

	sqlx::query(
		"INSERT INTO readings (reading_id, user_id, device_id, data_type, value)
		VALUES (?1, ?2, ?3, ?4, ?5)",
	)
	.bind(reading_id.as_ref())
	.bind(data.user_id)
	.bind(data.device_id)
	.bind(&data_type_json)
	.bind(&value_json)
	.execute(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	let row = sqlx::query(
		"SELECT reading_id, user_id, device_id, data_type, value, created_at
		FROM readings WHERE reading_id=?1",
	)
	.bind(reading_id.as_ref())
	.fetch_one(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	from_row(&row)
}

pub(crate) async fn list(
	db: &SqlitePool,
	device_id: &str,
	filter: &ReadingFilter,
) -> SnResult<Vec<SensorReading>> {
	let mut query = sqlx::QueryBuilder::new(
		"SELECT reading_id, user_id, device_id, data_type, value, created_at
		FROM readings WHERE device_id=",
	);
	query.push_bind(device_id);

	if let Some(date) = filter.date {
		query.push(" AND created_at>=").push_bind(day_start(date));
		query.push(" AND created_at<").push_bind(next_day_start(date));
	} else if let (Some(start_date), Some(end_date)) = (filter.start_date, filter.end_date) {
		query.push(" AND created_at>=").push_bind(day_start(start_date));
		query.push(" AND created_at<").push_bind(next_day_start(end_date));
	}

	let rows = query
		.build()
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	rows.iter().map(from_row).collect()
}

pub(crate) async fn delete_by_devices(
	db: &SqlitePool,
	device_ids: &[Box<str>],
) -> SnResult<u64> {
	if device_ids.is_empty() {
		return Ok(0);
	}

	let query = sqlx::QueryBuilder::new("DELETE FROM readings WHERE device_id IN ");
	let mut query = push_in(query, device_ids);

	let res = query
		.build()
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected())
}

pub(crate) async fn delete_by_user(db: &SqlitePool, user_id: &str) -> SnResult<u64> {
	let res = sqlx::query("DELETE FROM readings WHERE user_id=?1")
		.bind(user_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected())
}

// vim: ts=4
