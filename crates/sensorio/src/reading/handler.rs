use axum::{
	Json,
	extract::{Path, Query, State},
	http::StatusCode,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::prelude::*;
use crate::reading::service;
use sensorio_types::meta_adapter::{ReadingFilter, SensorReading};
use sensorio_types::schema::DataType;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReadingReq {
	pub data_type: DataType,
	pub value: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListReadingsQuery {
	pub date: Option<NaiveDate>,
	pub start_date: Option<NaiveDate>,
	pub end_date: Option<NaiveDate>,
}

impl From<ListReadingsQuery> for ReadingFilter {
	fn from(query: ListReadingsQuery) -> Self {
		ReadingFilter {
			date: query.date,
			start_date: query.start_date,
			end_date: query.end_date,
		}
	}
}

pub async fn create_reading(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(device_id): Path<String>,
	Json(req): Json<CreateReadingReq>,
) -> SnResult<(StatusCode, Json<SensorReading>)> {
	let reading =
		service::create(&app, &auth, &device_id, req.data_type, &req.value).await?;
	Ok((StatusCode::CREATED, Json(reading)))
}

pub async fn list_readings(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(device_id): Path<String>,
	Query(query): Query<ListReadingsQuery>,
) -> SnResult<Json<Vec<SensorReading>>> {
	let filter = query.into();
	Ok(Json(service::list(&app, &auth, &device_id, &filter).await?))
}

// vim: ts=4
