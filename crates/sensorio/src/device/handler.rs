use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde::Deserialize;

use crate::device::service;
use crate::prelude::*;
use sensorio_types::meta_adapter::Device;
use sensorio_types::schema::{DataType, DeviceType};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeviceReq {
	pub name: String,
	pub description: Option<String>,
	pub device_type: DeviceType,
	pub data_types: Vec<DataType>,
}

pub async fn create_device(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(module_id): Path<String>,
	Json(req): Json<CreateDeviceReq>,
) -> SnResult<(StatusCode, Json<Device>)> {
	let device = service::create(
		&app,
		&auth,
		&module_id,
		&req.name,
		req.description.as_deref(),
		req.device_type,
		&req.data_types,
	)
	.await?;
	Ok((StatusCode::CREATED, Json(device)))
}

pub async fn get_device(
	State(app): State<App>,
	Auth(auth): Auth,
	Path((module_id, device_id)): Path<(String, String)>,
) -> SnResult<Json<Device>> {
	Ok(Json(service::get(&app, &auth, &module_id, &device_id).await?))
}

pub async fn list_devices(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(module_id): Path<String>,
) -> SnResult<Json<Vec<Device>>> {
	Ok(Json(service::list(&app, &auth, &module_id).await?))
}

pub async fn delete_device(
	State(app): State<App>,
	Auth(auth): Auth,
	Path((module_id, device_id)): Path<(String, String)>,
) -> SnResult<StatusCode> {
	service::delete(&app, &auth, &module_id, &device_id).await?;
	Ok(StatusCode::NO_CONTENT)
}

// vim: ts=4
