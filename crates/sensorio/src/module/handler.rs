use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde::Deserialize;

use crate::module::service;
use crate::prelude::*;
use sensorio_types::meta_adapter::{Module, UpdateModuleData};

#[derive(Debug, Deserialize)]
pub struct CreateModuleReq {
	pub name: String,
	pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchModuleReq {
	#[serde(default)]
	pub name: Patch<Box<str>>,
	#[serde(default)]
	pub description: Patch<Box<str>>,
}

impl From<PatchModuleReq> for UpdateModuleData {
	fn from(req: PatchModuleReq) -> Self {
		UpdateModuleData { name: req.name, description: req.description }
	}
}

pub async fn create_module(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(project_id): Path<String>,
	Json(req): Json<CreateModuleReq>,
) -> SnResult<(StatusCode, Json<Module>)> {
	let module =
		service::create(&app, &auth, &project_id, &req.name, req.description.as_deref())
			.await?;
	Ok((StatusCode::CREATED, Json(module)))
}

pub async fn get_module(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(module_id): Path<String>,
) -> SnResult<Json<Module>> {
	Ok(Json(service::get(&app, &auth, &module_id).await?))
}

pub async fn list_modules(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(project_id): Path<String>,
) -> SnResult<Json<Vec<Module>>> {
	Ok(Json(service::list(&app, &auth, &project_id).await?))
}

pub async fn patch_module(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(module_id): Path<String>,
	Json(req): Json<PatchModuleReq>,
) -> SnResult<Json<Module>> {
	Ok(Json(service::update(&app, &auth, &module_id, req.into()).await?))
}

pub async fn delete_module(
	State(app): State<App>,
	Auth(auth): Auth,
	Path((project_id, module_id)): Path<(String, String)>,
) -> SnResult<StatusCode> {
	service::delete(&app, &auth, &project_id, &module_id).await?;
	Ok(StatusCode::NO_CONTENT)
}

// vim: ts=4
