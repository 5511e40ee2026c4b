use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde::Deserialize;

use crate::prelude::*;
use crate::project::service;
use sensorio_types::meta_adapter::{Project, UpdateProjectData};

#[derive(Debug, Deserialize)]
pub struct CreateProjectReq {
	pub name: String,
	pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchProjectReq {
	#[serde(default)]
	pub name: Patch<Box<str>>,
	#[serde(default)]
	pub description: Patch<Box<str>>,
}

impl From<PatchProjectReq> for UpdateProjectData {
	fn from(req: PatchProjectReq) -> Self {
		UpdateProjectData { name: req.name, description: req.description }
	}
}

pub async fn create_project(
	State(app): State<App>,
	Auth(auth): Auth,
	Json(req): Json<CreateProjectReq>,
) -> SnResult<(StatusCode, Json<Project>)> {
	let project =
		service::create(&app, &auth, &req.name, req.description.as_deref()).await?;
	Ok((StatusCode::CREATED, Json(project)))
}

pub async fn get_project(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(project_id): Path<String>,
) -> SnResult<Json<Project>> {
	Ok(Json(service::get(&app, &auth, &project_id).await?))
}

pub async fn list_projects(
	State(app): State<App>,
	Auth(auth): Auth,
) -> SnResult<Json<Vec<Project>>> {
	Ok(Json(service::list(&app, &auth).await?))
}

pub async fn patch_project(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(project_id): Path<String>,
	Json(req): Json<PatchProjectReq>,
) -> SnResult<Json<Project>> {
	Ok(Json(service::update(&app, &auth, &project_id, req.into()).await?))
}

pub async fn delete_project(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(project_id): Path<String>,
) -> SnResult<StatusCode> {
	service::delete(&app, &auth, &project_id).await?;
	Ok(StatusCode::NO_CONTENT)
}

// vim: ts=4
