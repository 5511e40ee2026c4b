use sensorio_types::auth_adapter::AuthCtx;
use sensorio_types::meta_adapter::{CreateProjectData, Project, UpdateProjectData};

use crate::prelude::*;
use crate::{cascade, ownership, validate};

pub async fn create(
	app: &App,
	auth: &AuthCtx,
	name: &str,
	description: Option<&str>,
) -> SnResult<Project> {
	validate::name(name)?;
	validate::description(description)?;

	app.meta_adapter
		.create_project(CreateProjectData { user_id: &auth.user_id, name, description })
		.await
}

pub async fn get(app: &App, auth: &AuthCtx, project_id: &str) -> SnResult<Project> {
	ownership::resolve_project(app, auth, project_id).await
}

pub async fn list(app: &App, auth: &AuthCtx) -> SnResult<Vec<Project>> {
	app.meta_adapter.list_projects(&auth.user_id).await
}

pub async fn update(
	app: &App,
	auth: &AuthCtx,
	project_id: &str,
	data: UpdateProjectData,
) -> SnResult<Project> {
	if data.name.is_undefined() && data.description.is_undefined() {
		return Err(Error::BadUpdateData);
	}
	if data.name.is_null() {
		return Err(Error::ValidationError("name cannot be cleared".into()));
	}
	if let Some(name) = data.name.value() {
		validate::name(name)?;
	}
	if let Some(description) = data.description.value() {
		validate::description(Some(description))?;
	}

	ownership::resolve_project(app, auth, project_id).await?;
	app.meta_adapter.update_project(&auth.user_id, project_id, &data).await?;
	app.meta_adapter.read_project(&auth.user_id, project_id).await
}

pub async fn delete(app: &App, auth: &AuthCtx, project_id: &str) -> SnResult<()> {
	ownership::resolve_project(app, auth, project_id).await?;
	cascade::delete_project(app, project_id).await
}

// vim: ts=4
