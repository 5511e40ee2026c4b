use sensorio_types::auth_adapter::AuthCtx;
use sensorio_types::meta_adapter::{CreateModuleData, Module, UpdateModuleData};

use crate::prelude::*;
use crate::{cascade, ownership, validate};

/// Creates a module under a project. The resolved owner's id is copied down
/// onto the module so later checks need no chain walk.
pub async fn create(
	app: &App,
	auth: &AuthCtx,
	project_id: &str,
	name: &str,
	description: Option<&str>,
) -> SnResult<Module> {
	validate::name(name)?;
	validate::description(description)?;

	let project = ownership::resolve_project(app, auth, project_id).await?;

	app.meta_adapter
		.create_module(CreateModuleData {
			user_id: &project.user_id,
			project_id: &project.project_id,
			name,
			description,
		})
		.await
}

pub async fn get(app: &App, auth: &AuthCtx, module_id: &str) -> SnResult<Module> {
	ownership::resolve_module(app, auth, module_id).await
}

pub async fn list(app: &App, auth: &AuthCtx, project_id: &str) -> SnResult<Vec<Module>> {
	ownership::resolve_project(app, auth, project_id).await?;
	app.meta_adapter.list_modules(&auth.user_id, project_id).await
}

pub async fn update(
	app: &App,
	auth: &AuthCtx,
	module_id: &str,
	data: UpdateModuleData,
) -> SnResult<Module> {
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

	ownership::resolve_module(app, auth, module_id).await?;
	app.meta_adapter.update_module(&auth.user_id, module_id, &data).await?;
	app.meta_adapter.read_module(&auth.user_id, module_id).await
}

/// Deletes a module addressed through its project; containment is verified,
/// not assumed from the user tag.
pub async fn delete(
	app: &App,
	auth: &AuthCtx,
	project_id: &str,
	module_id: &str,
) -> SnResult<()> {
	ownership::resolve_module_in_project(app, auth, project_id, module_id).await?;
	cascade::delete_module(app, module_id).await
}

// vim: ts=4
