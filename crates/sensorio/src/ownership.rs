//! Ownership resolution.
//!
//! Every mutation-service operation resolves ownership before touching the
//! store. The fast path is the denormalized `user_id` tag every descendant
//! carries: a scoped read (`user_id` + entity id) answers "does this
//! principal own this entity" in one lookup, without walking the chain.
//!
//! When an operation also depends on middle-tier containment ("this device
//! belongs to this module"), the resolver re-verifies the child's forward
//! reference explicitly. The user tag alone cannot do that: a user may own
//! many sibling modules, and a device of one must not be addressable
//! through another.
//!
//! A failed resolution is always the entity-kind "not found" error, whether
//! the entity is missing or merely foreign-owned. This is the deliberate
//! anti-enumeration policy: callers get 404, never 403.

use sensorio_types::auth_adapter::AuthCtx;
use sensorio_types::meta_adapter::{Device, Module, Project};

use crate::prelude::*;

pub async fn resolve_project(
	app: &App,
	auth: &AuthCtx,
	project_id: &str,
) -> SnResult<Project> {
	app.meta_adapter.read_project(&auth.user_id, project_id).await
}

pub async fn resolve_module(app: &App, auth: &AuthCtx, module_id: &str) -> SnResult<Module> {
	app.meta_adapter.read_module(&auth.user_id, module_id).await
}

/// Resolves a module and verifies it is contained in the given project.
pub async fn resolve_module_in_project(
	app: &App,
	auth: &AuthCtx,
	project_id: &str,
	module_id: &str,
) -> SnResult<Module> {
	let project = resolve_project(app, auth, project_id).await?;
	let module = resolve_module(app, auth, module_id).await?;

	if module.project_id != project.project_id {
		return Err(Error::ModuleNotFound);
	}
	Ok(module)
}

pub async fn resolve_device(app: &App, auth: &AuthCtx, device_id: &str) -> SnResult<Device> {
	app.meta_adapter.read_device(&auth.user_id, device_id).await
}

/// Resolves a device and verifies it is contained in the given module.
pub async fn resolve_device_in_module(
	app: &App,
	auth: &AuthCtx,
	module_id: &str,
	device_id: &str,
) -> SnResult<Device> {
	let module = resolve_module(app, auth, module_id).await?;
	let device = resolve_device(app, auth, device_id).await?;

	if device.module_id != module.module_id {
		return Err(Error::DeviceNotFound);
	}
	Ok(device)
}

// vim: ts=4
