//! Cascade engine.
//!
//! Deletion propagates strictly bottom-up: sensor readings before their
//! devices, devices before their modules, modules before their project.
//! Each step is a single batch store call, atomic at "delete all matching"
//! granularity. The cascade as a whole is deliberately NOT one transaction:
//! an interruption between steps can only leave orphaned leaves (readings
//! without a device, devices without a module), never an entity whose
//! parent reference dangles.
//!
//! Callers must resolve ownership before invoking any of these.

use crate::prelude::*;

/// Delete a device and all its readings.
pub async fn delete_device(app: &App, device_id: &str) -> SnResult<()> {
	let meta = &app.meta_adapter;
	let device_ids = [Box::<str>::from(device_id)];

	meta.delete_readings_by_devices(&device_ids).await?;
	meta.delete_device(device_id).await?;
	info!("Deleted device {}", device_id);
	Ok(())
}

/// Delete a module, its devices, and their readings.
pub async fn delete_module(app: &App, module_id: &str) -> SnResult<()> {
	let meta = &app.meta_adapter;
	let module_ids = [Box::<str>::from(module_id)];

	let device_ids = meta.list_device_ids(module_id).await?;
	if !device_ids.is_empty() {
		meta.delete_readings_by_devices(&device_ids).await?;
		meta.delete_devices_by_modules(&module_ids).await?;
	}
	meta.delete_modules(&module_ids).await?;
	info!("Deleted module {} ({} devices)", module_id, device_ids.len());
	Ok(())
}

/// Delete a project and everything beneath it.
pub async fn delete_project(app: &App, project_id: &str) -> SnResult<()> {
	let meta = &app.meta_adapter;

	let module_ids = meta.list_module_ids(project_id).await?;
	if !module_ids.is_empty() {
		let device_ids = meta.list_device_ids_by_modules(&module_ids).await?;
		if !device_ids.is_empty() {
			meta.delete_readings_by_devices(&device_ids).await?;
			meta.delete_devices_by_modules(&module_ids).await?;
		}
		meta.delete_modules(&module_ids).await?;
	}
	meta.delete_project(project_id).await?;
	info!("Deleted project {} ({} modules)", project_id, module_ids.len());
	Ok(())
}

/// Delete a user account and every entity it owns.
///
/// Uses the flat per-kind batches the `user_id` tag makes possible instead
/// of walking project by project; the bottom-up order is the same.
pub async fn delete_user(app: &App, user_id: &str) -> SnResult<()> {
	let meta = &app.meta_adapter;

	let readings = meta.delete_readings_by_user(user_id).await?;
	let devices = meta.delete_devices_by_user(user_id).await?;
	let modules = meta.delete_modules_by_user(user_id).await?;
	let projects = meta.delete_projects_by_user(user_id).await?;
	app.auth_adapter.delete_user(user_id).await?;

	info!(
		"Deleted user {} ({} projects, {} modules, {} devices, {} readings)",
		user_id, projects, modules, devices, readings
	);
	Ok(())
}

// vim: ts=4
