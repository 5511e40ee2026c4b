use sensorio_types::auth_adapter::AuthCtx;
use sensorio_types::meta_adapter::{CreateDeviceData, Device};
use sensorio_types::schema::{DataType, DeviceType};

use crate::prelude::*;
use crate::{cascade, ownership, validate};

/// Creates a device under a module. Each declared data type is checked
/// against the unit compatibility table before anything is persisted.
pub async fn create(
	app: &App,
	auth: &AuthCtx,
	module_id: &str,
	name: &str,
	description: Option<&str>,
	device_type: DeviceType,
	data_types: &[DataType],
) -> SnResult<Device> {
	validate::name(name)?;
	validate::description(description)?;
	validate::data_types(data_types)?;

	let module = ownership::resolve_module(app, auth, module_id).await?;

	app.meta_adapter
		.create_device(CreateDeviceData {
			user_id: &module.user_id,
			module_id: &module.module_id,
			name,
			description,
			device_type,
			data_types,
		})
		.await
}

pub async fn get(
	app: &App,
	auth: &AuthCtx,
	module_id: &str,
	device_id: &str,
) -> SnResult<Device> {
	ownership::resolve_device_in_module(app, auth, module_id, device_id).await
}

pub async fn list(app: &App, auth: &AuthCtx, module_id: &str) -> SnResult<Vec<Device>> {
	ownership::resolve_module(app, auth, module_id).await?;
	app.meta_adapter.list_devices(&auth.user_id, module_id).await
}

pub async fn delete(
	app: &App,
	auth: &AuthCtx,
	module_id: &str,
	device_id: &str,
) -> SnResult<()> {
	ownership::resolve_device_in_module(app, auth, module_id, device_id).await?;
	cascade::delete_device(app, device_id).await
}

// vim: ts=4
