use sensorio_types::auth_adapter::AuthCtx;
use sensorio_types::meta_adapter::{CreateReadingData, ReadingFilter, SensorReading};
use sensorio_types::schema::DataType;

use crate::ownership;
use crate::prelude::*;

/// Creates a reading. Its data type must be one the device declares, by
/// value equality; a mismatch is a validation failure, distinct from the
/// device itself being unknown.
pub async fn create(
	app: &App,
	auth: &AuthCtx,
	device_id: &str,
	data_type: DataType,
	value: &serde_json::Value,
) -> SnResult<SensorReading> {
	let device = ownership::resolve_device(app, auth, device_id).await?;

	if !device.data_types.contains(&data_type) {
		return Err(Error::ValidationError(format!(
			"data type '{}'/'{}' is not declared on device '{}'",
			data_type.measurement_type, data_type.measurement_unit, device.name
		)));
	}

	app.meta_adapter
		.create_reading(CreateReadingData {
			user_id: &device.user_id,
			device_id: &device.device_id,
			data_type,
			value,
		})
		.await
}

/// Lists readings of a device, optionally narrowed to a day or a day range.
/// No ordering is promised to callers.
pub async fn list(
	app: &App,
	auth: &AuthCtx,
	device_id: &str,
	filter: &ReadingFilter,
) -> SnResult<Vec<SensorReading>> {
	ownership::resolve_device(app, auth, device_id).await?;
	app.meta_adapter.list_readings(device_id, filter).await
}

// vim: ts=4
