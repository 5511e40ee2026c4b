//! Batch-deletion and filter query tests
//!
//! The cascade engine is built from these batch operations; they must be
//! atomic per call and leave unrelated rows untouched.

use sensorio_meta_adapter_sqlite::MetaAdapterSqlite;
use tempfile::TempDir;

use sensorio::meta_adapter::{
	CreateDeviceData, CreateModuleData, CreateProjectData, CreateReadingData, MetaAdapter,
	ReadingFilter,
};
use sensorio::schema::{DataType, DeviceType, MeasurementType, MeasurementUnit};

async fn create_test_adapter() -> (MetaAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = MetaAdapterSqlite::new(temp_dir.path().join("meta.db"))
		.await
		.expect("Failed to create adapter");

	(adapter, temp_dir)
}

fn celsius() -> DataType {
	DataType {
		measurement_type: MeasurementType::Temperature,
		measurement_unit: MeasurementUnit::Celsius,
	}
}

/// user -> project -> 2 modules -> 2 devices each -> 1 reading each
async fn build_hierarchy(adapter: &MetaAdapterSqlite, user_id: &str) -> (Box<str>, Vec<Box<str>>, Vec<Box<str>>) {
	let project = adapter
		.create_project(CreateProjectData { user_id, name: "P", description: None })
		.await
		.expect("Should create project");

	let mut module_ids = Vec::new();
	let mut device_ids = Vec::new();

	for m in 0..2 {
		let module = adapter
			.create_module(CreateModuleData {
				user_id,
				project_id: &project.project_id,
				name: &format!("M{m}"),
				description: None,
			})
			.await
			.expect("Should create module");

		for d in 0..2 {
			let device = adapter
				.create_device(CreateDeviceData {
					user_id,
					module_id: &module.module_id,
					name: &format!("D{m}{d}"),
					description: None,
					device_type: DeviceType::Sensor,
					data_types: &[celsius()],
				})
				.await
				.expect("Should create device");

			adapter
				.create_reading(CreateReadingData {
					user_id,
					device_id: &device.device_id,
					data_type: celsius(),
					value: &serde_json::json!(20.0 + f64::from(d)),
				})
				.await
				.expect("Should create reading");

			device_ids.push(device.device_id);
		}
		module_ids.push(module.module_id);
	}

	(project.project_id, module_ids, device_ids)
}

#[tokio::test]
async fn test_list_device_ids_by_modules() {
	let (adapter, _temp) = create_test_adapter().await;
	let (_project_id, module_ids, device_ids) = build_hierarchy(&adapter, "u1").await;

	let mut found = adapter.list_device_ids_by_modules(&module_ids).await.expect("Should list");
	let mut expected = device_ids.clone();
	found.sort();
	expected.sort();
	assert_eq!(found, expected);

	// a single module yields only its own devices
	let partial = adapter
		.list_device_ids_by_modules(std::slice::from_ref(&module_ids[0]))
		.await
		.expect("Should list");
	assert_eq!(partial.len(), 2);

	// empty input short-circuits
	let none = adapter.list_device_ids_by_modules(&[]).await.expect("Should list");
	assert!(none.is_empty());
}

#[tokio::test]
async fn test_batch_deletes_scope() {
	let (adapter, _temp) = create_test_adapter().await;
	let (_p1, m1, d1) = build_hierarchy(&adapter, "u1").await;
	let (_p2, _m2, d2) = build_hierarchy(&adapter, "u2").await;

	let deleted = adapter.delete_readings_by_devices(&d1).await.expect("Should delete");
	assert_eq!(deleted, 4);

	let deleted = adapter.delete_devices_by_modules(&m1).await.expect("Should delete");
	assert_eq!(deleted, 4);

	// u2's hierarchy is untouched
	for device_id in &d2 {
		assert!(adapter.device_exists(device_id).await.unwrap());
		let readings = adapter
			.list_readings(device_id, &ReadingFilter::default())
			.await
			.expect("Should list");
		assert_eq!(readings.len(), 1);
	}
}

#[tokio::test]
async fn test_delete_by_user() {
	let (adapter, _temp) = create_test_adapter().await;
	build_hierarchy(&adapter, "u1").await;
	build_hierarchy(&adapter, "u2").await;

	assert_eq!(adapter.delete_readings_by_user("u1").await.unwrap(), 4);
	assert_eq!(adapter.delete_devices_by_user("u1").await.unwrap(), 4);
	assert_eq!(adapter.delete_modules_by_user("u1").await.unwrap(), 2);
	assert_eq!(adapter.delete_projects_by_user("u1").await.unwrap(), 1);

	assert_eq!(adapter.list_projects("u1").await.unwrap().len(), 0);
	assert_eq!(adapter.list_projects("u2").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_reading_date_filters() {
	let (adapter, _temp) = create_test_adapter().await;
	let (_project_id, _module_ids, device_ids) = build_hierarchy(&adapter, "u1").await;
	let device_id = &device_ids[0];

	let today = chrono::Utc::now().date_naive();
	let tomorrow = today.succ_opt().expect("date overflow");
	let yesterday = today.pred_opt().expect("date underflow");

	// rows were created "now", so today's filter matches and tomorrow's doesn't
	let filter = ReadingFilter { date: Some(today), ..Default::default() };
	assert_eq!(adapter.list_readings(device_id, &filter).await.unwrap().len(), 1);

	let filter = ReadingFilter { date: Some(tomorrow), ..Default::default() };
	assert_eq!(adapter.list_readings(device_id, &filter).await.unwrap().len(), 0);

	let filter = ReadingFilter {
		date: None,
		start_date: Some(yesterday),
		end_date: Some(tomorrow),
	};
	assert_eq!(adapter.list_readings(device_id, &filter).await.unwrap().len(), 1);

	let filter = ReadingFilter {
		date: None,
		start_date: Some(yesterday),
		end_date: Some(yesterday),
	};
	assert_eq!(adapter.list_readings(device_id, &filter).await.unwrap().len(), 0);
}

// vim: ts=4
