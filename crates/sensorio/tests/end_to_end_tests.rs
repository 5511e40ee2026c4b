//! End-to-end service flow plus boundary validation scenarios.

mod common;

use common::{celsius, register, test_app};
use sensorio::{auth, device, module, project, reading};
use sensorio_types::auth_adapter::AuthAdapter;
use sensorio_types::error::Error;
use sensorio_types::meta_adapter::ReadingFilter;
use sensorio_types::schema::{DataType, DeviceType, MeasurementType, MeasurementUnit};

#[tokio::test]
async fn test_full_lifecycle() {
	let (app, _temp) = test_app().await;

	// register + login
	let user = auth::service::register(&app, "alice", "alice@example.com", "password1")
		.await
		.expect("register");
	let login = auth::service::login(&app, "alice", "password1").await.expect("login");
	assert_eq!(login.user_id, user.user_id);

	let ctx = app
		.auth_adapter
		.validate_access_token(&login.token)
		.await
		.expect("token should validate");
	assert_eq!(ctx.user_id, user.user_id);

	// build the hierarchy
	let p1 = project::service::create(&app, &ctx, "P1", None).await.expect("project");
	let m1 = module::service::create(&app, &ctx, &p1.project_id, "M1", None)
		.await
		.expect("module");
	let d1 = device::service::create(
		&app,
		&ctx,
		&m1.module_id,
		"D1",
		None,
		DeviceType::Sensor,
		&[celsius()],
	)
	.await
	.expect("device");

	reading::service::create(&app, &ctx, &d1.device_id, celsius(), &serde_json::json!(21.5))
		.await
		.expect("reading");

	// exactly one reading with the right value
	let readings =
		reading::service::list(&app, &ctx, &d1.device_id, &ReadingFilter::default())
			.await
			.expect("list readings");
	assert_eq!(readings.len(), 1);
	assert_eq!(readings[0].value, serde_json::json!(21.5));
	assert_eq!(readings[0].device_id, d1.device_id);

	// parent lists are in sync along the way
	let p = project::service::get(&app, &ctx, &p1.project_id).await.expect("get project");
	assert_eq!(p.modules.as_ref(), std::slice::from_ref(&m1.module_id));
	let m = module::service::get(&app, &ctx, &m1.module_id).await.expect("get module");
	assert_eq!(m.devices.as_ref(), std::slice::from_ref(&d1.device_id));

	// cascade delete, then the module is gone
	project::service::delete(&app, &ctx, &p1.project_id).await.expect("delete project");
	let res = module::service::get(&app, &ctx, &m1.module_id).await;
	assert!(matches!(res, Err(Error::ModuleNotFound)));
}

#[tokio::test]
async fn test_registration_conflicts() {
	let (app, _temp) = test_app().await;

	auth::service::register(&app, "alice", "alice@example.com", "pw111111")
		.await
		.expect("register");

	let res = auth::service::register(&app, "alice", "fresh@example.com", "pw111111").await;
	assert!(matches!(res, Err(Error::Conflict)));

	let res = auth::service::register(&app, "alice2", "alice@example.com", "pw111111").await;
	assert!(matches!(res, Err(Error::Conflict)));

	let res = auth::service::register(&app, "alice2", "not-an-email", "pw111111").await;
	assert!(matches!(res, Err(Error::ValidationError(_))));
}

#[tokio::test]
async fn test_device_data_type_validation() {
	let (app, _temp) = test_app().await;
	let alice = register(&app, "alice").await;

	let p = project::service::create(&app, &alice, "P", None).await.expect("project");
	let m = module::service::create(&app, &alice, &p.project_id, "M", None)
		.await
		.expect("module");

	// temperature measured in pascal: rejected before anything is persisted
	let bad = DataType {
		measurement_type: MeasurementType::Temperature,
		measurement_unit: MeasurementUnit::Pascal,
	};
	let res = device::service::create(
		&app,
		&alice,
		&m.module_id,
		"bad",
		None,
		DeviceType::Sensor,
		&[celsius(), bad],
	)
	.await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	let devices = device::service::list(&app, &alice, &m.module_id).await.expect("list");
	assert!(devices.is_empty());

	// the valid pair alone goes through
	let res = device::service::create(
		&app,
		&alice,
		&m.module_id,
		"good",
		None,
		DeviceType::Sensor,
		&[celsius()],
	)
	.await;
	assert!(res.is_ok());
}

#[tokio::test]
async fn test_reading_data_type_membership() {
	let (app, _temp) = test_app().await;
	let alice = register(&app, "alice").await;

	let p = project::service::create(&app, &alice, "P", None).await.expect("project");
	let m = module::service::create(&app, &alice, &p.project_id, "M", None)
		.await
		.expect("module");
	let d = device::service::create(
		&app,
		&alice,
		&m.module_id,
		"D",
		None,
		DeviceType::Sensor,
		&[celsius()],
	)
	.await
	.expect("device");

	// declared type works
	let res = reading::service::create(
		&app,
		&alice,
		&d.device_id,
		celsius(),
		&serde_json::json!(20.1),
	)
	.await;
	assert!(res.is_ok());

	// a valid pair the device did not declare: validation error, not DeviceNotFound
	let undeclared = DataType {
		measurement_type: MeasurementType::Pressure,
		measurement_unit: MeasurementUnit::Bar,
	};
	let res = reading::service::create(
		&app,
		&alice,
		&d.device_id,
		undeclared,
		&serde_json::json!(1.0),
	)
	.await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	// unknown device: DeviceNotFound, not a validation error
	let res = reading::service::create(
		&app,
		&alice,
		"missing-device",
		celsius(),
		&serde_json::json!(1.0),
	)
	.await;
	assert!(matches!(res, Err(Error::DeviceNotFound)));
}

#[tokio::test]
async fn test_create_validates_bounds() {
	let (app, _temp) = test_app().await;
	let alice = register(&app, "alice").await;

	let res = project::service::create(&app, &alice, &"x".repeat(51), None).await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	let res = project::service::create(&app, &alice, "", None).await;
	assert!(matches!(res, Err(Error::ValidationError(_))));

	let p = project::service::create(&app, &alice, "P", None).await.expect("project");
	let res = module::service::create(
		&app,
		&alice,
		&p.project_id,
		"M",
		Some(&"x".repeat(201)),
	)
	.await;
	assert!(matches!(res, Err(Error::ValidationError(_))));
}

// vim: ts=4
