//! Cascade tests: deletion propagates bottom-up and leaves no entity whose
//! parent reference dangles.

mod common;

use common::{celsius, register, test_app};
use sensorio::{auth, device, module, project, reading};
use sensorio_types::auth_adapter::AuthCtx;
use sensorio_types::error::Error;
use sensorio_types::meta_adapter::{MetaAdapter, ReadingFilter};
use sensorio_types::schema::DeviceType;

struct Hierarchy {
	project_id: Box<str>,
	module_id: Box<str>,
	device_id: Box<str>,
}

async fn build_hierarchy(app: &sensorio::App, auth: &AuthCtx) -> Hierarchy {
	let p = project::service::create(app, auth, "P1", None).await.expect("create project");
	let m = module::service::create(app, auth, &p.project_id, "M1", None)
		.await
		.expect("create module");
	let d = device::service::create(
		app,
		auth,
		&m.module_id,
		"D1",
		None,
		DeviceType::Sensor,
		&[celsius()],
	)
	.await
	.expect("create device");
	reading::service::create(app, auth, &d.device_id, celsius(), &serde_json::json!(21.5))
		.await
		.expect("create reading");

	Hierarchy { project_id: p.project_id, module_id: m.module_id, device_id: d.device_id }
}

#[tokio::test]
async fn test_delete_device_removes_readings_and_back_reference() {
	let (app, _temp) = test_app().await;
	let alice = register(&app, "alice").await;
	let h = build_hierarchy(&app, &alice).await;

	device::service::delete(&app, &alice, &h.module_id, &h.device_id)
		.await
		.expect("delete device");

	let res = device::service::get(&app, &alice, &h.module_id, &h.device_id).await;
	assert!(matches!(res, Err(Error::DeviceNotFound)));

	// no readings survive their device
	let readings = app
		.meta_adapter
		.list_readings(&h.device_id, &ReadingFilter::default())
		.await
		.expect("list readings");
	assert!(readings.is_empty());

	// the module's device list no longer contains the id
	let m = module::service::get(&app, &alice, &h.module_id).await.expect("get module");
	assert!(!m.devices.iter().any(|id| *id == h.device_id));
}

#[tokio::test]
async fn test_delete_module_removes_devices_and_back_reference() {
	let (app, _temp) = test_app().await;
	let alice = register(&app, "alice").await;
	let h = build_hierarchy(&app, &alice).await;

	module::service::delete(&app, &alice, &h.project_id, &h.module_id)
		.await
		.expect("delete module");

	let res = module::service::get(&app, &alice, &h.module_id).await;
	assert!(matches!(res, Err(Error::ModuleNotFound)));

	assert!(!app.meta_adapter.device_exists(&h.device_id).await.expect("exists"));

	let readings = app
		.meta_adapter
		.list_readings(&h.device_id, &ReadingFilter::default())
		.await
		.expect("list readings");
	assert!(readings.is_empty());

	let p = project::service::get(&app, &alice, &h.project_id).await.expect("get project");
	assert!(!p.modules.iter().any(|id| *id == h.module_id));
}

#[tokio::test]
async fn test_delete_project_cascade_completeness() {
	let (app, _temp) = test_app().await;
	let alice = register(&app, "alice").await;
	let h = build_hierarchy(&app, &alice).await;

	// a second module with its own device, to make the batch paths do real work
	let m2 = module::service::create(&app, &alice, &h.project_id, "M2", None)
		.await
		.expect("create module");
	let d2 = device::service::create(
		&app,
		&alice,
		&m2.module_id,
		"D2",
		None,
		DeviceType::Actuator,
		&[],
	)
	.await
	.expect("create device");

	project::service::delete(&app, &alice, &h.project_id).await.expect("delete project");

	let res = project::service::get(&app, &alice, &h.project_id).await;
	assert!(matches!(res, Err(Error::ProjectNotFound)));

	for module_id in [&h.module_id, &m2.module_id] {
		let res = module::service::get(&app, &alice, module_id).await;
		assert!(matches!(res, Err(Error::ModuleNotFound)));
		assert!(!app.meta_adapter.module_exists(module_id).await.expect("exists"));
	}
	for device_id in [&h.device_id, &d2.device_id] {
		assert!(!app.meta_adapter.device_exists(device_id).await.expect("exists"));
		let readings = app
			.meta_adapter
			.list_readings(device_id, &ReadingFilter::default())
			.await
			.expect("list readings");
		assert!(readings.is_empty());
	}
}

#[tokio::test]
async fn test_delete_empty_project() {
	let (app, _temp) = test_app().await;
	let alice = register(&app, "alice").await;

	let p = project::service::create(&app, &alice, "empty", None).await.expect("create");
	project::service::delete(&app, &alice, &p.project_id).await.expect("delete");

	let res = project::service::get(&app, &alice, &p.project_id).await;
	assert!(matches!(res, Err(Error::ProjectNotFound)));
}

#[tokio::test]
async fn test_delete_account_cascades_everything() {
	let (app, _temp) = test_app().await;
	let alice = register(&app, "alice").await;
	let bob = register(&app, "bob").await;
	let h_alice = build_hierarchy(&app, &alice).await;
	let h_bob = build_hierarchy(&app, &bob).await;

	auth::service::delete_account(&app, &alice).await.expect("delete account");

	assert!(app.meta_adapter.list_projects(&alice.user_id).await.expect("list").is_empty());
	assert!(!app.meta_adapter.module_exists(&h_alice.module_id).await.expect("exists"));
	assert!(!app.meta_adapter.device_exists(&h_alice.device_id).await.expect("exists"));

	let res = auth::service::login(&app, "alice", "password1").await;
	assert!(matches!(res, Err(Error::Unauthenticated)));

	// bob's world is intact
	let p = project::service::get(&app, &bob, &h_bob.project_id).await.expect("get");
	assert_eq!(p.modules.len(), 1);
	assert!(auth::service::login(&app, "bob", "password1").await.is_ok());
}

// vim: ts=4
