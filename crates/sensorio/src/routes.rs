use axum::{
	Router, middleware,
	routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::{auth, device, module, project, reading};
use sensorio_core::app::App;
use sensorio_core::route_auth::require_auth;

pub fn init(state: App) -> Router {
	let public_router = Router::new()
		.route("/api/auth/register", post(auth::handler::post_register))
		.route("/api/auth/login", post(auth::handler::post_login));

	let protected_router = Router::new()
		.route("/api/auth/account", delete(auth::handler::delete_account))
		.route(
			"/api/projects",
			post(project::handler::create_project).get(project::handler::list_projects),
		)
		.route(
			"/api/projects/{project_id}",
			get(project::handler::get_project)
				.patch(project::handler::patch_project)
				.delete(project::handler::delete_project),
		)
		.route(
			"/api/projects/{project_id}/modules",
			post(module::handler::create_module).get(module::handler::list_modules),
		)
		.route(
			"/api/projects/{project_id}/modules/{module_id}",
			delete(module::handler::delete_module),
		)
		.route(
			"/api/modules/{module_id}",
			get(module::handler::get_module).patch(module::handler::patch_module),
		)
		.route(
			"/api/modules/{module_id}/devices",
			post(device::handler::create_device).get(device::handler::list_devices),
		)
		.route(
			"/api/modules/{module_id}/devices/{device_id}",
			get(device::handler::get_device).delete(device::handler::delete_device),
		)
		.route(
			"/api/devices/{device_id}/readings",
			post(reading::handler::create_reading).get(reading::handler::list_readings),
		)
		.layer(middleware::from_fn_with_state(state.clone(), require_auth));

	Router::new()
		.merge(public_router)
		.merge(protected_router)
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

// vim: ts=4
