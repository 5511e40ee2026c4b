use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::auth::service;
use crate::prelude::*;
use sensorio_types::auth_adapter::UserView;

// Register //
//**********//
#[derive(Debug, Deserialize)]
pub struct RegisterReq {
	pub username: String,
	pub email: String,
	pub password: String,
}

pub async fn post_register(
	State(app): State<App>,
	Json(req): Json<RegisterReq>,
) -> SnResult<(StatusCode, Json<UserView>)> {
	let user = service::register(&app, &req.username, &req.email, &req.password).await?;
	info!("Registered user {} ({})", user.username, user.user_id);
	Ok((StatusCode::CREATED, Json(user)))
}

// Login //
//*******//
#[derive(Debug, Deserialize)]
pub struct LoginReq {
	/// Username or email
	pub identifier: String,
	pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRes {
	pub user_id: String,
	pub username: String,
	pub token: String,
	pub token_type: String,
}

pub async fn post_login(
	State(app): State<App>,
	Json(req): Json<LoginReq>,
) -> SnResult<(StatusCode, Json<LoginRes>)> {
	let login = service::login(&app, &req.identifier, &req.password).await?;

	Ok((
		StatusCode::OK,
		Json(LoginRes {
			user_id: login.user_id.to_string(),
			username: login.username.to_string(),
			token: login.token.to_string(),
			token_type: "bearer".to_string(),
		}),
	))
}

// Account deletion //
//******************//
pub async fn delete_account(
	State(app): State<App>,
	Auth(auth): Auth,
) -> SnResult<StatusCode> {
	service::delete_account(&app, &auth).await?;
	Ok(StatusCode::NO_CONTENT)
}

// vim: ts=4
