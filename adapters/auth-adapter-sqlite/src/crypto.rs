//! Password hashing and access-token signing. All bcrypt work runs on the
//! worker pool; it must never block the async runtime.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use sensorio::auth_adapter::{AccessToken, AuthCtx};
use sensorio::prelude::*;
use sensorio::worker::WorkerPool;

const BCRYPT_COST: u32 = 10;

fn generate_password_hash_sync(password: Box<str>) -> SnResult<Box<str>> {
	let hash = bcrypt::hash(password.as_ref(), BCRYPT_COST)
		.map_err(|_| Error::Internal("password hashing failed".into()))?;

	Ok(hash.into())
}

pub(crate) async fn generate_password_hash(
	worker: &WorkerPool,
	password: Box<str>,
) -> SnResult<Box<str>> {
	worker.try_run(move || generate_password_hash_sync(password)).await
}

fn check_password_sync(password: Box<str>, password_hash: Box<str>) -> SnResult<()> {
	let ok = bcrypt::verify(password.as_ref(), &password_hash)
		.map_err(|_| Error::Unauthenticated)?;
	if ok { Ok(()) } else { Err(Error::Unauthenticated) }
}

pub(crate) async fn check_password(
	worker: &WorkerPool,
	password: Box<str>,
	password_hash: Box<str>,
) -> SnResult<()> {
	worker.try_run(move || check_password_sync(password, password_hash)).await
}

fn generate_access_token_sync(
	access_token: AccessToken<Box<str>>,
	jwt_secret: &str,
) -> SnResult<Box<str>> {
	encode(
		&Header::new(Algorithm::HS256),
		&access_token,
		&EncodingKey::from_secret(jwt_secret.as_bytes()),
	)
	.map(String::into_boxed_str)
	.map_err(|_| Error::Internal("token signing failed".into()))
}

pub(crate) async fn generate_access_token(
	worker: &WorkerPool,
	access_token: AccessToken<Box<str>>,
	jwt_secret: Box<str>,
) -> SnResult<Box<str>> {
	worker.try_run(move || generate_access_token_sync(access_token, &jwt_secret)).await
}

/// Validate an access token (JWT) and return the authenticated user context
pub(crate) fn validate_access_token(jwt_secret: &str, token: &str) -> SnResult<AuthCtx> {
	let token_data = decode::<AccessToken<Box<str>>>(
		token,
		&DecodingKey::from_secret(jwt_secret.as_bytes()),
		&Validation::new(Algorithm::HS256),
	)
	.map_err(|_| Error::Unauthenticated)?;

	Ok(AuthCtx {
		user_id: token_data.claims.sub,
		username: token_data.claims.uname.unwrap_or_default(),
	})
}

// vim: ts=4
