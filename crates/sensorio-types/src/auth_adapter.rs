//! Adapter that manages and stores authentication data: user accounts,
//! password hashes, and access tokens.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::{prelude::*, types::serialize_timestamp_iso};

pub const ACCESS_TOKEN_EXPIRY: i64 = 8 * 3600;

/// Access tokens are used to authenticate users (HS256 JWT claims).
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AccessToken<S> {
	/// Subject: the user id
	pub sub: S,
	/// Username, carried so the auth context needs no extra lookup
	pub uname: Option<S>,
	pub exp: Timestamp,
}

/// Context struct for an authenticated user
#[derive(Clone, Debug)]
pub struct AuthCtx {
	pub user_id: Box<str>,
	pub username: Box<str>,
}

/// A user account as exposed to callers. Never carries the password hash.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
	#[serde(rename = "id")]
	pub user_id: Box<str>,
	pub username: Box<str>,
	pub email: Box<str>,
	#[serde(serialize_with = "serialize_timestamp_iso")]
	pub created_at: Timestamp,
}

#[derive(Debug)]
pub struct AuthLogin {
	pub user_id: Box<str>,
	pub username: Box<str>,
	pub token: Box<str>,
}

/// Data needed to create a new user. `password` is the plaintext; hashing
/// happens inside the adapter, off the async runtime.
#[derive(Debug)]
pub struct CreateUserData<'a> {
	pub username: &'a str,
	pub email: &'a str,
	pub password: &'a str,
}

/// A Sensorio auth adapter
///
/// Every `AuthAdapter` implementation is required to implement this trait.
/// An `AuthAdapter` is responsible for storing and managing all sensitive
/// data used for authentication.
#[async_trait]
pub trait AuthAdapter: Debug + Send + Sync {
	/// Creates a user account. Fails with `Conflict` when the username or
	/// email is already taken.
	async fn create_user(&self, data: CreateUserData<'_>) -> SnResult<UserView>;

	/// Reads a user account by id
	async fn read_user(&self, user_id: &str) -> SnResult<UserView>;

	/// Idempotent existence check by username or email
	async fn user_exists(&self, username: &str, email: &str) -> SnResult<bool>;

	/// Checks credentials and issues an access token. `identifier` may be a
	/// username or an email; unknown identifier and wrong password both
	/// yield `Unauthenticated`.
	async fn check_password(&self, identifier: &str, password: &str) -> SnResult<AuthLogin>;

	/// Validates an access token and returns the user context
	async fn validate_access_token(&self, token: &str) -> SnResult<AuthCtx>;

	/// Deletes the user record. Descendant entities are the cascade
	/// engine's responsibility, not the adapter's.
	async fn delete_user(&self, user_id: &str) -> SnResult<()>;
}

// vim: ts=4
