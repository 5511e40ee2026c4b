//! Auth adapter tests: registration, login, token validation, deletion.

use std::sync::Arc;

use sensorio_auth_adapter_sqlite::AuthAdapterSqlite;
use tempfile::TempDir;

use sensorio::auth_adapter::{AuthAdapter, CreateUserData};
use sensorio::error::Error;
use sensorio::worker::WorkerPool;

async fn create_test_adapter() -> (AuthAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let worker_pool = Arc::new(WorkerPool::new(1));

	let adapter = AuthAdapterSqlite::new(worker_pool, temp_dir.path().join("auth.db"))
		.await
		.expect("Failed to create adapter");

	(adapter, temp_dir)
}

fn alice() -> CreateUserData<'static> {
	CreateUserData { username: "alice", email: "alice@example.com", password: "hunter22" }
}

#[tokio::test]
async fn test_create_and_read_user() {
	let (adapter, _temp) = create_test_adapter().await;

	let user = adapter.create_user(alice()).await.expect("Should create user");
	assert_eq!(user.username.as_ref(), "alice");
	assert_eq!(user.email.as_ref(), "alice@example.com");

	let read_back = adapter.read_user(&user.user_id).await.expect("Should read user");
	assert_eq!(read_back.username, user.username);
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.create_user(alice()).await.expect("Should create user");

	let res = adapter
		.create_user(CreateUserData {
			username: "alice",
			email: "other@example.com",
			password: "pw",
		})
		.await;
	assert!(matches!(res, Err(Error::Conflict)));

	let res = adapter
		.create_user(CreateUserData {
			username: "alice2",
			email: "alice@example.com",
			password: "pw",
		})
		.await;
	assert!(matches!(res, Err(Error::Conflict)));
}

#[tokio::test]
async fn test_user_exists() {
	let (adapter, _temp) = create_test_adapter().await;

	assert!(!adapter.user_exists("alice", "alice@example.com").await.unwrap());
	adapter.create_user(alice()).await.expect("Should create user");
	assert!(adapter.user_exists("alice", "nobody@example.com").await.unwrap());
	assert!(adapter.user_exists("nobody", "alice@example.com").await.unwrap());
}

#[tokio::test]
async fn test_login_with_username_or_email() {
	let (adapter, _temp) = create_test_adapter().await;
	let user = adapter.create_user(alice()).await.expect("Should create user");

	let login = adapter.check_password("alice", "hunter22").await.expect("Should login");
	assert_eq!(login.user_id, user.user_id);
	assert!(!login.token.is_empty());

	let login = adapter
		.check_password("alice@example.com", "hunter22")
		.await
		.expect("Should login by email");
	assert_eq!(login.user_id, user.user_id);
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
	let (adapter, _temp) = create_test_adapter().await;
	adapter.create_user(alice()).await.expect("Should create user");

	// wrong password and unknown identifier are indistinguishable
	let res = adapter.check_password("alice", "wrong").await;
	assert!(matches!(res, Err(Error::Unauthenticated)));

	let res = adapter.check_password("mallory", "hunter22").await;
	assert!(matches!(res, Err(Error::Unauthenticated)));
}

#[tokio::test]
async fn test_token_validation() {
	let (adapter, _temp) = create_test_adapter().await;
	let user = adapter.create_user(alice()).await.expect("Should create user");

	let login = adapter.check_password("alice", "hunter22").await.expect("Should login");
	let ctx = adapter.validate_access_token(&login.token).await.expect("Should validate");
	assert_eq!(ctx.user_id, user.user_id);
	assert_eq!(ctx.username.as_ref(), "alice");

	let res = adapter.validate_access_token("garbage.token.here").await;
	assert!(matches!(res, Err(Error::Unauthenticated)));
}

#[tokio::test]
async fn test_delete_user() {
	let (adapter, _temp) = create_test_adapter().await;
	let user = adapter.create_user(alice()).await.expect("Should create user");

	adapter.delete_user(&user.user_id).await.expect("Should delete");

	let res = adapter.read_user(&user.user_id).await;
	assert!(matches!(res, Err(Error::UserNotFound)));

	let res = adapter.delete_user(&user.user_id).await;
	assert!(matches!(res, Err(Error::UserNotFound)));

	// the username is free again
	adapter.create_user(alice()).await.expect("Should re-register");
}

// vim: ts=4
