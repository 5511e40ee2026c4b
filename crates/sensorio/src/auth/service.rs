use sensorio_types::auth_adapter::{AuthCtx, AuthLogin, CreateUserData, UserView};

use crate::prelude::*;
use crate::{cascade, validate};

pub async fn register(
	app: &App,
	username: &str,
	email: &str,
	password: &str,
) -> SnResult<UserView> {
	validate::username(username)?;
	validate::email(email)?;
	validate::password(password)?;

	app.auth_adapter.create_user(CreateUserData { username, email, password }).await
}

/// `identifier` may be a username or an email address. Unknown identifier
/// and wrong password are not distinguished.
pub async fn login(app: &App, identifier: &str, password: &str) -> SnResult<AuthLogin> {
	app.auth_adapter.check_password(identifier, password).await
}

/// Deletes the account and cascades over everything it owns.
pub async fn delete_account(app: &App, auth: &AuthCtx) -> SnResult<()> {
	cascade::delete_user(app, &auth.user_id).await
}

// vim: ts=4
