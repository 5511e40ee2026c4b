//! SQLite-backed authentication adapter for Sensorio.
//!
//! Stores user accounts with bcrypt password hashes and issues HS256 access
//! tokens. The signing secret is generated once and persisted in the `vars`
//! table, so tokens survive restarts.

mod crypto;

use sqlx::{Row, SqlitePool, sqlite};
use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use sensorio::auth_adapter::{
	ACCESS_TOKEN_EXPIRY, AccessToken, AuthAdapter, AuthCtx, AuthLogin, CreateUserData,
	UserView,
};
use sensorio::prelude::*;
use sensorio::utils::random_id;
use sensorio::worker::WorkerPool;

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

#[derive(Debug)]
pub struct AuthAdapterSqlite {
	db: SqlitePool,
	worker: Arc<WorkerPool>,
	jwt_secret: Box<str>,
}

impl AuthAdapterSqlite {
	pub async fn new(worker: Arc<WorkerPool>, path: impl AsRef<Path>) -> SnResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		init_db(&db)
			.await
			.inspect_err(|err| error!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		let jwt_secret = ensure_jwt_secret(&db).await?;

		Ok(Self { db, worker, jwt_secret })
	}
}

#[async_trait]
impl AuthAdapter for AuthAdapterSqlite {
	async fn create_user(&self, data: CreateUserData<'_>) -> SnResult<UserView> {
		if self.user_exists(data.username, data.email).await? {
			return Err(Error::Conflict);
		}

		let password_hash =
			crypto::generate_password_hash(&self.worker, data.password.into()).await?;
		let user_id = random_id();

		let res = sqlx::query(
			"INSERT INTO users (user_id, username, email, password) VALUES (?1, ?2, ?3, ?4)",
		)
		.bind(user_id.as_ref())
		.bind(data.username)
		.bind(data.email)
		.bind(password_hash.as_ref())
		.execute(&self.db)
		.await;

		match res {
			// Unique index races with the pre-check; both report Conflict
			Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
				Err(Error::Conflict)
			}
			Err(err) => {
				inspect(&err);
				Err(Error::DbError)
			}
			Ok(_) => self.read_user(&user_id).await,
		}
	}

	async fn read_user(&self, user_id: &str) -> SnResult<UserView> {
		let res = sqlx::query(
			"SELECT user_id, username, email, created_at FROM users WHERE user_id=?1",
		)
		.bind(user_id)
		.fetch_one(&self.db)
		.await;

		match res {
			Err(sqlx::Error::RowNotFound) => Err(Error::UserNotFound),
			Err(err) => {
				inspect(&err);
				Err(Error::DbError)
			}
			Ok(row) => Ok(UserView {
				user_id: row.try_get("user_id").or(Err(Error::DbError))?,
				username: row.try_get("username").or(Err(Error::DbError))?,
				email: row.try_get("email").or(Err(Error::DbError))?,
				created_at: row
					.try_get::<i64, _>("created_at")
					.map(Timestamp)
					.or(Err(Error::DbError))?,
			}),
		}
	}

	async fn user_exists(&self, username: &str, email: &str) -> SnResult<bool> {
		let row = sqlx::query("SELECT 1 FROM users WHERE username=?1 OR email=?2")
			.bind(username)
			.bind(email)
			.fetch_optional(&self.db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		Ok(row.is_some())
	}

	async fn check_password(&self, identifier: &str, password: &str) -> SnResult<AuthLogin> {
		let res = sqlx::query(
			"SELECT user_id, username, password FROM users WHERE username=?1 OR email=?1",
		)
		.bind(identifier)
		.fetch_one(&self.db)
		.await;

		let row = match res {
			// Unknown identifier and bad password must be indistinguishable
			Err(sqlx::Error::RowNotFound) => return Err(Error::Unauthenticated),
			Err(err) => {
				inspect(&err);
				return Err(Error::DbError);
			}
			Ok(row) => row,
		};

		let user_id: Box<str> = row.try_get("user_id").or(Err(Error::DbError))?;
		let username: Box<str> = row.try_get("username").or(Err(Error::DbError))?;
		let password_hash: Box<str> = row.try_get("password").or(Err(Error::DbError))?;

		crypto::check_password(&self.worker, password.into(), password_hash).await?;

		let access_token = AccessToken {
			sub: user_id.clone(),
			uname: Some(username.clone()),
			exp: Timestamp::from_now(ACCESS_TOKEN_EXPIRY),
		};
		let token = crypto::generate_access_token(
			&self.worker,
			access_token,
			self.jwt_secret.clone(),
		)
		.await?;

		Ok(AuthLogin { user_id, username, token })
	}

	async fn validate_access_token(&self, token: &str) -> SnResult<AuthCtx> {
		crypto::validate_access_token(&self.jwt_secret, token)
	}

	async fn delete_user(&self, user_id: &str) -> SnResult<()> {
		let res = sqlx::query("DELETE FROM users WHERE user_id=?1")
			.bind(user_id)
			.execute(&self.db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		if res.rows_affected() == 0 {
			return Err(Error::UserNotFound);
		}
		Ok(())
	}
}

/// Get or generate the JWT secret for HS256 signing
async fn ensure_jwt_secret(db: &SqlitePool) -> SnResult<Box<str>> {
	let res = sqlx::query("SELECT value FROM vars WHERE key=?1")
		.bind("jwt_secret")
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

	if let Some(row) = res {
		return row.try_get("value").inspect_err(inspect).or(Err(Error::DbError));
	}

	// Generate new secret (32 random bytes, base64 encoded)
	use base64::Engine;
	use rand::RngCore;
	let mut secret_bytes = [0u8; 32];
	rand::rng().fill_bytes(&mut secret_bytes);
	let secret = base64::engine::general_purpose::STANDARD.encode(secret_bytes);

	sqlx::query("INSERT OR REPLACE INTO vars (key, value) VALUES (?1, ?2)")
		.bind("jwt_secret")
		.bind(&secret)
		.execute(db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

	info!("Generated new JWT secret");
	Ok(secret.into_boxed_str())
}

async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS vars (
		key text NOT NULL,
		value text,
		PRIMARY KEY(key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Users //
	///////////
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS users (
		user_id text NOT NULL,
		username text NOT NULL,
		email text NOT NULL,
		password text NOT NULL,
		created_at integer DEFAULT (unixepoch()),
		updated_at integer DEFAULT (unixepoch()),
		PRIMARY KEY(user_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_users_username ON users(username)")
		.execute(&mut *tx)
		.await?;
	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email)")
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
