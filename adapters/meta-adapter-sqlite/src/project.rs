//! Project storage

use sqlx::{Row, SqlitePool};

use crate::module;
use crate::utils::*;
use sensorio::meta_adapter::{CreateProjectData, Project, UpdateProjectData};
use sensorio::prelude::*;
use sensorio::utils::random_id;

pub(crate) async fn create(db: &SqlitePool, data: CreateProjectData<'_>) -> SnResult<Project> {
	let project_id = random_id();

	sqlx::query(
		"INSERT INTO projects (project_id, user_id, name, description) VALUES (?1, ?2, ?3, ?4)",
	)
	.bind(project_id.as_ref())
	.bind(data.user_id)
	.bind(data.name)
	.bind(data.description)
	.execute(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	read(db, data.user_id, &project_id).await
}

pub(crate) async fn read(
	db: &SqlitePool,
	user_id: &str,
	project_id: &str,
) -> SnResult<Project> {
	let row = sqlx::query(
		"SELECT project_id, user_id, name, description, created_at, updated_at
		FROM projects WHERE user_id=?1 AND project_id=?2",
	)
	.bind(user_id)
	.bind(project_id)
	.fetch_one(db)
	.await;

	let mut project = map_res(row, Error::ProjectNotFound, |row| {
		Ok(Project {
			project_id: row.try_get("project_id")?,
			user_id: row.try_get("user_id")?,
			name: row.try_get("name")?,
			description: row.try_get("description")?,
			modules: Box::from([]),
			created_at: row.try_get::<i64, _>("created_at").map(Timestamp)?,
			updated_at: row.try_get::<i64, _>("updated_at").map(Timestamp)?,
		})
	})?;

	project.modules = module::list_ids(db, project_id).await?.into_boxed_slice();
	Ok(project)
}

pub(crate) async fn list(db: &SqlitePool, user_id: &str) -> SnResult<Vec<Project>> {
	let rows = sqlx::query(
		"SELECT project_id, user_id, name, description, created_at, updated_at
		FROM projects WHERE user_id=?1",
	)
	.bind(user_id)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	let mut projects = Vec::with_capacity(rows.len());
	for row in rows {
		let project_id: Box<str> = row.try_get("project_id").or(Err(Error::DbError))?;
		let modules = module::list_ids(db, &project_id).await?.into_boxed_slice();
		projects.push(Project {
			project_id,
			user_id: row.try_get("user_id").or(Err(Error::DbError))?,
			name: row.try_get("name").or(Err(Error::DbError))?,
			description: row.try_get("description").or(Err(Error::DbError))?,
			modules,
			created_at: row
				.try_get::<i64, _>("created_at")
				.map(Timestamp)
				.or(Err(Error::DbError))?,
			updated_at: row
				.try_get::<i64, _>("updated_at")
				.map(Timestamp)
				.or(Err(Error::DbError))?,
		});
	}
	Ok(projects)
}

pub(crate) async fn update(
	db: &SqlitePool,
	user_id: &str,
	project_id: &str,
	data: &UpdateProjectData,
) -> SnResult<()> {
	let mut query = sqlx::QueryBuilder::new("UPDATE projects SET ");
	let mut has_updates = false;

	has_updates = push_patch!(query, has_updates, "name", &data.name);
	has_updates = push_patch!(query, has_updates, "description", &data.description);

	if !has_updates {
		return Ok(());
	}

	query.push(", updated_at=unixepoch()");
	query.push(" WHERE user_id=").push_bind(user_id);
	query.push(" AND project_id=").push_bind(project_id);

	let res = query
		.build()
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::ProjectNotFound);
	}
	Ok(())
}

pub(crate) async fn delete(db: &SqlitePool, project_id: &str) -> SnResult<()> {
	let res = sqlx::query("DELETE FROM projects WHERE project_id=?1")
		.bind(project_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::ProjectNotFound);
	}
	Ok(())
}

pub(crate) async fn exists(db: &SqlitePool, project_id: &str) -> SnResult<bool> {
	let row = sqlx::query("SELECT 1 FROM projects WHERE project_id=?1")
		.bind(project_id)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(row.is_some())
}

pub(crate) async fn delete_by_user(db: &SqlitePool, user_id: &str) -> SnResult<u64> {
	let res = sqlx::query("DELETE FROM projects WHERE user_id=?1")
		.bind(user_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected())
}

// vim: ts=4
