use std::{env, path::PathBuf, sync::Arc};

use sensorio::AppBuilder;
use sensorio_auth_adapter_sqlite::AuthAdapterSqlite;
use sensorio_meta_adapter_sqlite::MetaAdapterSqlite;
use sensorio_types::worker::WorkerPool;

struct Config {
	db_dir: PathBuf,
	listen: String,
	worker_threads: usize,
}

fn load_config() -> Config {
	Config {
		db_dir: PathBuf::from(env::var("DB_DIR").unwrap_or_else(|_| "./data".to_string())),
		listen: env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:8001".to_string()),
		worker_threads: env::var("WORKER_THREADS")
			.ok()
			.and_then(|v| v.parse().ok())
			.unwrap_or(2),
	}
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
	let config = load_config();
	tokio::fs::create_dir_all(&config.db_dir).await?;

	let worker = Arc::new(WorkerPool::new(config.worker_threads));

	let auth_adapter =
		Arc::new(AuthAdapterSqlite::new(worker.clone(), config.db_dir.join("auth.db")).await?);
	let meta_adapter = Arc::new(MetaAdapterSqlite::new(config.db_dir.join("meta.db")).await?);

	AppBuilder::new()
		.listen(config.listen)
		.worker(worker)
		.auth_adapter(auth_adapter)
		.meta_adapter(meta_adapter)
		.run()
		.await?;

	Ok(())
}

#[tokio::main]
async fn main() {
	if let Err(err) = run().await {
		eprintln!("sensorio-server: {err}");
		std::process::exit(1);
	}
}

// vim: ts=4
