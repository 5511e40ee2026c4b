//! Worker pool. Runs synchronous, CPU-bound jobs (password hashing, token
//! signing) on dedicated threads, keeping them off the async runtime.

use flume::{Receiver, Sender};
use futures::channel::oneshot;
use std::{future::Future, thread};

use crate::prelude::*;

type Job = Box<dyn FnOnce() + Send>;

#[derive(Debug)]
pub struct WorkerPool {
	tx: Sender<Job>,
}

impl WorkerPool {
	pub fn new(threads: usize) -> Self {
		let (tx, rx) = flume::unbounded::<Job>();

		for _ in 0..threads.max(1) {
			let rx: Receiver<Job> = rx.clone();
			thread::spawn(move || worker_loop(&rx));
		}

		Self { tx }
	}

	/// Submit a closure → returns a Future for the result
	pub fn run<F, T>(&self, f: F) -> impl Future<Output = SnResult<T>>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		let (res_tx, res_rx) = oneshot::channel();

		let job: Job = Box::new(move || {
			let _ignore = res_tx.send(f());
		});

		if self.tx.send(job).is_err() {
			error!("Failed to send job to worker queue");
		}

		async move {
			res_rx.await.map_err(|_| {
				error!("Worker dropped result channel (task may have panicked)");
				Error::Internal("worker task failed".into())
			})
		}
	}

	/// Like `run`, but flattens `SnResult<SnResult<T>>` into `SnResult<T>`.
	/// Use when the closure itself returns `SnResult<T>`.
	pub fn try_run<F, T>(&self, f: F) -> impl Future<Output = SnResult<T>>
	where
		F: FnOnce() -> SnResult<T> + Send + 'static,
		T: Send + 'static,
	{
		let fut = self.run(f);
		async move { fut.await? }
	}
}

fn worker_loop(rx: &Receiver<Job>) {
	while let Ok(job) = rx.recv() {
		if let Err(e) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(job)) {
			error!("Worker thread caught panic: {:?}", e);
		}
	}
}


// vim: ts=4
