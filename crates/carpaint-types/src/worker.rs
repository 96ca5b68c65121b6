//! Worker pool for CPU-bound work (password hashing, token signing) kept off the async executor.
//!
//! Two lanes: `Priority::High` jobs are served by every thread and come first,
//! `Priority::Normal` jobs only by the general threads. Login checks and token
//! work use the high lane, account writes (password hashing) the normal one.

use flume::{Receiver, Sender};
use futures::channel::oneshot;
use std::{future::Future, sync::Arc, thread};

use crate::prelude::*;

type Job = Box<dyn FnOnce() + Send>;
type JobQueue = Arc<Receiver<Job>>;

#[derive(Clone, Copy, Debug)]
pub enum Priority {
	High,
	Normal,
}

#[derive(Debug)]
pub struct WorkerPool {
	high: Sender<Job>,
	normal: Sender<Job>,
}

impl WorkerPool {
	/// `n_high` threads serve only high priority jobs, `n_normal` threads serve both lanes.
	pub fn new(n_high: usize, n_normal: usize) -> Self {
		let (high, rx_high) = flume::unbounded();
		let (normal, rx_normal) = flume::unbounded();

		let rx_high = Arc::new(rx_high);
		let rx_normal = Arc::new(rx_normal);

		for _ in 0..n_high {
			let rx_high = Arc::clone(&rx_high);
			thread::spawn(move || worker_loop(&[rx_high]));
		}

		for _ in 0..n_normal {
			let rx_high = Arc::clone(&rx_high);
			let rx_normal = Arc::clone(&rx_normal);
			thread::spawn(move || worker_loop(&[rx_high, rx_normal]));
		}

		Self { high, normal }
	}

	/// Submit a closure → returns a Future for its result
	pub fn spawn<F, T>(&self, priority: Priority, f: F) -> impl Future<Output = ClResult<T>>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		let (res_tx, res_rx) = oneshot::channel();

		let job: Job = Box::new(move || {
			let _ignore = res_tx.send(f());
		});

		let queue = match priority {
			Priority::High => &self.high,
			Priority::Normal => &self.normal,
		};
		if queue.send(job).is_err() {
			error!("Failed to send job to {:?} priority worker queue", priority);
		}

		async move {
			res_rx.await.map_err(|_| {
				error!("Worker dropped result channel (task may have panicked)");
				Error::Internal("worker task failed".into())
			})
		}
	}

	pub fn run<F, T>(&self, f: F) -> impl Future<Output = ClResult<T>>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		self.spawn(Priority::Normal, f)
	}

	/// Like `run`, but flattens `ClResult<ClResult<T>>` into `ClResult<T>`.
	pub fn try_run<F, T>(&self, f: F) -> impl Future<Output = ClResult<T>>
	where
		F: FnOnce() -> ClResult<T> + Send + 'static,
		T: Send + 'static,
	{
		let fut = self.run(f);
		async move { fut.await? }
	}

	/// Runs on the high priority lane. Used on the request path.
	pub fn run_immed<F, T>(&self, f: F) -> impl Future<Output = ClResult<T>>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		self.spawn(Priority::High, f)
	}

	/// Like `run_immed`, but flattens `ClResult<ClResult<T>>` into `ClResult<T>`.
	pub fn try_run_immed<F, T>(&self, f: F) -> impl Future<Output = ClResult<T>>
	where
		F: FnOnce() -> ClResult<T> + Send + 'static,
		T: Send + 'static,
	{
		let fut = self.run_immed(f);
		async move { fut.await? }
	}
}

fn worker_loop(queues: &[JobQueue]) {
	loop {
		// Drain higher-priority queues first
		let mut job = None;
		for rx in queues {
			if let Ok(j) = rx.try_recv() {
				job = Some(j);
				break;
			}
		}

		let job = if let Some(job) = job {
			job
		} else {
			let mut selector = flume::Selector::new();
			for rx in queues {
				selector = selector.recv(rx, |res| res);
			}
			match selector.wait() {
				Ok(job) => job,
				// All senders gone: the pool was dropped
				Err(flume::RecvError::Disconnected) => return,
			}
		};

		if let Err(e) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(job)) {
			error!("Worker thread caught panic: {:?}", e);
		}
	}
}


// vim: ts=4
