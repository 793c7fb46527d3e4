use std::future::Future;

use tokio::runtime::{Builder, Runtime};
use tracing::info;

/// Fixed-size worker pool driving a single shared reactor.
///
/// All asynchronous accepts, reads and writes are scheduled here; readiness
/// callbacks for distinct connections may run on different workers
/// concurrently, while each connection's own stages stay strictly sequential
/// inside its task.
pub struct Executor {
    runtime: Runtime,
    workers: usize,
}

impl Executor {
    pub fn new(workers: usize) -> anyhow::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(workers)
            .thread_name("oneshotd-worker")
            .enable_all()
            .build()?;

        Ok(Self { runtime, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.runtime.spawn(task);
    }

    pub fn block_on<F: Future>(&self, task: F) -> F::Output {
        self.runtime.block_on(task)
    }

    /// Halts the event source and joins every worker thread.
    ///
    /// Pending tasks are cancelled at their next suspension point; the call
    /// returns only once all workers have exited.
    pub fn stop(self) {
        info!("stopping executor ({} workers)", self.workers);
        drop(self.runtime);
    }
}
