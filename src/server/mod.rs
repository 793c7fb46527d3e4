//! Composition root: the executor, the acceptor, and the start/stop protocol
//! tying them together.

pub mod acceptor;
pub mod executor;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::resolver::Resolver;
use acceptor::Acceptor;
use executor::Executor;

/// Owns the executor and the acceptor; `start` and `stop` bracket the
/// server's whole lifetime.
pub struct Server {
    executor: Option<Executor>,
    acceptor: Option<Arc<Acceptor>>,
    local_addr: Option<SocketAddr>,
}

impl Server {
    pub fn new() -> Self {
        Self {
            executor: None,
            acceptor: None,
            local_addr: None,
        }
    }

    /// Spawns the worker pool, binds the listening socket and starts the
    /// accept loop.
    ///
    /// A bind failure is the one fatal path: it aborts startup. Everything
    /// after this point is connection-scoped and never takes the server down.
    pub fn start(&mut self, cfg: &Config) -> anyhow::Result<SocketAddr> {
        let workers = cfg.server.worker_count();
        let executor = Executor::new(workers)?;

        let listener = executor
            .block_on(TcpListener::bind(&cfg.server.listen_addr))
            .with_context(|| format!("failed to bind {}", cfg.server.listen_addr))?;
        let addr = listener.local_addr()?;
        info!("listening on {} with {} workers", addr, workers);

        let resolver = Arc::new(Resolver::new(&cfg.static_files));
        let acceptor = Arc::new(Acceptor::new());
        executor.spawn(Arc::clone(&acceptor).run(
            listener,
            resolver,
            cfg.server.max_request_buffer,
        ));

        self.executor = Some(executor);
        self.acceptor = Some(acceptor);
        self.local_addr = Some(addr);

        Ok(addr)
    }

    /// Stops accepting, halts the event source and joins every worker.
    ///
    /// When this returns no worker thread is running and the listening port
    /// has been released. Calling it again (or without a matching `start`) is
    /// a no-op.
    pub fn stop(&mut self) {
        if let Some(acceptor) = self.acceptor.take() {
            acceptor.stop();
        }

        if let Some(executor) = self.executor.take() {
            executor.stop();
        }

        self.local_addr = None;
    }

    /// Address the listener is bound to while the server is running.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }
}

impl Default for Server {
    fn default() -> Self {
        Self::new()
    }
}
