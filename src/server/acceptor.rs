use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::{error, info, warn};

use crate::http::connection::Connection;
use crate::resolver::Resolver;

/// Owns the listening socket's accept loop.
///
/// Every completed accept is immediately followed by arming the next one, so
/// the listen backlog is continuously drained. The stop flag is the only
/// field shared across threads; `stop` may be called from anywhere.
pub struct Acceptor {
    stopped: AtomicBool,
    stop_signal: Notify,
}

impl Acceptor {
    pub fn new() -> Self {
        Self {
            stopped: AtomicBool::new(false),
            stop_signal: Notify::new(),
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Flags the acceptor as stopped and wakes the accept loop.
    ///
    /// `notify_one` stores a permit, so the signal is not lost even if the
    /// loop is mid-accept rather than parked on the notification.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        self.stop_signal.notify_one();
    }

    /// Accept loop. Consumes the listener; returning drops it, which closes
    /// the listening socket and releases the port.
    pub async fn run(
        self: Arc<Self>,
        listener: TcpListener,
        resolver: Arc<Resolver>,
        max_request_buffer: usize,
    ) {
        loop {
            let accepted = tokio::select! {
                _ = self.stop_signal.notified() => break,
                accepted = listener.accept() => accepted,
            };

            // An accept that raced with stop() completes once; its result is
            // discarded and the socket closed instead of re-armed.
            if self.is_stopped() {
                break;
            }

            match accepted {
                Ok((socket, peer)) => {
                    info!("accepted connection from {}", peer);

                    let conn = Connection::new(socket, resolver.clone(), max_request_buffer);
                    tokio::spawn(async move {
                        if let Err(e) = conn.run().await {
                            error!("connection error from {}: {}", peer, e);
                        }
                    });
                }
                Err(e) => {
                    // Transient accept failures never stop the loop.
                    warn!("accept failed: {}", e);
                }
            }
        }

        info!("acceptor stopped; closing listening socket");
    }
}

impl Default for Acceptor {
    fn default() -> Self {
        Self::new()
    }
}
