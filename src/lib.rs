//! oneshotd - One-Shot Static File Server
//!
//! Core library for the connection-handling engine: the acceptor, the
//! per-connection request pipeline, and the shared worker-pool executor.

pub mod config;
pub mod http;
pub mod resolver;
pub mod server;
