//! HTTP protocol implementation.
//!
//! This module implements the one-request-per-connection HTTP/1.1 surface:
//! a connection accepts exactly one request, sends exactly one response, and
//! is then torn down. There is no keep-alive, no pipelining, no chunked
//! transfer.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection pipeline implementing the staged state machine
//! - **`parser`**: Parses the request line and header block from buffered bytes
//! - **`status`**: The fixed status-code/reason-phrase table
//! - **`writer`**: Serializes and writes the response to the client
//!
//! # Connection State Machine
//!
//! Each client connection walks the pipeline exactly once:
//!
//! ```text
//!        ┌──────────────────┐
//!        │ AwaitRequestLine │ ← Read until "\r\n"           ── 413 ──┐
//!        └──────┬───────────┘                                       │
//!               ▼                                                   │
//!        ┌──────────────────┐                                       │
//!        │ ParseRequestLine │ ← Method/target/version   ── 501/505 ─┤
//!        └──────┬───────────┘                                       │
//!               ▼                                                   │
//!        ┌──────────────────┐                                       │
//!        │   AwaitHeaders   │ ← Read until "\r\n\r\n"       ── 413 ─┤
//!        └──────┬───────────┘                                       │
//!               ▼                                                   │
//!        ┌──────────────────┐                                       │
//!        │   ParseHeaders   │                                       │
//!        └──────┬───────────┘                                       │
//!               ▼                                                   │
//!        ┌──────────────────┐                                       │
//!        │  ResolveAndLoad  │ ← File lookup         ── 200/404/500 ─┤
//!        └──────┬───────────┘                                       │
//!               ▼                                                   │
//!        ┌──────────────────┐                                       │
//!        │   SendResponse   │ ←─────────────────────────────────────┘
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │     Teardown     │ ← Socket closed, connection dropped
//!        └──────────────────┘
//! ```
//!
//! A transport error while reading skips `SendResponse` entirely: the peer is
//! assumed gone and the connection aborts straight to teardown.

pub mod connection;
pub mod parser;
pub mod status;
pub mod writer;
