use std::collections::HashMap;
use std::net::Shutdown;
use std::sync::Arc;

use socket2::SockRef;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{error, info, warn};

use crate::http::parser::{self, Method, RequestLineError};
use crate::http::status::StatusCode;
use crate::http::writer;
use crate::resolver::{Resolution, Resolver};

pub struct Connection {
    stream: TcpStream,
    buffer: Vec<u8>,
    max_buffer: usize,
    method: Option<Method>,
    target: String,
    headers: HashMap<String, String>,
    status: StatusCode,
    response_headers: String,
    body: Vec<u8>,
    resolver: Arc<Resolver>,
}

/// Pipeline stages. Each is entered at most once, in order, with the error
/// exits jumping straight to `SendResponse` (or, on transport errors, out of
/// the run loop entirely).
enum State {
    AwaitRequestLine,
    /// Carries the byte offset of the request line's terminating CRLF.
    ParseRequestLine(usize),
    AwaitHeaders,
    /// Carries the byte offset of the header block's terminating blank line.
    ParseHeaders(usize),
    ResolveAndLoad,
    SendResponse,
    Teardown,
}

enum ReadOutcome {
    /// Delimiter found at this offset.
    Found(usize),
    /// Buffer filled to capacity without the delimiter appearing.
    Overflow,
}

impl Connection {
    pub fn new(stream: TcpStream, resolver: Arc<Resolver>, max_buffer: usize) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(max_buffer.min(4096)),
            max_buffer,
            method: None,
            target: String::new(),
            headers: HashMap::new(),
            status: StatusCode::Ok,
            response_headers: String::new(),
            body: Vec::new(),
            resolver,
        }
    }

    /// Drives the connection through its pipeline until teardown.
    ///
    /// Protocol errors degrade to an error status and still produce a
    /// response; transport errors while reading return `Err` without writing
    /// anything (the peer is assumed gone). Exactly one response is sent on
    /// every non-error path.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut state = State::AwaitRequestLine;

        loop {
            state = match state {
                State::AwaitRequestLine => match self.read_until(b"\r\n").await? {
                    ReadOutcome::Found(at) => State::ParseRequestLine(at),
                    ReadOutcome::Overflow => {
                        warn!("request line exceeds {} bytes", self.max_buffer);
                        self.status = StatusCode::PayloadTooLarge;
                        State::SendResponse
                    }
                },

                State::ParseRequestLine(at) => {
                    let line = String::from_utf8_lossy(&self.buffer[..at]).into_owned();
                    // Keep the CRLF: a request with zero headers terminates
                    // with "\r\n\r\n" that spans it.
                    self.buffer.drain(..at);

                    match parser::parse_request_line(&line) {
                        Ok(req) => {
                            if req.method == Method::POST {
                                info!("POST body, if any, is left unread");
                            }
                            self.method = Some(req.method);
                            self.target = req.target;
                            State::AwaitHeaders
                        }
                        Err(RequestLineError::UnsupportedMethod) => {
                            error!("unsupported method in request line {:?}", line);
                            self.status = StatusCode::NotImplemented;
                            State::SendResponse
                        }
                        Err(RequestLineError::UnsupportedVersion) => {
                            error!("unsupported HTTP version in request line {:?}", line);
                            self.status = StatusCode::VersionNotSupported;
                            State::SendResponse
                        }
                    }
                }

                State::AwaitHeaders => match self.read_until(b"\r\n\r\n").await? {
                    ReadOutcome::Found(at) => State::ParseHeaders(at),
                    ReadOutcome::Overflow => {
                        warn!("header block exceeds {} bytes", self.max_buffer);
                        self.status = StatusCode::PayloadTooLarge;
                        State::SendResponse
                    }
                },

                State::ParseHeaders(at) => {
                    // buffer[..2] is the request line's CRLF; at == 0 means
                    // the blank line came immediately (no headers at all).
                    let block = if at > 2 {
                        String::from_utf8_lossy(&self.buffer[2..at]).into_owned()
                    } else {
                        String::new()
                    };
                    self.headers = parser::parse_headers(&block);
                    info!("parsed {} request headers", self.headers.len());
                    State::ResolveAndLoad
                }

                State::ResolveAndLoad => {
                    match self.resolver.resolve(&self.target) {
                        Resolution::Resource(bytes) => {
                            self.set_body(bytes);
                        }
                        Resolution::ErrorDocument(bytes) => {
                            self.status = StatusCode::NotFound;
                            self.set_body(bytes);
                        }
                        Resolution::Unreadable => {
                            self.status = StatusCode::ServerError;
                        }
                    }
                    State::SendResponse
                }

                State::SendResponse => {
                    self.send_response().await;
                    State::Teardown
                }

                State::Teardown => break,
            };
        }

        Ok(())
    }

    /// Reads from the socket until `delim` is present in the buffer.
    ///
    /// Reads are capped so the buffer never grows past `max_buffer`; a full
    /// buffer without the delimiter is an `Overflow` (413), not an error. EOF
    /// before the delimiter means the peer gave up mid-request.
    async fn read_until(&mut self, delim: &[u8]) -> anyhow::Result<ReadOutcome> {
        loop {
            if let Some(at) = parser::find_delimiter(&self.buffer, delim) {
                return Ok(ReadOutcome::Found(at));
            }

            let room = self.max_buffer.saturating_sub(self.buffer.len());
            if room == 0 {
                return Ok(ReadOutcome::Overflow);
            }

            let mut chunk = [0u8; 1024];
            let len = room.min(chunk.len());
            let n = self.stream.read(&mut chunk[..len]).await?;

            if n == 0 {
                anyhow::bail!("peer closed the connection before the request was complete");
            }

            self.buffer.extend_from_slice(&chunk[..n]);
        }
    }

    fn set_body(&mut self, bytes: Vec<u8>) {
        self.response_headers
            .push_str(&format!("content-length: {}\r\n", bytes.len()));
        self.body = bytes;
    }

    /// Terminal write: half-close the receive direction, send the response as
    /// one gathered write, then close the socket fully. Write failures are
    /// logged and teardown proceeds regardless.
    async fn send_response(&mut self) {
        // No request data is read past this point.
        if let Err(e) = SockRef::from(&self.stream).shutdown(Shutdown::Read) {
            warn!("receive-direction shutdown failed: {}", e);
        }

        let result =
            writer::write_response(&mut self.stream, self.status, &self.response_headers, &self.body)
                .await;

        match result {
            Ok(written) => {
                let method = self
                    .method
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "-".to_string());
                info!(
                    "{} {:?} -> {} ({} bytes)",
                    method,
                    self.target,
                    self.status.as_u16(),
                    written
                );
            }
            Err(e) => warn!("failed to write response: {}", e),
        }

        if let Err(e) = self.stream.shutdown().await {
            warn!("send-direction shutdown failed: {}", e);
        }
    }
}
