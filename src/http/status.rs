/// HTTP status codes the server can produce.
///
/// The table is fixed and exhaustive; no other code ever appears on the wire:
/// - `Ok` (200): Resource resolved and loaded
/// - `NotFound` (404): Target missing, error document served instead
/// - `PayloadTooLarge` (413): Request line or header block overran the buffer
/// - `ServerError` (500): Resolved file could not be opened
/// - `NotImplemented` (501): Method other than GET/POST
/// - `VersionNotSupported` (505): Version other than HTTP/1.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 413 Request Entity Too Large
    PayloadTooLarge,
    /// 500 Server Error
    ServerError,
    /// 501 Not Implemented
    NotImplemented,
    /// 505 HTTP Version Not Supported
    VersionNotSupported,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use oneshotd::http::status::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::PayloadTooLarge.as_u16(), 413);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::PayloadTooLarge => 413,
            StatusCode::ServerError => 500,
            StatusCode::NotImplemented => 501,
            StatusCode::VersionNotSupported => 505,
        }
    }

    /// Returns the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::PayloadTooLarge => "Request Entity Too Large",
            StatusCode::ServerError => "Server Error",
            StatusCode::NotImplemented => "Not Implemented",
            StatusCode::VersionNotSupported => "HTTP Version Not Supported",
        }
    }

    /// Builds the response status line, CRLF included.
    ///
    /// # Example
    ///
    /// ```
    /// # use oneshotd::http::status::StatusCode;
    /// assert_eq!(StatusCode::Ok.status_line(), "HTTP/1.1 200 OK\r\n");
    /// ```
    pub fn status_line(&self) -> String {
        format!("HTTP/1.1 {} {}\r\n", self.as_u16(), self.reason_phrase())
    }
}
