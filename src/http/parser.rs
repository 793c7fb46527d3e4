use std::collections::HashMap;
use std::fmt;

/// Methods the server is willing to serve.
///
/// Anything else on the request line is rejected with 501 before the target
/// is even looked at. A POST is accepted but its body is never read; it gets
/// the same file-serving treatment as GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
}

impl Method {
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            _ => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::GET => write!(f, "GET"),
            Method::POST => write!(f, "POST"),
        }
    }
}

/// A parsed request line.
#[derive(Debug, Clone)]
pub struct RequestLine {
    pub method: Method,
    pub target: String,
    pub version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestLineError {
    /// Method is not GET or POST (501).
    UnsupportedMethod,
    /// Version is not exactly "HTTP/1.1" (505).
    UnsupportedVersion,
}

/// Splits a request line into method, target and version.
///
/// Tokens are whitespace-delimited; anything past the third token is ignored
/// and a missing token behaves like an empty one (which then fails the method
/// or version check). The method is validated before the version, so
/// `BREW / HTTP/1.0` reports `UnsupportedMethod`.
pub fn parse_request_line(line: &str) -> Result<RequestLine, RequestLineError> {
    let mut parts = line.split_whitespace();

    let method_token = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("");
    let version = parts.next().unwrap_or("");

    let method = Method::from_token(method_token).ok_or(RequestLineError::UnsupportedMethod)?;

    if version != "HTTP/1.1" {
        return Err(RequestLineError::UnsupportedVersion);
    }

    Ok(RequestLine {
        method,
        target: target.to_string(),
        version: version.to_string(),
    })
}

/// Parses a header block into name/value pairs.
///
/// Lines are CRLF-delimited; each is split on the first colon with both sides
/// trimmed. Lines without a colon are skipped rather than treated as errors,
/// and a duplicated name keeps the last value seen.
pub fn parse_headers(block: &str) -> HashMap<String, String> {
    let mut headers = HashMap::new();

    for line in block.split("\r\n") {
        if line.is_empty() {
            continue;
        }

        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_string(), value.trim().to_string());
        }
    }

    headers
}

/// Finds the first occurrence of `delim` in `buf`.
pub fn find_delimiter(buf: &[u8], delim: &[u8]) -> Option<usize> {
    buf.windows(delim.len()).position(|w| w == delim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get_line() {
        let parsed = parse_request_line("GET /index.html HTTP/1.1").unwrap();

        assert_eq!(parsed.method, Method::GET);
        assert_eq!(parsed.target, "/index.html");
        assert_eq!(parsed.version, "HTTP/1.1");
    }

    #[test]
    fn delete_is_not_implemented() {
        let result = parse_request_line("DELETE / HTTP/1.1");
        assert_eq!(result.unwrap_err(), RequestLineError::UnsupportedMethod);
    }

    #[test]
    fn find_crlf_delimiter() {
        assert_eq!(find_delimiter(b"GET /\r\nrest", b"\r\n"), Some(5));
        assert_eq!(find_delimiter(b"GET /", b"\r\n"), None);
    }
}
