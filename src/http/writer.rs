use bytes::Buf;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::status::StatusCode;

/// Serializes the response head: status line, accumulated header block, and
/// the blank line separating it from the body.
pub fn serialize_head(status: StatusCode, headers: &str) -> Vec<u8> {
    let mut head = Vec::new();

    head.extend_from_slice(status.status_line().as_bytes());
    head.extend_from_slice(headers.as_bytes());
    head.extend_from_slice(b"\r\n");

    head
}

/// Writes the complete response as one gathered write.
///
/// The head and body are chained rather than copied into a single buffer;
/// `write_all_buf` drives the chain through partial writes. Returns the total
/// number of bytes put on the wire.
pub async fn write_response(
    stream: &mut TcpStream,
    status: StatusCode,
    headers: &str,
    body: &[u8],
) -> anyhow::Result<usize> {
    let head = serialize_head(status, headers);
    let total = head.len() + body.len();

    let mut response = head.as_slice().chain(body);
    stream.write_all_buf(&mut response).await?;
    stream.flush().await?;

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_with_content_length() {
        let head = serialize_head(StatusCode::Ok, "content-length: 5\r\n");
        assert_eq!(head, b"HTTP/1.1 200 OK\r\ncontent-length: 5\r\n\r\n");
    }

    #[test]
    fn head_without_headers_still_terminated() {
        let head = serialize_head(StatusCode::NotImplemented, "");
        assert_eq!(head, b"HTTP/1.1 501 Not Implemented\r\n\r\n");
    }
}
