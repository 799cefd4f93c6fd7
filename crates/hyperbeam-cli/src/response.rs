//! Raw HTTP response files.
//!
//! The format is what `curl -i` prints: a status line, header lines, a blank
//! line, then an optional body. The body is ignored; signatures cover
//! headers and derived components only.

use http::{Method, StatusCode, Uri};
use hyperbeam_httpsig::{HttpMessage, VerifyError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("empty response file")]
    Empty,

    #[error("invalid status line: {0}")]
    StatusLine(String),

    #[error("invalid header line: {0}")]
    HeaderLine(String),

    #[error("invalid method: {0}")]
    Method(String),

    #[error("invalid url: {0}")]
    Url(String),

    #[error(transparent)]
    Header(#[from] VerifyError),
}

/// Builds an [`HttpMessage`] from a raw response and the request that produced it.
pub fn parse_response(raw: &str, method: &str, url: &str) -> Result<HttpMessage, ResponseError> {
    let method = Method::from_bytes(method.as_bytes())
        .map_err(|_| ResponseError::Method(method.to_string()))?;
    let uri: Uri = url.parse().map_err(|_| ResponseError::Url(url.to_string()))?;

    let mut lines = raw.lines().map(|line| line.trim_end_matches('\r'));
    let status_line = lines
        .by_ref()
        .find(|line| !line.trim().is_empty())
        .ok_or(ResponseError::Empty)?;
    let status = parse_status_line(status_line)?;

    let mut message = HttpMessage::new(method, uri).with_status(status);
    for line in lines.take_while(|line| !line.is_empty()) {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| ResponseError::HeaderLine(line.to_string()))?;
        message = message.with_header(name.trim(), value.trim())?;
    }

    Ok(message)
}

fn parse_status_line(line: &str) -> Result<StatusCode, ResponseError> {
    let mut parts = line.split_whitespace();
    let version = parts.next().unwrap_or_default();
    if !version.starts_with("HTTP/") {
        return Err(ResponseError::StatusLine(line.to_string()));
    }
    parts
        .next()
        .and_then(|code| StatusCode::from_bytes(code.as_bytes()).ok())
        .ok_or_else(|| ResponseError::StatusLine(line.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_with_body() {
        let raw = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nSignature: sig1=:AAAA:\r\n\r\n{\"a\":1}\r\n";
        let message = parse_response(raw, "GET", "http://node.example/~meta@1.0/info").unwrap();
        assert_eq!(message.status(), Some(StatusCode::OK));
        assert_eq!(message.header_text("content-type").as_deref(), Some("application/json"));
        assert_eq!(message.header_text("signature").as_deref(), Some("sig1=:AAAA:"));
        assert_eq!(message.uri().path(), "/~meta@1.0/info");
    }

    #[test]
    fn test_header_values_keep_inner_colons() {
        let raw = "HTTP/2 404\nlocation: http://x:1/y\n";
        let message = parse_response(raw, "POST", "/").unwrap();
        assert_eq!(message.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(message.method(), &Method::POST);
        assert_eq!(message.header_text("location").as_deref(), Some("http://x:1/y"));
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(matches!(parse_response("", "GET", "/"), Err(ResponseError::Empty)));
        assert!(matches!(
            parse_response("200 OK\n", "GET", "/"),
            Err(ResponseError::StatusLine(_))
        ));
        assert!(matches!(
            parse_response("HTTP/1.1 abc\n", "GET", "/"),
            Err(ResponseError::StatusLine(_))
        ));
        assert!(matches!(
            parse_response("HTTP/1.1 200 OK\nno-colon-here\n", "GET", "/"),
            Err(ResponseError::HeaderLine(_))
        ));
        assert!(matches!(
            parse_response("HTTP/1.1 200 OK\n", "GE T", "/"),
            Err(ResponseError::Method(_))
        ));
        assert!(matches!(
            parse_response("HTTP/1.1 200 OK\n", "GET", "http://bad host/"),
            Err(ResponseError::Url(_))
        ));
    }
}
