use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method, StatusCode, Uri};

use crate::errors::VerifyError;

/// A signed HTTP response together with the request that produced it.
///
/// Derived components such as `@method` and `@path` describe the request,
/// while `@status` and header fields come from the response.
#[derive(Debug, Clone)]
pub struct HttpMessage {
    method: Method,
    uri: Uri,
    status: Option<StatusCode>,
    headers: HeaderMap,
}

impl HttpMessage {
    /// Creates a message with no status and no headers.
    pub fn new(method: Method, uri: Uri) -> Self {
        Self {
            method,
            uri,
            status: None,
            headers: HeaderMap::new(),
        }
    }

    /// Captures the status and headers of `response`.
    pub fn from_response<B>(method: Method, uri: Uri, response: &http::Response<B>) -> Self {
        Self {
            method,
            uri,
            status: Some(response.status()),
            headers: response.headers().clone(),
        }
    }

    /// Sets the response status.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Adds a header value, keeping any existing values for the same name.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, VerifyError> {
        let (name, value) = header_pair(name, value)?;
        self.headers.append(name, value);
        Ok(self)
    }

    /// Replaces every value of a header.
    pub fn insert_header(&mut self, name: &str, value: &str) -> Result<(), VerifyError> {
        let (name, value) = header_pair(name, value)?;
        self.headers.insert(name, value);
        Ok(())
    }

    /// Request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request URI.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Response status, if known.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Response headers (case-insensitive).
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// All values of a header joined with `, `, or `None` when absent or not text.
    pub fn header_text(&self, name: &str) -> Option<String> {
        let values: Vec<&str> = self
            .headers
            .get_all(name)
            .iter()
            .map(|value| value.to_str().ok())
            .collect::<Option<_>>()?;
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), VerifyError> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| VerifyError::InvalidHeader(format!("{name}: {e}")))?;
    let value = HeaderValue::from_str(value)
        .map_err(|e| VerifyError::InvalidHeader(format!("{name}: {e}")))?;
    Ok((name, value))
}
