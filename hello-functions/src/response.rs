use hello_functions_wit::function_web::exports::hello::functions::guest_function_web::Response;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Values returned by a function implemented with the [crate::post!] macro must implement this trait.
pub trait IntoWebResponse {
    /// Converts the value into the response handed back to the host.
    fn response(self) -> Response;
}

/// A WebError represents an error result produced by a function execution.
/// Functionally, it is also just an HTTP response - however, this allows for writing
/// functions with a return signature of `WebResult` if you are okay with all errors
/// being converted to 500s and returned in the body.
#[derive(Debug)]
pub struct WebError {
    source: Box<dyn Error>,
    response: WebResponse,
}

impl<E: Error + 'static> From<E> for WebError {
    fn from(e: E) -> Self {
        let response = WebResponse::new()
            .with_status(500)
            .with_text(format!("An error occurred during function invocation: {e}"));
        Self {
            source: Box::new(e),
            response,
        }
    }
}

impl Display for WebError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "WebError(Source: {})", self.source)
    }
}

/// A Result type for implementing functions. Allows you to use `?` within your function body
/// to return a 500 with the error details.
pub type WebResult<T> = Result<T, WebError>;

impl<R> IntoWebResponse for Result<R, WebError>
where
    R: IntoWebResponse,
{
    fn response(self) -> Response {
        match self {
            Ok(r) => r.response(),
            Err(e) => e.response.response(),
        }
    }
}

/// This represents a response from a web function.
/// When constructed, it's a 200 response with no headers or body.
/// You can set the status, headers, and body via [WebResponse::with_status], [WebResponse::with_headers],
/// and [WebResponse::with_text] respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Default for WebResponse {
    fn default() -> Self {
        Self {
            status: 200,
            headers: vec![],
            body: vec![],
        }
    }
}

impl WebResponse {
    /// Creates a new default response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Adds a header to the response.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Overrides the collection of headers for the response.
    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    /// Sets a utf-8 text body.
    pub fn with_text(mut self, body: impl Into<String>) -> Self {
        self.body = body.into().into_bytes();
        self
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Headers in the order they were added.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// The first value of a header, compared case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The raw response body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl IntoWebResponse for WebResponse {
    fn response(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers.into_iter().map(Into::into).collect(),
            body: self.body,
        }
    }
}
