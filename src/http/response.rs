/// HTTP status codes the server can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use picohttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Content types the server emits: plain text for the built-in routes,
/// octet-stream for file transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    TextPlain,
    OctetStream,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::TextPlain => "text/plain",
            ContentType::OctetStream => "application/octet-stream",
        }
    }
}

/// A complete HTTP response ready to be sent to a client.
///
/// The body length is carried by the `Vec` itself and reported verbatim as
/// Content-Length; file bodies may contain embedded zero bytes, so the
/// length is never derived by scanning for a terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: ContentType,
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a 200 OK response with a plain-text body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: ContentType::TextPlain,
            body: body.into(),
        }
    }

    /// Creates a 200 OK response carrying raw file bytes.
    pub fn octet_stream(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: ContentType::OctetStream,
            body,
        }
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: ContentType::TextPlain,
            body: b"Not Found".to_vec(),
        }
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self {
            status: StatusCode::InternalServerError,
            content_type: ContentType::TextPlain,
            body: b"Internal Server Error".to_vec(),
        }
    }

    /// Exact byte count reported in the Content-Length header.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
