/// HTTP methods the server accepts.
///
/// Anything else on the wire is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// POST - Accepted on the wire; request bodies are not read
    Post,
}

/// A parsed HTTP request.
///
/// Only the pieces the router consumes are kept: the method, the raw path
/// from the request line, and the User-Agent header value. The path is
/// bounded by the receive buffer capacity and is never reassembled across
/// reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    /// Value of the User-Agent header, or `"Unknown"` when absent.
    pub user_agent: String,
}
