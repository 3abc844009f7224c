use crate::http::request::{Method, Request};

/// Receive buffer capacity. A request must arrive in a single read; whatever
/// does not fit is truncated, never reassembled from further reads.
pub const BUFFER_SIZE: usize = 2048;

/// Longest path the parser will copy out of the buffer.
pub const MAX_PATH_LEN: usize = BUFFER_SIZE - 1;

const USER_AGENT_KEY: &[u8] = b"User-Agent:";
const DEFAULT_USER_AGENT: &str = "Unknown";

/// Reasons a raw buffer is rejected instead of producing a `Request`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Request line does not start with `GET ` or `POST `.
    UnsupportedMethod,
    /// Path bytes are not valid UTF-8.
    InvalidPath,
    /// Zero bytes of input.
    Empty,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnsupportedMethod => write!(f, "unsupported HTTP method"),
            ParseError::InvalidPath => write!(f, "request path is not valid UTF-8"),
            ParseError::Empty => write!(f, "empty request"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses the filled prefix of a connection's receive buffer.
///
/// Only the method token, the path, and the User-Agent header are
/// interpreted. The HTTP version token is not validated and no request body
/// is read.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let (method, after_method) = if let Some(rest) = buf.strip_prefix(b"GET ") {
        (Method::Get, rest)
    } else if let Some(rest) = buf.strip_prefix(b"POST ") {
        (Method::Post, rest)
    } else {
        return Err(ParseError::UnsupportedMethod);
    };

    let path = parse_path(after_method)?;
    let user_agent = parse_user_agent(buf);

    Ok(Request {
        method,
        path,
        user_agent,
    })
}

/// Copies path bytes until a space, a NUL, the end of input, or the path
/// capacity, whichever comes first. Hitting the capacity truncates the path;
/// it is not an error.
fn parse_path(buf: &[u8]) -> Result<String, ParseError> {
    let bounded = &buf[..buf.len().min(MAX_PATH_LEN)];
    let end = bounded
        .iter()
        .position(|&b| b == b' ' || b == 0)
        .unwrap_or(bounded.len());

    std::str::from_utf8(&bounded[..end])
        .map(str::to_owned)
        .map_err(|_| ParseError::InvalidPath)
}

/// Scans the whole buffer for a `User-Agent:` header, independent of line
/// structure. Skips leading spaces, takes until the first CR or LF. Absent
/// or non-UTF-8 values fall back to `"Unknown"`.
fn parse_user_agent(buf: &[u8]) -> String {
    let Some(start) = find(buf, USER_AGENT_KEY) else {
        return DEFAULT_USER_AGENT.to_string();
    };

    let value = &buf[start + USER_AGENT_KEY.len()..];
    let value = &value[value.iter().take_while(|&&b| b == b' ').count()..];
    let end = value
        .iter()
        .position(|&b| b == b'\r' || b == b'\n')
        .unwrap_or(value.len());

    std::str::from_utf8(&value[..end])
        .map(str::to_owned)
        .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
