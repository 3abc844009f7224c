//! HTTP protocol implementation.
//!
//! One request per connection, no keep-alive. The layer is organized into:
//!
//! - **`connection`**: per-connection lifecycle (read once, parse, route, respond)
//! - **`parser`**: parses a raw request from the fixed receive buffer
//! - **`request`**: parsed request representation
//! - **`response`**: response representation with fixed status/content-type sets
//! - **`writer`**: serializes and writes responses to the client
//!
//! ```text
//! Listener ── spawn per connection ──▶ Connection
//!     Connection ─▶ parser ─▶ routes ─▶ ResponseWriter ─▶ close
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
