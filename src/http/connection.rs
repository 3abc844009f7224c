use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::warn;

use crate::config::Config;
use crate::http::parser::{self, BUFFER_SIZE};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::routes;

/// One accepted connection: the socket plus a private fixed-size receive
/// buffer. Lives for exactly one request/response cycle and is owned
/// exclusively by the task that accepted it.
pub struct Connection {
    stream: TcpStream,
    buffer: [u8; BUFFER_SIZE],
    config: Arc<Config>,
}

impl Connection {
    pub fn new(stream: TcpStream, config: Arc<Config>) -> Self {
        Self {
            stream,
            buffer: [0u8; BUFFER_SIZE],
            config,
        }
    }

    /// Runs the full cycle: one read, parse, route, respond.
    ///
    /// Exactly one read is issued; a request split across several segments
    /// is served from whatever arrived first (documented limitation). Failure
    /// policy: a clean zero-byte read closes silently, everything else after
    /// it answers 500. The socket closes when `self` drops, on every exit
    /// path.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let response = match self.stream.read(&mut self.buffer).await {
            // Client disconnected before sending anything.
            Ok(0) => return Ok(()),

            Ok(n) => match parser::parse_request(&self.buffer[..n]) {
                Ok(request) => routes::route(&request, &self.config).await,
                Err(e) => {
                    warn!("Rejecting request: {}", e);
                    Response::internal_error()
                }
            },

            Err(e) => {
                warn!("Receive failed: {}", e);
                Response::internal_error()
            }
        };

        let mut writer = ResponseWriter::new(response);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }
}
