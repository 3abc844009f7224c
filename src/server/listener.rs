use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// OS queue depth for connections awaiting acceptance.
const BACKLOG: u32 = 5;

/// Bound listening socket plus the shared server configuration.
pub struct Listener {
    inner: TcpListener,
    config: Arc<Config>,
}

impl Listener {
    /// Binds the configured address with address reuse enabled.
    ///
    /// A failure here is startup-fatal and propagates to the caller;
    /// nothing downstream can proceed without a listening socket.
    pub fn bind(config: Arc<Config>) -> anyhow::Result<Self> {
        let addr: SocketAddr = config.listen_addr().parse()?;

        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4()?,
            SocketAddr::V6(_) => TcpSocket::new_v6()?,
        };
        socket.set_reuseaddr(true)?;
        socket.bind(addr)?;

        let inner = socket.listen(BACKLOG)?;
        Ok(Self { inner, config })
    }

    /// Actual bound address; useful when the configured port is 0.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.inner.local_addr()?)
    }

    /// Runs the accept loop, spawning one detached handler per connection.
    ///
    /// The loop never terminates on its own: an accept failure is logged
    /// and the next accept is attempted. Handler errors are logged by the
    /// spawned task; no connection's failure can reach the loop.
    pub async fn run(self) -> anyhow::Result<()> {
        info!("Listening on {}", self.local_addr()?);

        loop {
            let (socket, peer) = match self.inner.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("Accept failed: {}", e);
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let config = Arc::clone(&self.config);
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, config);
                if let Err(e) = conn.run().await {
                    error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}

/// Binds and serves until the process is stopped.
pub async fn run(config: Arc<Config>) -> anyhow::Result<()> {
    Listener::bind(config)?.run().await
}
