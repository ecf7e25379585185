use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::service::routes::build_router;
use crate::service::shutdown::ShutdownSignal;
use crate::store::CounterStore;

pub struct CounterServer {
    pub addr: SocketAddr,
    /// The bound listener, kept alive to prevent port race conditions.
    /// Populated by try_bind(), consumed by run().
    listener: Option<TcpListener>,
    router: Router,
    shutdown: Arc<ShutdownSignal>,
}

impl CounterServer {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)), // Will be determined at bind time
            listener: None,
            router: build_router(store),
            shutdown: Arc::new(ShutdownSignal::new()),
        }
    }

    /// Try to bind to the configured address, falling back to incremental
    /// ports if busy. Returns the bound address.
    ///
    /// The listener is kept alive so another process cannot claim the port
    /// between try_bind() and run().
    pub async fn try_bind(
        &mut self,
        bind_addr: &str,
    ) -> Result<SocketAddr, Box<dyn std::error::Error>> {
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

        let start_port = bind_addr.port();
        let host = bind_addr.ip();

        for port in start_port..=start_port.saturating_add(100) {
            let try_addr = SocketAddr::new(host, port);
            match TcpListener::bind(try_addr).await {
                Ok(listener) => {
                    let actual_addr = listener.local_addr()?;
                    self.addr = actual_addr;
                    self.listener = Some(listener);
                    tracing::info!("Counter service bound to {}", actual_addr);
                    return Ok(actual_addr);
                }
                Err(e) => {
                    tracing::debug!("Port {} busy: {}", port, e);
                    // Port 0 means the OS picked one; don't scan from there.
                    if start_port == 0 {
                        break;
                    }
                    continue;
                }
            }
        }

        Err(format!(
            "Could not find available port in range {}-{}",
            start_port,
            start_port.saturating_add(100)
        )
        .into())
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Run the counter service.
    ///
    /// Consumes self to take ownership of the pre-bound listener.
    /// Call try_bind() before run().
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let listener = self
            .listener
            .ok_or("try_bind() must be called before run()")?;

        tracing::info!("Starting counter service on {}", self.addr);

        let shutdown = self.shutdown.clone();
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.wait_for_shutdown().await;
            })
            .into_future()
            .await?;

        tracing::info!("Counter service stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownSignal>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
