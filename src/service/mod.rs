//! Stateless HTTP service wrapping the counter store.

pub mod error;
pub mod routes;
pub mod server;
pub mod shutdown;

pub use error::ServiceError;
pub use routes::{build_router, HealthStatus, ViewCountBody};
pub use server::{CounterServer, ServerHandle};
pub use shutdown::ShutdownSignal;
