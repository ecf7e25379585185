//! Client-side half of the view counter: the HTTP client, the execution
//! context switch, and the session gate.

pub mod client;
pub mod context;
pub mod error;
pub mod session;

pub use client::{ViewCounterClient, DEFAULT_BASE_URL, ENV_BASE_URL};
pub use context::ExecutionContext;
pub use error::ClientError;
pub use session::{DisabledSessionGate, MemorySessionGate, SessionGate};
