//! Per-article view counting: a small HTTP service over a durable
//! key-value store, a client with once-per-session increment semantics,
//! and a terminal display widget.

pub mod client;
pub mod config;
pub mod logging;
pub mod service;
pub mod store;
pub mod widget;
