use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use viewcount::client::{
    ExecutionContext, MemorySessionGate, SessionGate, ViewCounterClient,
};
use viewcount::config::ClientConfig;
use viewcount::service::CounterServer;
use viewcount::store::{CounterStore, MemoryStore};

async fn spawn_service(store: Arc<dyn CounterStore>) -> SocketAddr {
    let mut server = CounterServer::new(store);
    let addr = server
        .try_bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");

    tokio::spawn(async move {
        let _ = server.run().await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    addr
}

fn client_config(addr: SocketAddr) -> ClientConfig {
    ClientConfig {
        base_url: Some(format!("http://{}", addr)),
        ..ClientConfig::default()
    }
}

#[tokio::test]
async fn session_gate_suppresses_the_second_increment() {
    let store = Arc::new(MemoryStore::new());
    let addr = spawn_service(store.clone()).await;

    let gate = Arc::new(MemorySessionGate::new("viewed_"));
    let client = ViewCounterClient::new(
        &client_config(addr),
        ExecutionContext::Interactive,
        gate.clone(),
    );

    assert_eq!(client.increment_view_count("hello-world").await, 1);
    // Second call in the same session reads instead of incrementing.
    assert_eq!(client.increment_view_count("hello-world").await, 1);

    assert_eq!(store.get("hello-world").unwrap(), Some(1));
    assert!(gate.has_viewed("hello-world"));
}

#[tokio::test]
async fn separate_sessions_each_count_once() {
    let store = Arc::new(MemoryStore::new());
    let addr = spawn_service(store.clone()).await;
    let config = client_config(addr);

    let first = ViewCounterClient::new(
        &config,
        ExecutionContext::Interactive,
        Arc::new(MemorySessionGate::new("viewed_")),
    );
    let second = ViewCounterClient::new(
        &config,
        ExecutionContext::Interactive,
        Arc::new(MemorySessionGate::new("viewed_")),
    );

    assert_eq!(first.increment_view_count("hello-world").await, 1);
    assert_eq!(second.increment_view_count("hello-world").await, 2);
    assert_eq!(store.get("hello-world").unwrap(), Some(2));
}

#[tokio::test]
async fn build_context_returns_zero_and_never_calls_the_service() {
    let store = Arc::new(MemoryStore::new());
    let addr = spawn_service(store.clone()).await;

    let gate = Arc::new(MemorySessionGate::new("viewed_"));
    let client = ViewCounterClient::new(&client_config(addr), ExecutionContext::Build, gate.clone());

    assert_eq!(client.increment_view_count("x").await, 0);
    assert_eq!(client.get_view_count("x").await, 0);

    // Nothing reached the service and no session marker was written.
    assert_eq!(store.get("x").unwrap(), None);
    assert!(!gate.has_viewed("x"));
}

#[tokio::test]
async fn transport_failure_collapses_to_zero_and_leaves_no_marker() {
    // Reserve an address, then drop the listener so the port is closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gate = Arc::new(MemorySessionGate::new("viewed_"));
    let client = ViewCounterClient::new(
        &client_config(addr),
        ExecutionContext::Interactive,
        gate.clone(),
    );

    assert_eq!(client.increment_view_count("hello-world").await, 0);
    // No marker, so the next mount in this session may retry.
    assert!(!gate.has_viewed("hello-world"));
    assert_eq!(client.get_view_count("hello-world").await, 0);
}

#[tokio::test]
async fn non_2xx_status_collapses_to_zero() {
    let addr = spawn_service(Arc::new(MemoryStore::new())).await;

    let gate = Arc::new(MemorySessionGate::new("viewed_"));
    let client = ViewCounterClient::new(
        &client_config(addr),
        ExecutionContext::Interactive,
        gate.clone(),
    );

    // An empty slug is rejected by the service with a 400; the client
    // soft-fails rather than surfacing the error.
    assert_eq!(client.increment_view_count("").await, 0);
    assert!(!gate.has_viewed(""));
}

#[tokio::test]
async fn failed_increment_can_be_retried_next_mount() {
    let store = Arc::new(MemoryStore::new());

    // First mount: service unreachable.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = listener.local_addr().unwrap();
    drop(listener);

    let gate = Arc::new(MemorySessionGate::new("viewed_"));
    let offline = ViewCounterClient::new(
        &client_config(dead_addr),
        ExecutionContext::Interactive,
        gate.clone(),
    );
    assert_eq!(offline.increment_view_count("hello-world").await, 0);

    // Next mount, same session, service back up: the increment goes
    // through because no marker was written.
    let addr = spawn_service(store.clone()).await;
    let online = ViewCounterClient::new(
        &client_config(addr),
        ExecutionContext::Interactive,
        gate.clone(),
    );
    assert_eq!(online.increment_view_count("hello-world").await, 1);
    assert!(gate.has_viewed("hello-world"));
    assert_eq!(store.get("hello-world").unwrap(), Some(1));
}
