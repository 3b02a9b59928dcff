//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use tender_registry::{HttpServer, Ledger, RegistryConfig, Shutdown};

/// A registry running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub ledger: Ledger,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a registry serving `ledger` and wait until it accepts connections.
pub async fn start_server(ledger: Ledger) -> TestServer {
    let mut config = RegistryConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();

    let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, ledger.clone());
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    for _ in 0..50 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    TestServer {
        addr,
        ledger,
        shutdown,
    }
}

/// Client that never reuses pooled connections across servers.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
