//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use phonebook::config::PhonebookConfig;
use phonebook::http::HttpServer;
use phonebook::lifecycle::Shutdown;
use phonebook::store::{PersonStore, SharedStore};
use tokio::net::TcpListener;

/// A phonebook server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: SharedStore,
    pub shutdown: Shutdown,
    handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger graceful shutdown and wait for the server task to finish.
    #[allow(dead_code)]
    pub async fn stop(self) {
        self.shutdown.trigger();
        let result = tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("server did not shut down in time")
            .expect("server task panicked");
        result.expect("server returned an error");
    }
}

/// Start a server with `config` and `store` on 127.0.0.1 with a random port.
pub async fn start_server(mut config: PhonebookConfig, store: PersonStore) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let server = HttpServer::new(config, store);
    let store = server.store();
    let shutdown = Shutdown::new();
    let signal = shutdown.wait();

    let handle = tokio::spawn(async move { server.run(listener, signal).await });

    TestServer {
        addr,
        store,
        shutdown,
        handle,
    }
}

/// Start a server with default config and the sample entries.
#[allow(dead_code)]
pub async fn start_sample_server() -> TestServer {
    start_server(PhonebookConfig::default(), PersonStore::with_sample_data()).await
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
