//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use uuid::Uuid;

use employee_api::config::AppConfig;
use employee_api::model::{Employee, NewEmployee};
use employee_api::store::{EmployeeStore, StoreError, StoreResult};
use employee_api::{HttpServer, InMemoryStore, Shutdown};

/// A running server bound to an ephemeral port. Shuts down on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn employees_url(&self) -> String {
        self.url("/api/v1/employee")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server over the given store with default configuration.
pub async fn spawn_server(store: Arc<dyn EmployeeStore>) -> TestServer {
    spawn_server_with(AppConfig::default(), store).await
}

pub async fn spawn_server_with(config: AppConfig, store: Arc<dyn EmployeeStore>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store);
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    TestServer {
        addr,
        client,
        shutdown,
    }
}

/// Store wrapper that counts lookups and can be told to fail listing.
#[derive(Default)]
pub struct ProbeStore {
    inner: InMemoryStore,
    fail_list: bool,
    lookups: AtomicUsize,
}

impl ProbeStore {
    pub fn failing_list() -> Self {
        Self {
            fail_list: true,
            ..Default::default()
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl EmployeeStore for ProbeStore {
    fn list_all(&self) -> StoreResult<Vec<Employee>> {
        if self.fail_list {
            return Err(StoreError::Unavailable("Database error".into()));
        }
        self.inner.list_all()
    }

    fn get_by_id(&self, id: Uuid) -> StoreResult<Option<Employee>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.get_by_id(id)
    }

    fn create(&self, employee: NewEmployee) -> StoreResult<Employee> {
        self.inner.create(employee)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
