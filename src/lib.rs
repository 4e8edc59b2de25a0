//! In-memory employee REST API.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod observability;
pub mod store;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use model::{Employee, EmployeePayload, NewEmployee};
pub use store::{EmployeeStore, InMemoryStore};
