//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned and propagated)
//!     → employee.rs / health.rs (parse, validate, call the store)
//!     → response.rs (errors mapped to status + JSON body)
//!     → Send to client
//! ```

pub mod employee;
pub mod health;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::ApiError;
pub use server::{AppState, HttpServer, EMPLOYEE_BASE_PATH};
