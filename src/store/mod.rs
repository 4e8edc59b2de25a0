//! Employee storage subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers (Arc<dyn EmployeeStore>)
//!     → memory.rs (sharded concurrent map, uuid → Employee)
//! ```
//!
//! # Design Decisions
//! - Storage is a trait object injected into the HTTP state
//! - Store assigns identifiers and hire timestamps; callers never do
//! - Reads hand out clones; the store keeps sole ownership of records

pub mod memory;

use thiserror::Error;
use uuid::Uuid;

use crate::model::{Employee, NewEmployee};

pub use memory::InMemoryStore;

/// Errors a storage backend may report.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend could not serve the request.
    #[error("{0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Keyed collection of employees.
pub trait EmployeeStore: Send + Sync {
    /// All stored employees. An empty store is not an error.
    fn list_all(&self) -> StoreResult<Vec<Employee>>;

    /// Look up one employee. A missing key is `Ok(None)`.
    fn get_by_id(&self, id: Uuid) -> StoreResult<Option<Employee>>;

    /// Assign an identifier and hire timestamp, store, and return the record.
    fn create(&self, employee: NewEmployee) -> StoreResult<Employee>;

    /// Number of stored employees.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
