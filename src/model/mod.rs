//! Employee domain model.
//!
//! # Data Flow
//! ```text
//! POST body (bytes)
//!     → payload.rs (typed decode, every field optional)
//!     → EmployeePayload::into_new_employee (validation, full name)
//!     → NewEmployee
//!     → store assigns uuid + hire timestamp
//!     → Employee (stored, serialized back to the client)
//! ```
//!
//! # Design Decisions
//! - Server-owned fields (uuid, contractHireDate) never come from the wire
//! - Full name is derived once, at construction
//! - Wire names are camelCase

pub mod employee;
pub mod payload;

pub use employee::{Employee, NewEmployee};
pub use payload::{EmployeePayload, PayloadError};
