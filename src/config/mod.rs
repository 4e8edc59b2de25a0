//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → CLI overrides applied in main
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, read_config, resolve_config, ConfigError, ConfigOverrides};
pub use schema::{
    AppConfig, ListenerConfig, ObservabilityConfig, SecurityConfig, StoreConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
