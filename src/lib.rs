//! # StaffHub
//!
//! Role-gated employee directory core: session lifecycle, roster
//! management, access policy, view routing, and form validation.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, access policy and traits
//! - **application**: Session store, roster service, view router, form
//! - **infrastructure**: External concerns (storage, session slot)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, default_session_slot_path, AppConfig, ConfigError};

// Re-export the service layer for easy access
pub use application::{
    EmployeeForm, EmployeeQuery, Intent, RosterService, SessionStore, View, ViewRouter,
};
pub use domain::{
    Action, DomainError, DomainResult, Employee, EmployeeDraft, EmployeeRepository,
    EmployeeStatus, EmployeeUpdate, Identity, Role,
};
pub use infrastructure::{FileSessionSlot, InMemoryEmployeeRepository};
