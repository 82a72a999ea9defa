//! Core business entities, roles and the access policy

pub mod employee;
pub mod error;
pub mod identity;
pub mod policy;

pub use employee::{
    Employee, EmployeeDraft, EmployeeRepository, EmployeeStatus, EmployeeUpdate, EmergencyContact,
};
pub use error::{DomainError, DomainResult};
pub use identity::{Identity, Role};
pub use policy::Action;
