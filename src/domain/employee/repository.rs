//! Roster repository trait

use async_trait::async_trait;

use super::{Employee, EmployeeDraft, EmployeeUpdate};
use crate::domain::DomainResult;

/// Persistence contract for the employee roster.
///
/// Operations are async so a real backend can replace the in-memory
/// implementation without touching callers; in this scope they always
/// resolve within the same turn.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Full snapshot in insertion order.
    async fn list(&self) -> DomainResult<Vec<Employee>>;

    /// Lookup by id. Absence is a value, not an error.
    async fn get(&self, id: &str) -> DomainResult<Option<Employee>>;

    /// Lookup by email, the self-service join key.
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Employee>>;

    /// Assign a fresh id, append the record and return it.
    /// Rejects a duplicate email with `Conflict`.
    async fn create(&self, draft: EmployeeDraft) -> DomainResult<Employee>;

    /// Shallow-merge the provided fields into the existing record and
    /// return the merged result. Unknown id is `NotFound`.
    async fn update(&self, id: &str, update: EmployeeUpdate) -> DomainResult<Employee>;

    /// Remove the record. Unknown id is `NotFound`; the collection is
    /// left unchanged.
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
