//! Application services: session lifecycle, roster orchestration,
//! view routing, and the employee form.

pub mod form;
pub mod router;
pub mod roster;
pub mod session;

pub use form::{EmployeeForm, EmployeeFormData, FormField};
pub use router::{Intent, View, ViewRouter};
pub use roster::{EmployeeQuery, RosterService, RosterSnapshot, RosterStats};
pub use session::{mock_directory, SessionSnapshot, SessionStore, DEMO_PASSWORD};
