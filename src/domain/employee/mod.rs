mod model;
mod repository;

pub use model::{Employee, EmployeeDraft, EmployeeStatus, EmployeeUpdate, EmergencyContact};
pub use repository::EmployeeRepository;
