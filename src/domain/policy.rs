//! Access policy — the role/action decision table
//!
//! Consulted twice per the design: once to decide which navigation
//! options are exposed, and again immediately before every mutating
//! store operation. Hiding a control is not enforcement.

use std::fmt;

use crate::domain::employee::Employee;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::identity::{Identity, Role};

/// Everything a user can ask the system to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewAllEmployees,
    ViewOwnProfile,
    ViewEmployeeDetail,
    CreateEmployee,
    EditEmployee,
    DeleteEmployee,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::ViewAllEmployees,
        Action::ViewOwnProfile,
        Action::ViewEmployeeDetail,
        Action::CreateEmployee,
        Action::EditEmployee,
        Action::DeleteEmployee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ViewAllEmployees => "view-all-employees",
            Action::ViewOwnProfile => "view-own-profile",
            Action::ViewEmployeeDetail => "view-employee-detail",
            Action::CreateEmployee => "create-employee",
            Action::EditEmployee => "edit-employee",
            Action::DeleteEmployee => "delete-employee",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decision table. Employee detail access is additionally scoped to
/// the actor's own record by [`can_view_record`].
pub fn allows(role: Role, action: Action) -> bool {
    use Action::*;
    match (role, action) {
        (Role::Admin | Role::Hr | Role::Manager, ViewAllEmployees) => true,
        (Role::Admin | Role::Hr | Role::Manager, ViewEmployeeDetail) => true,
        (Role::Admin | Role::Hr | Role::Manager, CreateEmployee) => true,
        (Role::Admin | Role::Hr | Role::Manager, EditEmployee) => true,
        (Role::Admin | Role::Hr, DeleteEmployee) => true,
        (Role::Employee, ViewOwnProfile) => true,
        (Role::Employee, ViewEmployeeDetail) => true,
        _ => false,
    }
}

/// `allows` as a guard, for use with `?` ahead of store operations.
pub fn check(role: Role, action: Action) -> DomainResult<()> {
    if allows(role, action) {
        Ok(())
    } else {
        Err(DomainError::PermissionDenied { role, action })
    }
}

/// Record-level visibility: an employee may only see the record whose
/// email matches their identity; every other allowed role sees all.
pub fn can_view_record(actor: &Identity, employee: &Employee) -> bool {
    match actor.role {
        Role::Employee => actor.email.eq_ignore_ascii_case(&employee.email),
        _ => allows(actor.role, Action::ViewEmployeeDetail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::domain::employee::{EmployeeStatus, EmergencyContact};

    const ROLES: [Role; 4] = [Role::Admin, Role::Hr, Role::Manager, Role::Employee];

    #[test]
    fn decision_table_is_exact() {
        // Rows follow Action::ALL, columns admin / hr / manager / employee.
        let expected: [(Action, [bool; 4]); 6] = [
            (Action::ViewAllEmployees, [true, true, true, false]),
            (Action::ViewOwnProfile, [false, false, false, true]),
            (Action::ViewEmployeeDetail, [true, true, true, true]),
            (Action::CreateEmployee, [true, true, true, false]),
            (Action::EditEmployee, [true, true, true, false]),
            (Action::DeleteEmployee, [true, true, false, false]),
        ];

        for (action, row) in expected {
            for (role, want) in ROLES.iter().zip(row) {
                assert_eq!(
                    allows(*role, action),
                    want,
                    "({role}, {action}) should be {want}"
                );
            }
        }
    }

    #[test]
    fn check_reports_role_and_action() {
        let err = check(Role::Manager, Action::DeleteEmployee).unwrap_err();
        assert_eq!(
            err,
            DomainError::PermissionDenied {
                role: Role::Manager,
                action: Action::DeleteEmployee,
            }
        );
        assert!(check(Role::Hr, Action::DeleteEmployee).is_ok());
    }

    fn identity(role: Role, email: &str) -> Identity {
        Identity {
            id: "x".into(),
            email: email.into(),
            name: "Test".into(),
            role,
        }
    }

    fn record(email: &str) -> Employee {
        Employee {
            id: "e1".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            email: email.into(),
            phone: "1".into(),
            position: "p".into(),
            department: "d".into(),
            salary: 1.0,
            hire_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            status: EmployeeStatus::Active,
            address: "a".into(),
            avatar: None,
            emergency_contact: EmergencyContact::default(),
        }
    }

    #[test]
    fn employee_sees_only_own_record() {
        let me = identity(Role::Employee, "john.doe@company.com");
        assert!(can_view_record(&me, &record("John.Doe@company.com")));
        assert!(!can_view_record(&me, &record("sarah.johnson@company.com")));

        let hr = identity(Role::Hr, "hr@company.com");
        assert!(can_view_record(&hr, &record("sarah.johnson@company.com")));
    }
}
