//! Roster service — policy-enforced CRUD facade over the repository
//!
//! Every operation takes the acting identity and consults the access
//! policy before touching the repository, so a caller bypassing the
//! navigation layer still cannot reach a mutation it is not allowed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::info;

use crate::domain::policy::{self, Action};
use crate::domain::{
    DomainError, DomainResult, Employee, EmployeeDraft, EmployeeRepository, EmployeeStatus,
    EmployeeUpdate, Identity,
};

/// Search and filter criteria for the list view.
#[derive(Debug, Clone, Default)]
pub struct EmployeeQuery {
    /// Case-insensitive match over first/last name, email and position.
    pub search: Option<String>,
    pub department: Option<String>,
    pub status: Option<EmployeeStatus>,
}

impl EmployeeQuery {
    fn matches(&self, employee: &Employee) -> bool {
        let matches_search = match &self.search {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                employee.first_name.to_lowercase().contains(&term)
                    || employee.last_name.to_lowercase().contains(&term)
                    || employee.email.to_lowercase().contains(&term)
                    || employee.position.to_lowercase().contains(&term)
            }
            _ => true,
        };
        let matches_department = self
            .department
            .as_ref()
            .map_or(true, |d| &employee.department == d);
        let matches_status = self.status.map_or(true, |s| employee.status == s);
        matches_search && matches_department && matches_status
    }
}

/// Dashboard aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Rounded to the nearest whole amount; zero for an empty roster.
    pub average_salary: f64,
}

/// Snapshot consumed by the rendering collaborator.
#[derive(Debug, Clone)]
pub struct RosterSnapshot {
    pub employees: Vec<Employee>,
    pub loading: bool,
}

pub struct RosterService {
    repo: Arc<dyn EmployeeRepository>,
    busy: AtomicBool,
}

/// Clears the busy flag when a mutating call resolves, on every path.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl RosterService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            repo,
            busy: AtomicBool::new(false),
        }
    }

    /// True while a mutating call is in flight; the form disables its
    /// submit control on this flag.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    fn begin_mutation(&self) -> BusyGuard<'_> {
        self.busy.store(true, Ordering::SeqCst);
        BusyGuard(&self.busy)
    }

    pub async fn list(&self, actor: &Identity) -> DomainResult<Vec<Employee>> {
        policy::check(actor.role, Action::ViewAllEmployees)?;
        self.repo.list().await
    }

    pub async fn search(
        &self,
        actor: &Identity,
        query: &EmployeeQuery,
    ) -> DomainResult<Vec<Employee>> {
        let employees = self.list(actor).await?;
        Ok(employees.into_iter().filter(|e| query.matches(e)).collect())
    }

    /// Detail lookup. Absence is `Ok(None)`; a record the actor may not
    /// see is `PermissionDenied`.
    pub async fn get(&self, actor: &Identity, id: &str) -> DomainResult<Option<Employee>> {
        policy::check(actor.role, Action::ViewEmployeeDetail)?;
        match self.repo.get(id).await? {
            Some(employee) if policy::can_view_record(actor, &employee) => Ok(Some(employee)),
            Some(_) => Err(DomainError::PermissionDenied {
                role: actor.role,
                action: Action::ViewEmployeeDetail,
            }),
            None => Ok(None),
        }
    }

    /// The actor's own record, joined on the identity email.
    pub async fn my_record(&self, actor: &Identity) -> DomainResult<Option<Employee>> {
        policy::check(actor.role, Action::ViewOwnProfile)?;
        self.repo.find_by_email(&actor.email).await
    }

    pub async fn create(&self, actor: &Identity, draft: EmployeeDraft) -> DomainResult<Employee> {
        policy::check(actor.role, Action::CreateEmployee)?;
        let _busy = self.begin_mutation();
        let employee = self.repo.create(draft).await?;
        info!(employee_id = %employee.id, by = %actor.email, "Employee created");
        Ok(employee)
    }

    pub async fn update(
        &self,
        actor: &Identity,
        id: &str,
        update: EmployeeUpdate,
    ) -> DomainResult<Employee> {
        policy::check(actor.role, Action::EditEmployee)?;
        let _busy = self.begin_mutation();
        let employee = self.repo.update(id, update).await?;
        info!(employee_id = %employee.id, by = %actor.email, "Employee updated");
        Ok(employee)
    }

    pub async fn delete(&self, actor: &Identity, id: &str) -> DomainResult<()> {
        policy::check(actor.role, Action::DeleteEmployee)?;
        let _busy = self.begin_mutation();
        self.repo.delete(id).await?;
        info!(employee_id = %id, by = %actor.email, "Employee deleted");
        Ok(())
    }

    pub async fn snapshot(&self, actor: &Identity) -> DomainResult<RosterSnapshot> {
        Ok(RosterSnapshot {
            employees: self.list(actor).await?,
            loading: self.is_busy(),
        })
    }

    pub async fn stats(&self, actor: &Identity) -> DomainResult<RosterStats> {
        let employees = self.list(actor).await?;
        let total = employees.len();
        let active = employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::Active)
            .count();
        let inactive = employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::Inactive)
            .count();
        let average_salary = if total == 0 {
            0.0
        } else {
            (employees.iter().map(|e| e.salary).sum::<f64>() / total as f64).round()
        };
        Ok(RosterStats {
            total,
            active,
            inactive,
            average_salary,
        })
    }

    /// Headcount per department, in order of first appearance.
    pub async fn department_distribution(
        &self,
        actor: &Identity,
    ) -> DomainResult<Vec<(String, usize)>> {
        let employees = self.list(actor).await?;
        let mut counts: Vec<(String, usize)> = Vec::new();
        for employee in &employees {
            match counts.iter_mut().find(|(d, _)| d == &employee.department) {
                Some((_, n)) => *n += 1,
                None => counts.push((employee.department.clone(), 1)),
            }
        }
        Ok(counts)
    }

    /// Most recent hires first, capped at `limit`.
    pub async fn recent_hires(&self, actor: &Identity, limit: usize) -> DomainResult<Vec<Employee>> {
        let mut employees = self.list(actor).await?;
        employees.sort_by(|a, b| b.hire_date.cmp(&a.hire_date));
        employees.truncate(limit);
        Ok(employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::domain::{EmergencyContact, Role};
    use crate::infrastructure::InMemoryEmployeeRepository;

    fn actor(role: Role, email: &str) -> Identity {
        Identity {
            id: "t".into(),
            email: email.into(),
            name: "Test".into(),
            role,
        }
    }

    fn service() -> RosterService {
        RosterService::new(Arc::new(InMemoryEmployeeRepository::with_demo_roster()))
    }

    fn draft(email: &str, department: &str, salary: f64) -> EmployeeDraft {
        EmployeeDraft {
            first_name: "Alex".into(),
            last_name: "Smith".into(),
            email: email.into(),
            phone: "(555) 111-2222".into(),
            position: "Accountant".into(),
            department: department.into(),
            salary,
            hire_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            status: EmployeeStatus::Active,
            address: "9 Side St".into(),
            avatar: None,
            emergency_contact: EmergencyContact::default(),
        }
    }

    #[tokio::test]
    async fn hr_may_delete_but_manager_may_not() {
        let roster = service();
        let hr = actor(Role::Hr, "hr@company.com");
        let manager = actor(Role::Manager, "manager@company.com");

        // Attempted directly against the service, not just hidden from a menu.
        let err = roster.delete(&manager, "4").await.unwrap_err();
        assert_eq!(
            err,
            DomainError::PermissionDenied {
                role: Role::Manager,
                action: Action::DeleteEmployee,
            }
        );
        assert_eq!(roster.list(&hr).await.unwrap().len(), 4);

        roster.delete(&hr, "4").await.unwrap();
        assert_eq!(roster.list(&hr).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn employee_cannot_list_or_mutate() {
        let roster = service();
        let me = actor(Role::Employee, "john.doe@company.com");

        assert!(matches!(
            roster.list(&me).await.unwrap_err(),
            DomainError::PermissionDenied { .. }
        ));
        assert!(matches!(
            roster
                .create(&me, draft("x@company.com", "Finance", 1000.0))
                .await
                .unwrap_err(),
            DomainError::PermissionDenied { .. }
        ));
        assert!(matches!(
            roster
                .update(&me, "4", EmployeeUpdate::default())
                .await
                .unwrap_err(),
            DomainError::PermissionDenied { .. }
        ));
    }

    #[tokio::test]
    async fn employee_detail_is_scoped_to_own_record() {
        let roster = service();
        let me = actor(Role::Employee, "john.doe@company.com");

        let own = roster.get(&me, "4").await.unwrap().unwrap();
        assert_eq!(own.email, "john.doe@company.com");

        let err = roster.get(&me, "5").await.unwrap_err();
        assert!(matches!(err, DomainError::PermissionDenied { .. }));

        // Absence stays a value, not an error.
        assert!(roster.get(&me, "no-such-id").await.unwrap().is_none());
        let admin = actor(Role::Admin, "admin@company.com");
        assert!(roster.get(&admin, "no-such-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn my_record_joins_on_identity_email() {
        let roster = service();
        let me = actor(Role::Employee, "john.doe@company.com");
        let record = roster.my_record(&me).await.unwrap().unwrap();
        assert_eq!(record.id, "4");

        let admin = actor(Role::Admin, "admin@company.com");
        assert!(matches!(
            roster.my_record(&admin).await.unwrap_err(),
            DomainError::PermissionDenied { .. }
        ));
    }

    #[tokio::test]
    async fn search_filters_by_term_department_and_status() {
        let roster = service();
        let admin = actor(Role::Admin, "admin@company.com");

        let hits = roster
            .search(
                &admin,
                &EmployeeQuery {
                    search: Some("engineer".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "John");

        let hits = roster
            .search(
                &admin,
                &EmployeeQuery {
                    department: Some("Design".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Mike");

        roster
            .update(
                &admin,
                "7",
                EmployeeUpdate {
                    status: Some(EmployeeStatus::Inactive),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let hits = roster
            .search(
                &admin,
                &EmployeeQuery {
                    status: Some(EmployeeStatus::Inactive),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Emily");
    }

    #[tokio::test]
    async fn stats_and_distribution_match_demo_roster() {
        let roster = service();
        let admin = actor(Role::Admin, "admin@company.com");

        let stats = roster.stats(&admin).await.unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 4);
        assert_eq!(stats.inactive, 0);
        // (75000 + 85000 + 70000 + 60000) / 4
        assert_eq!(stats.average_salary, 72500.0);

        let distribution = roster.department_distribution(&admin).await.unwrap();
        assert_eq!(
            distribution,
            vec![
                ("Engineering".to_string(), 1),
                ("Product".to_string(), 1),
                ("Design".to_string(), 1),
                ("Marketing".to_string(), 1),
            ]
        );
    }

    #[tokio::test]
    async fn stats_on_empty_roster_are_zero() {
        let roster = RosterService::new(Arc::new(InMemoryEmployeeRepository::new()));
        let admin = actor(Role::Admin, "admin@company.com");
        let stats = roster.stats(&admin).await.unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_salary, 0.0);
    }

    #[tokio::test]
    async fn recent_hires_sorts_by_hire_date_descending() {
        let roster = service();
        let admin = actor(Role::Admin, "admin@company.com");
        let hires = roster.recent_hires(&admin, 3).await.unwrap();
        let names: Vec<String> = hires.iter().map(|e| e.first_name.clone()).collect();
        // 2023-03-10 Mike, 2023-01-15 John, 2022-11-05 Emily
        assert_eq!(names, vec!["Mike", "John", "Emily"]);
    }

    #[tokio::test]
    async fn snapshot_reflects_roster_and_idle_flag() {
        let roster = service();
        let admin = actor(Role::Admin, "admin@company.com");
        let snap = roster.snapshot(&admin).await.unwrap();
        assert_eq!(snap.employees.len(), 4);
        assert!(!snap.loading);
    }
}
