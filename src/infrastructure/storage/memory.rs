//! In-memory roster repository

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    DomainError, DomainResult, Employee, EmployeeDraft, EmployeeRepository, EmployeeStatus,
    EmployeeUpdate, EmergencyContact,
};

/// In-memory roster for the mock scope and for tests.
///
/// A `Vec` rather than a map: `list()` must return records in insertion
/// order.
pub struct InMemoryEmployeeRepository {
    records: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Repository pre-seeded with the demo roster.
    pub fn with_demo_roster() -> Self {
        Self {
            records: RwLock::new(demo_roster()),
        }
    }
}

impl Default for InMemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn list(&self) -> DomainResult<Vec<Employee>> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: &str) -> DomainResult<Option<Employee>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Employee>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|e| e.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, draft: EmployeeDraft) -> DomainResult<Employee> {
        let mut records = self.records.write().await;
        if records
            .iter()
            .any(|e| e.email.eq_ignore_ascii_case(&draft.email))
        {
            return Err(DomainError::Conflict(format!(
                "Employee with email {} already exists",
                draft.email
            )));
        }
        let employee = draft.into_employee(Uuid::new_v4().to_string());
        records.push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: &str, update: EmployeeUpdate) -> DomainResult<Employee> {
        let mut records = self.records.write().await;
        if let Some(new_email) = &update.email {
            if records
                .iter()
                .any(|e| e.id != id && e.email.eq_ignore_ascii_case(new_email))
            {
                return Err(DomainError::Conflict(format!(
                    "Employee with email {new_email} already exists"
                )));
            }
        }
        let Some(record) = records.iter_mut().find(|e| e.id == id) else {
            return Err(DomainError::NotFound {
                entity: "Employee",
                field: "id",
                value: id.to_string(),
            });
        };
        record.merge(update);
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|e| e.id != id);
        if records.len() == before {
            return Err(DomainError::NotFound {
                entity: "Employee",
                field: "id",
                value: id.to_string(),
            });
        }
        Ok(())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

/// Demo roster matching the mock identity directory; ids line up with
/// the employee-role identities so the self-service path resolves.
pub fn demo_roster() -> Vec<Employee> {
    vec![
        Employee {
            id: "4".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@company.com".into(),
            phone: "(555) 123-4567".into(),
            position: "Software Engineer".into(),
            department: "Engineering".into(),
            salary: 75000.0,
            hire_date: date(2023, 1, 15),
            status: EmployeeStatus::Active,
            address: "123 Main St, City, State 12345".into(),
            avatar: Some(
                "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=150"
                    .into(),
            ),
            emergency_contact: EmergencyContact {
                name: Some("Jane Doe".into()),
                phone: Some("(555) 987-6543".into()),
                relationship: Some("Spouse".into()),
            },
        },
        Employee {
            id: "5".into(),
            first_name: "Sarah".into(),
            last_name: "Johnson".into(),
            email: "sarah.johnson@company.com".into(),
            phone: "(555) 234-5678".into(),
            position: "Product Manager".into(),
            department: "Product".into(),
            salary: 85000.0,
            hire_date: date(2022, 8, 22),
            status: EmployeeStatus::Active,
            address: "456 Oak Ave, City, State 12345".into(),
            avatar: Some(
                "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150"
                    .into(),
            ),
            emergency_contact: EmergencyContact {
                name: Some("Mike Johnson".into()),
                phone: Some("(555) 876-5432".into()),
                relationship: Some("Brother".into()),
            },
        },
        Employee {
            id: "6".into(),
            first_name: "Mike".into(),
            last_name: "Chen".into(),
            email: "mike.chen@company.com".into(),
            phone: "(555) 345-6789".into(),
            position: "UX Designer".into(),
            department: "Design".into(),
            salary: 70000.0,
            hire_date: date(2023, 3, 10),
            status: EmployeeStatus::Active,
            address: "789 Pine St, City, State 12345".into(),
            avatar: Some(
                "https://images.pexels.com/photos/1040880/pexels-photo-1040880.jpeg?auto=compress&cs=tinysrgb&w=150"
                    .into(),
            ),
            emergency_contact: EmergencyContact {
                name: Some("Lisa Chen".into()),
                phone: Some("(555) 765-4321".into()),
                relationship: Some("Mother".into()),
            },
        },
        Employee {
            id: "7".into(),
            first_name: "Emily".into(),
            last_name: "Davis".into(),
            email: "emily.davis@company.com".into(),
            phone: "(555) 456-7890".into(),
            position: "Marketing Specialist".into(),
            department: "Marketing".into(),
            salary: 60000.0,
            hire_date: date(2022, 11, 5),
            status: EmployeeStatus::Active,
            address: "321 Elm St, City, State 12345".into(),
            avatar: Some(
                "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=150"
                    .into(),
            ),
            emergency_contact: EmergencyContact {
                name: Some("Tom Davis".into()),
                phone: Some("(555) 654-3210".into()),
                relationship: Some("Father".into()),
            },
        },
    ]
}
