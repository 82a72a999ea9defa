//! Employee record types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Terminated,
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
            EmployeeStatus::Terminated => "terminated",
        }
    }
}

/// Emergency contact details. All fields optional; the form leaves
/// them blank when not provided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

/// A row in the managed roster. The repository exclusively owns the
/// collection; consumers only ever receive cloned snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub status: EmployeeStatus,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub emergency_contact: EmergencyContact,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Image URL for display. Falls back to a generated placeholder
    /// templated from the name when no avatar is set.
    pub fn avatar_url(&self) -> String {
        self.avatar.clone().unwrap_or_else(|| {
            format!(
                "https://ui-avatars.com/api/?name={}+{}&background=random",
                self.first_name, self.last_name
            )
        })
    }

    /// Shallow-merge the provided fields over this record. Fields absent
    /// from the update are preserved.
    pub fn merge(&mut self, update: EmployeeUpdate) {
        if let Some(v) = update.first_name {
            self.first_name = v;
        }
        if let Some(v) = update.last_name {
            self.last_name = v;
        }
        if let Some(v) = update.email {
            self.email = v;
        }
        if let Some(v) = update.phone {
            self.phone = v;
        }
        if let Some(v) = update.position {
            self.position = v;
        }
        if let Some(v) = update.department {
            self.department = v;
        }
        if let Some(v) = update.salary {
            self.salary = v;
        }
        if let Some(v) = update.hire_date {
            self.hire_date = v;
        }
        if let Some(v) = update.status {
            self.status = v;
        }
        if let Some(v) = update.address {
            self.address = v;
        }
        if let Some(v) = update.avatar {
            self.avatar = Some(v);
        }
        if let Some(v) = update.emergency_contact {
            self.emergency_contact = v;
        }
    }
}

/// An unsaved, validated record pending creation. The repository assigns
/// the id.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub status: EmployeeStatus,
    pub address: String,
    pub avatar: Option<String>,
    pub emergency_contact: EmergencyContact,
}

impl EmployeeDraft {
    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            position: self.position,
            department: self.department,
            salary: self.salary,
            hire_date: self.hire_date,
            status: self.status,
            address: self.address,
            avatar: self.avatar,
            emergency_contact: self.emergency_contact,
        }
    }
}

/// Partial update for an existing record. `None` leaves the field as-is.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<NaiveDate>,
    pub status: Option<EmployeeStatus>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
}

impl From<EmployeeDraft> for EmployeeUpdate {
    /// Wholesale replacement, as the edit form submits every field.
    fn from(draft: EmployeeDraft) -> Self {
        Self {
            first_name: Some(draft.first_name),
            last_name: Some(draft.last_name),
            email: Some(draft.email),
            phone: Some(draft.phone),
            position: Some(draft.position),
            department: Some(draft.department),
            salary: Some(draft.salary),
            hire_date: Some(draft.hire_date),
            status: Some(draft.status),
            address: Some(draft.address),
            avatar: draft.avatar,
            emergency_contact: Some(draft.emergency_contact),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: "4".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@company.com".into(),
            phone: "(555) 123-4567".into(),
            position: "Software Engineer".into(),
            department: "Engineering".into(),
            salary: 75000.0,
            hire_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            status: EmployeeStatus::Active,
            address: "123 Main St".into(),
            avatar: None,
            emergency_contact: EmergencyContact::default(),
        }
    }

    #[test]
    fn merge_preserves_absent_fields() {
        let mut emp = sample();
        emp.merge(EmployeeUpdate {
            position: Some("Senior Software Engineer".into()),
            salary: Some(90000.0),
            ..Default::default()
        });
        assert_eq!(emp.position, "Senior Software Engineer");
        assert_eq!(emp.salary, 90000.0);
        assert_eq!(emp.first_name, "John");
        assert_eq!(emp.status, EmployeeStatus::Active);
    }

    #[test]
    fn avatar_falls_back_to_placeholder() {
        let mut emp = sample();
        assert!(emp.avatar_url().contains("ui-avatars.com"));
        assert!(emp.avatar_url().contains("John+Doe"));
        emp.avatar = Some("https://example.com/a.jpg".into());
        assert_eq!(emp.avatar_url(), "https://example.com/a.jpg");
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["hireDate"], "2023-01-15");
        assert_eq!(json["status"], "active");
    }
}
