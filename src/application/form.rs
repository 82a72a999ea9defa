//! Employee form — field buffer, validation, submission gate
//!
//! Holds raw text as typed, validates on submit, and converts to a
//! domain draft only once every check passes. Errors live per field
//! and clear as soon as the field is edited again.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use validator::ValidateEmail;

use crate::domain::{
    DomainError, DomainResult, EmergencyContact, Employee, EmployeeDraft, EmployeeStatus,
};

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Position,
    Department,
    Salary,
    HireDate,
    Address,
}

impl FormField {
    pub fn key(&self) -> &'static str {
        match self {
            FormField::FirstName => "first_name",
            FormField::LastName => "last_name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Position => "position",
            FormField::Department => "department",
            FormField::Salary => "salary",
            FormField::HireDate => "hire_date",
            FormField::Address => "address",
        }
    }
}

/// Raw field buffer. Everything the user types stays a string until
/// submission; `salary` and `hire_date` are parsed only after the
/// required checks pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub salary: String,
    pub hire_date: String,
    pub status: EmployeeStatus,
    pub address: String,
    pub avatar: Option<String>,
    pub emergency_name: String,
    pub emergency_phone: String,
    pub emergency_relationship: String,
}

impl EmployeeFormData {
    /// Pre-populate from an existing record for the edit flow.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            salary: employee.salary.to_string(),
            hire_date: employee.hire_date.format("%Y-%m-%d").to_string(),
            status: employee.status,
            address: employee.address.clone(),
            avatar: employee.avatar.clone(),
            emergency_name: employee.emergency_contact.name.clone().unwrap_or_default(),
            emergency_phone: employee.emergency_contact.phone.clone().unwrap_or_default(),
            emergency_relationship: employee
                .emergency_contact
                .relationship
                .clone()
                .unwrap_or_default(),
        }
    }

    /// Run every rule and return the failures keyed by field. An empty
    /// map means the buffer converts cleanly to a draft.
    pub fn validate(&self) -> BTreeMap<&'static str, String> {
        let mut errors = BTreeMap::new();

        if self.first_name.trim().is_empty() {
            errors.insert(FormField::FirstName.key(), "First name is required".into());
        }
        if self.last_name.trim().is_empty() {
            errors.insert(FormField::LastName.key(), "Last name is required".into());
        }
        if self.email.trim().is_empty() {
            errors.insert(FormField::Email.key(), "Email is required".into());
        } else if !is_valid_email(&self.email) {
            errors.insert(FormField::Email.key(), "Email is invalid".into());
        }
        if self.phone.trim().is_empty() {
            errors.insert(FormField::Phone.key(), "Phone is required".into());
        }
        if self.position.trim().is_empty() {
            errors.insert(FormField::Position.key(), "Position is required".into());
        }
        if self.department.trim().is_empty() {
            errors.insert(FormField::Department.key(), "Department is required".into());
        }
        if self.salary.trim().is_empty() {
            errors.insert(FormField::Salary.key(), "Salary is required".into());
        } else if !matches!(self.salary.trim().parse::<f64>(), Ok(n) if n.is_finite() && n > 0.0) {
            errors.insert(
                FormField::Salary.key(),
                "Salary must be a positive number".into(),
            );
        }
        if self.hire_date.trim().is_empty() {
            errors.insert(FormField::HireDate.key(), "Hire date is required".into());
        } else if parse_hire_date(&self.hire_date).is_none() {
            errors.insert(FormField::HireDate.key(), "Hire date is invalid".into());
        }
        if self.address.trim().is_empty() {
            errors.insert(FormField::Address.key(), "Address is required".into());
        }

        errors
    }

    /// Validation as a fallible conversion, for callers that want a
    /// single error instead of the per-field map.
    pub fn validated_draft(&self) -> DomainResult<EmployeeDraft> {
        let errors = self.validate();
        if let Some((field, message)) = errors.into_iter().next() {
            return Err(DomainError::Validation(format!("{field}: {message}")));
        }
        self.to_draft()
            .ok_or_else(|| DomainError::Validation("form did not convert to a draft".into()))
    }

    /// Convert to a draft. `None` if any field fails to parse; call
    /// `validate` first to surface errors to the user.
    pub fn to_draft(&self) -> Option<EmployeeDraft> {
        let salary = self.salary.trim().parse::<f64>().ok()?;
        if !salary.is_finite() || salary <= 0.0 {
            return None;
        }
        let hire_date = parse_hire_date(&self.hire_date)?;

        let optional = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        Some(EmployeeDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            position: self.position.trim().to_string(),
            department: self.department.trim().to_string(),
            salary,
            hire_date,
            status: self.status,
            address: self.address.trim().to_string(),
            avatar: self.avatar.clone(),
            emergency_contact: EmergencyContact {
                name: optional(&self.emergency_name),
                phone: optional(&self.emergency_phone),
                relationship: optional(&self.emergency_relationship),
            },
        })
    }
}

/// Email shape check: the usual mailbox syntax, with the extra
/// requirement of a dotted domain so bare hostnames are rejected.
fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let dotted_domain = email
        .rsplit_once('@')
        .map(|(_, domain)| domain.contains('.'))
        .unwrap_or(false);
    email.validate_email() && dotted_domain
}

fn parse_hire_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Form controller: buffer, error map, and the saving latch that
/// blocks re-submission while a save is in flight.
#[derive(Debug, Default)]
pub struct EmployeeForm {
    data: EmployeeFormData,
    errors: BTreeMap<&'static str, String>,
    saving: bool,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefill(employee: &Employee) -> Self {
        Self {
            data: EmployeeFormData::from_employee(employee),
            errors: BTreeMap::new(),
            saving: false,
        }
    }

    pub fn data(&self) -> &EmployeeFormData {
        &self.data
    }

    /// Overwrite one text field. Any standing error on that field is
    /// cleared immediately; other fields keep theirs until the next
    /// submit.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::FirstName => self.data.first_name = value,
            FormField::LastName => self.data.last_name = value,
            FormField::Email => self.data.email = value,
            FormField::Phone => self.data.phone = value,
            FormField::Position => self.data.position = value,
            FormField::Department => self.data.department = value,
            FormField::Salary => self.data.salary = value,
            FormField::HireDate => self.data.hire_date = value,
            FormField::Address => self.data.address = value,
        }
        self.errors.remove(field.key());
    }

    pub fn set_status(&mut self, status: EmployeeStatus) {
        self.data.status = status;
    }

    pub fn set_emergency_contact(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        relationship: impl Into<String>,
    ) {
        self.data.emergency_name = name.into();
        self.data.emergency_phone = phone.into();
        self.data.emergency_relationship = relationship.into();
    }

    /// Re-run all rules, replacing the error map wholesale.
    pub fn validate(&mut self) -> bool {
        self.errors = self.data.validate();
        self.errors.is_empty()
    }

    /// Gate submission: `None` while a save is already in flight or
    /// when validation fails, otherwise the draft with the saving
    /// latch set. The caller reports the outcome via `save_finished`.
    pub fn submit(&mut self) -> Option<EmployeeDraft> {
        if self.saving {
            return None;
        }
        if !self.validate() {
            return None;
        }
        let draft = self.data.to_draft()?;
        self.saving = true;
        Some(draft)
    }

    /// Release the saving latch once the save settles, success or not.
    pub fn save_finished(&mut self) {
        self.saving = false;
    }

    pub fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }
}
