//! Employee record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Server-assigned identifier.
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// `first_name + " " + last_name`, fixed at construction.
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub salary: Option<i64>,
    /// Only populated for seed data.
    pub age: Option<u32>,
    /// Server-assigned at creation.
    pub contract_hire_date: DateTime<Utc>,
}

/// A validated employee that has not been stored yet.
///
/// Built by [`EmployeePayload::into_new_employee`](crate::model::EmployeePayload::into_new_employee)
/// or directly for seed data. Carries no identifier or hire timestamp: those
/// belong to the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub salary: Option<i64>,
    pub age: Option<u32>,
}

impl NewEmployee {
    /// Create a new employee with the derived full name already set.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        Self {
            full_name: Some(full_name(&first_name, &last_name)),
            first_name,
            last_name,
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    pub fn with_salary(mut self, salary: i64) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Attach the server-owned fields, producing the stored record.
    pub fn into_employee(self, uuid: Uuid, contract_hire_date: DateTime<Utc>) -> Employee {
        Employee {
            uuid,
            first_name: self.first_name,
            last_name: self.last_name,
            full_name: self.full_name,
            email: self.email,
            job_title: self.job_title,
            salary: self.salary,
            age: self.age,
            contract_hire_date,
        }
    }
}

/// Derive the display name from its parts.
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name)
}
