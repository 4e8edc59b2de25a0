//! Create-request payload decoding and validation.
//!
//! The body is decoded in one typed step: it must be a JSON object, every
//! recognized field is optional, and anything else in the object is ignored.
//! Semantic checks happen afterwards in [`EmployeePayload::into_new_employee`].

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::employee::{full_name, NewEmployee};

/// Errors produced while turning a request body into a [`NewEmployee`].
#[derive(Debug, Error, PartialEq)]
pub enum PayloadError {
    /// Empty body or a literal JSON `null`.
    #[error("Employee request body is null")]
    NullBody,

    /// Body is not valid JSON, is not an object, or a field has the wrong type.
    #[error("Malformed employee request body: {0}")]
    Malformed(String),

    /// A required name field is absent.
    #[error("Employee request is missing {field}")]
    MissingName { field: &'static str },

    /// A required name field is empty after trimming.
    #[error("Employee request {field} must not be blank")]
    BlankName { field: &'static str },
}

/// Wire shape of a create request.
///
/// Client-supplied `uuid`, `fullName`, `age` and `contractHireDate` are not
/// part of this type and are dropped during decoding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    /// Kept only when the wire value is a number.
    #[serde(default, deserialize_with = "lenient_salary")]
    pub salary: Option<i64>,
}

impl EmployeePayload {
    /// Decode a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, PayloadError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(PayloadError::NullBody);
        }

        // Decoding into a map first rejects arrays, which serde would
        // otherwise accept positionally for a struct.
        let object: Option<Map<String, Value>> = serde_json::from_slice(body)
            .map_err(|e| PayloadError::Malformed(e.to_string()))?;
        let object = object.ok_or(PayloadError::NullBody)?;

        serde_json::from_value(Value::Object(object))
            .map_err(|e| PayloadError::Malformed(e.to_string()))
    }

    /// Validate the payload and build the employee to store.
    pub fn into_new_employee(self) -> Result<NewEmployee, PayloadError> {
        let first_name = required_name(self.first_name, "firstName")?;
        let last_name = required_name(self.last_name, "lastName")?;

        Ok(NewEmployee {
            full_name: Some(full_name(&first_name, &last_name)),
            first_name,
            last_name,
            email: self.email,
            job_title: self.job_title,
            salary: self.salary,
            age: None,
        })
    }
}

fn required_name(value: Option<String>, field: &'static str) -> Result<String, PayloadError> {
    match value {
        None => Err(PayloadError::MissingName { field }),
        Some(v) if v.trim().is_empty() => Err(PayloadError::BlankName { field }),
        Some(v) => Ok(v),
    }
}

/// Accept any JSON value for salary; keep it only if it is numeric.
/// Fractions are truncated toward zero.
fn lenient_salary<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    })
}
