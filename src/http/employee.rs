//! Employee endpoints under `/api/v1/employee`.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::model::{Employee, EmployeePayload};

/// `GET /api/v1/employee`
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.store.list_all().map_err(|e| {
        tracing::error!(error = %e, "Failed to list employees");
        ApiError::from(e)
    })?;

    tracing::debug!(count = employees.len(), "Listed employees");
    Ok(Json(employees))
}

/// `GET /api/v1/employee/{id}`
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    // Reject bad identifiers before touching the store.
    let id = Uuid::parse_str(&id).map_err(|e| {
        tracing::warn!(employee_id = %id, error = %e, "Invalid employee id");
        ApiError::BadRequest(format!("Invalid employee id {:?}: {}", id, e))
    })?;

    match state.store.get_by_id(id)? {
        Some(employee) => Ok(Json(employee)),
        None => {
            tracing::debug!(employee_id = %id, "Employee not found");
            Err(ApiError::NotFound("Employee not found".to_string()))
        }
    }
}

/// `POST /api/v1/employee`
pub async fn create_employee(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let new = EmployeePayload::from_slice(&body)
        .and_then(EmployeePayload::into_new_employee)
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected employee request");
            ApiError::from(e)
        })?;

    let employee = state.store.create(new)?;

    tracing::info!(
        employee_id = %employee.uuid,
        full_name = employee.full_name.as_deref().unwrap_or_default(),
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)))
}
