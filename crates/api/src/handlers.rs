// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary operations.
//!
//! Shift operations decode the organization id, validate day and slot,
//! and run the matching command against any [`SchedulingStore`]. Store
//! faults become [`ApiError::Internal`]; a negative command outcome is
//! returned as a failed [`CommandResult`], not an error.

use serde_json::Value;
use shift_sched::{AddShiftCmd, Command, CommandResult, GetShiftCmd, RemoveShiftCmd, SchedulingStore};
use shift_sched_domain::{DayOfWeek, TimeSlot, parse_hire_date, validate_employee_name};
use time::Date;
use tracing::{error, info, warn};

use crate::codec::decode_organization_id;
use crate::error::{ApiError, translate_domain_error};
use crate::registry::{
    EmployeeRegistry, NewEmployee, RegistrationOutcome, RegistryEmployee, RegistryError,
};
use crate::request_response::{
    LoginRequest, OrganizationQuery, RegisterEmployeeRequest, ShiftRequest, StatusResponse,
};

/// Client-facing text for store failures; the cause is only logged.
const STORE_FAILURE_MESSAGE: &str = "An internal error occurred";

fn store_error<E: std::error::Error>(err: &E) -> ApiError {
    error!(error = %err, "Scheduling store failure");
    ApiError::Internal {
        message: String::from(STORE_FAILURE_MESSAGE),
    }
}

/// Validates the raw parameters of an add or remove request.
fn parse_shift_request(request: &ShiftRequest) -> Result<(i64, DayOfWeek, TimeSlot), ApiError> {
    let organization_id: i64 = decode_organization_id(&request.cid)?;
    let day_of_week: DayOfWeek =
        DayOfWeek::from_number(request.day_of_week).map_err(translate_domain_error)?;
    let time_slot: TimeSlot =
        TimeSlot::from_value(request.time_slot).map_err(translate_domain_error)?;
    Ok((organization_id, day_of_week, time_slot))
}

/// Assigns an employee to a weekly shift.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed `cid`, day or slot, and
/// `Internal` if the store fails.
pub fn add_shift<S: SchedulingStore>(
    store: &mut S,
    request: &ShiftRequest,
) -> Result<CommandResult, ApiError> {
    let (organization_id, day_of_week, time_slot) = parse_shift_request(request)?;

    AddShiftCmd::new(
        store,
        organization_id,
        request.employee_id,
        day_of_week,
        time_slot,
    )
    .execute()
    .map_err(|e| store_error(&e))
}

/// Lists an organization's shift assignments.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed `cid` and `Internal` if the
/// store fails.
pub fn get_shift<S: SchedulingStore>(
    store: &mut S,
    request: &OrganizationQuery,
) -> Result<CommandResult, ApiError> {
    let organization_id: i64 = decode_organization_id(&request.cid)?;

    GetShiftCmd::new(store, organization_id)
        .execute()
        .map_err(|e| store_error(&e))
}

/// Removes an employee from a weekly shift.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed `cid`, day or slot, and
/// `Internal` if the store fails.
pub fn remove_shift<S: SchedulingStore>(
    store: &mut S,
    request: &ShiftRequest,
) -> Result<CommandResult, ApiError> {
    let (organization_id, day_of_week, time_slot) = parse_shift_request(request)?;

    RemoveShiftCmd::new(
        store,
        organization_id,
        request.employee_id,
        day_of_week,
        time_slot,
    )
    .execute()
    .map_err(|e| store_error(&e))
}

/// Checks an employee id and name against the registry.
///
/// # Errors
///
/// - `ResourceNotFound` if the registry does not know the id
/// - `AuthenticationFailed` if the name does not match exactly
/// - `Internal` if the registry cannot be reached
pub async fn login(
    registry: &dyn EmployeeRegistry,
    request: &LoginRequest,
) -> Result<StatusResponse, ApiError> {
    let employee: Option<RegistryEmployee> =
        registry.employee_info(&request.eid).await.map_err(|e| {
            error!(error = %e, eid = %request.eid, "Registry lookup failed during login");
            ApiError::Internal {
                message: String::from("An error occurred while logging in"),
            }
        })?;

    let Some(employee) = employee else {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: String::from("Employee ID does not exist"),
        });
    };

    if employee.name.as_deref() != Some(request.name.as_str()) {
        warn!(eid = %request.eid, "Login rejected: name mismatch");
        return Err(ApiError::AuthenticationFailed {
            reason: String::from("Employee name does not match"),
        });
    }

    info!(eid = %request.eid, "Employee logged in");
    Ok(StatusResponse::success(format!(
        "Logged in as {}",
        request.name
    )))
}

/// Registers a new employee with the registry.
///
/// # Errors
///
/// - `InvalidInput` for a blank name, an unparseable hire date, or a
///   registry rejection
/// - `Internal` if the registry cannot be reached
pub async fn register_employee(
    registry: &dyn EmployeeRegistry,
    request: &RegisterEmployeeRequest,
) -> Result<StatusResponse, ApiError> {
    let name: String = format!("{} {}", request.first_name.trim(), request.last_name.trim());
    validate_employee_name(&name).map_err(translate_domain_error)?;
    let hire_date: Date = parse_hire_date(&request.hire_date).map_err(translate_domain_error)?;

    let employee: NewEmployee = NewEmployee {
        name,
        department_id: request.department_id,
        hire_date,
        position: request.position.clone(),
    };

    let outcome: RegistrationOutcome =
        registry.register_employee(&employee).await.map_err(|e| {
            error!(error = %e, "Registry call failed during registration");
            ApiError::Internal {
                message: String::from("An error occurred while registering the employee"),
            }
        })?;

    if !outcome.is_accepted() {
        warn!(status = outcome.status, "Registry rejected registration");
        return Err(ApiError::InvalidInput {
            field: String::from("employee"),
            message: String::from("Failed to register new employee"),
        });
    }

    info!(department_id = employee.department_id, "Employee registered");
    let message: String = match outcome.message {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    };
    Ok(StatusResponse::success(message))
}

/// Fetches the registry's organization document for a client id.
///
/// # Errors
///
/// - `Internal` if the registry cannot be reached
/// - `InvalidInput` carrying any other registry failure
pub async fn get_organization_info(
    registry: &dyn EmployeeRegistry,
    request: &OrganizationQuery,
) -> Result<Value, ApiError> {
    registry
        .organization_info(&request.cid)
        .await
        .map_err(|e| match &e {
            RegistryError::Transport(_) => {
                error!(error = %e, "Registry unreachable during organization lookup");
                ApiError::Internal {
                    message: String::from("An error occurred while fetching organization info"),
                }
            }
            _ => ApiError::InvalidInput {
                field: String::from("cid"),
                message: e.to_string(),
            },
        })
}
