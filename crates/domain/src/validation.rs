// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;
use time::macros::format_description;

/// Validates an employee display name.
///
/// # Errors
///
/// Returns an error if the name is empty or whitespace only.
pub fn validate_employee_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates an organization display name.
///
/// # Errors
///
/// Returns an error if the name is empty or whitespace only.
pub fn validate_organization_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidOrganizationName(String::from(
            "Organization name cannot be empty",
        )));
    }
    Ok(())
}

/// Parses a hire date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid calendar date.
pub fn parse_hire_date(date_string: &str) -> Result<Date, DomainError> {
    Date::parse(date_string, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: date_string.to_string(),
            error: e.to_string(),
        }
    })
}
