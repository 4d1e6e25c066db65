// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names follow the public query-parameter contract (`cid`,
//! `employeeId`, `dayOfWeek`, ...).

use serde::{Deserialize, Serialize};
use shift_sched::CommandStatus;

/// Parameters of the add and remove shift operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRequest {
    /// Opaque organization id.
    pub cid: String,
    pub employee_id: i64,
    /// Raw day number, validated into a `DayOfWeek`.
    pub day_of_week: i32,
    /// Raw slot value, validated into a `TimeSlot`.
    pub time_slot: i32,
}

/// An opaque organization id, as taken by `getShift` and `getOrgInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationQuery {
    pub cid: String,
}

/// Login credentials checked against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Registry employee id.
    pub eid: String,
    /// Name that must match the registry record exactly.
    pub name: String,
}

/// Registration form for a new employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub department_id: i64,
    /// `YYYY-MM-DD`.
    pub hire_date: String,
    pub position: String,
}

/// Status-and-message body shared by login, registration and every failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: CommandStatus,
    pub message: String,
}

impl StatusResponse {
    /// A success body.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: message.into(),
        }
    }

    /// A failure body.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Failed,
            message: message.into(),
        }
    }
}
