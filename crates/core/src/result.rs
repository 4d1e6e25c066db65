// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use shift_sched_domain::{DayOfWeek, ShiftAssignment, TimeSlot};

/// Outcome marker carried by every command result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandStatus {
    Success,
    Failed,
}

impl CommandStatus {
    /// Returns the wire label (`"success"` or `"failed"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One shift assignment as reported by a get command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftEntry {
    pub employee_id: i64,
    /// Day label, e.g. `"MONDAY"`.
    pub day_of_week: String,
    /// Day number, 1 = Monday.
    pub day_of_week_number: i32,
    /// Canonical range, e.g. `"09:00–12:00"`.
    pub time_slot: String,
    /// Raw slot value (0, 1 or 2).
    pub time_slot_value: i32,
}

impl From<&ShiftAssignment> for ShiftEntry {
    fn from(assignment: &ShiftAssignment) -> Self {
        Self {
            employee_id: assignment.employee_id,
            day_of_week: assignment.day_of_week.to_string(),
            day_of_week_number: assignment.day_of_week.number(),
            time_slot: assignment.time_slot.time_range().to_string(),
            time_slot_value: assignment.time_slot.value(),
        }
    }
}

/// The uniform result every command produces.
///
/// Echo fields are only populated on successful mutations; `shifts` only on
/// a get. Absent fields are omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shifts: Option<Vec<ShiftEntry>>,
}

impl CommandResult {
    /// A successful result with no echo fields.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: message.into(),
            employee_name: None,
            day_of_week: None,
            time_slot: None,
            shifts: None,
        }
    }

    /// A failed result carrying only a message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Failed,
            ..Self::success(message)
        }
    }

    /// Attaches the mutation echo (employee name, day label, slot range).
    #[must_use]
    pub fn with_echo(
        mut self,
        employee_name: &str,
        day_of_week: DayOfWeek,
        time_slot: TimeSlot,
    ) -> Self {
        self.employee_name = Some(employee_name.to_string());
        self.day_of_week = Some(day_of_week.to_string());
        self.time_slot = Some(time_slot.time_range().to_string());
        self
    }

    /// Attaches a shift listing.
    #[must_use]
    pub fn with_shifts(mut self, shifts: Vec<ShiftEntry>) -> Self {
        self.shifts = Some(shifts);
        self
    }

    /// Returns whether the command succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, CommandStatus::Success)
    }
}
