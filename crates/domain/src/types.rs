// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::day_of_week::DayOfWeek;
use crate::time_slot::TimeSlot;
use serde::{Deserialize, Serialize};

/// A client organization that owns employees and their shift assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// The numeric identifier assigned by the store.
    pub organization_id: i64,
    /// The display name.
    pub name: String,
}

impl Organization {
    /// Creates a new `Organization`.
    #[must_use]
    pub const fn new(organization_id: i64, name: String) -> Self {
        Self {
            organization_id,
            name,
        }
    }
}

/// An employee belonging to exactly one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee identifier, unique within the organization.
    pub employee_id: i64,
    /// The owning organization.
    pub organization_id: i64,
    /// The employee's display name.
    pub name: String,
}

impl Employee {
    /// Creates a new `Employee`.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The employee identifier
    /// * `organization_id` - The owning organization
    /// * `name` - The display name
    #[must_use]
    pub const fn new(employee_id: i64, organization_id: i64, name: String) -> Self {
        Self {
            employee_id,
            organization_id,
            name,
        }
    }

    /// Returns the employee's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A recurring weekly commitment of one employee to one day/slot pair.
///
/// At most one assignment exists per `(organization_id, employee_id,
/// day_of_week, time_slot)`. The store enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub organization_id: i64,
    pub employee_id: i64,
    pub day_of_week: DayOfWeek,
    pub time_slot: TimeSlot,
}

impl ShiftAssignment {
    /// Creates a new `ShiftAssignment`.
    #[must_use]
    pub const fn new(
        organization_id: i64,
        employee_id: i64,
        day_of_week: DayOfWeek,
        time_slot: TimeSlot,
    ) -> Self {
        Self {
            organization_id,
            employee_id,
            day_of_week,
            time_slot,
        }
    }
}
