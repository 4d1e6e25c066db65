// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_sched_domain::{DayOfWeek, Employee, TimeSlot};
use tracing::{debug, info};

use crate::EMPLOYEE_NOT_FOUND;
use crate::command::Command;
use crate::result::CommandResult;
use crate::store::SchedulingStore;

/// Assigns an employee to a recurring weekly day/slot.
///
/// Uniqueness is the store's job: a second add for the same key is rejected
/// by the store and surfaces as a failed result.
pub struct AddShiftCmd<'a, S: SchedulingStore> {
    store: &'a mut S,
    organization_id: i64,
    employee_id: i64,
    day_of_week: DayOfWeek,
    time_slot: TimeSlot,
}

impl<'a, S: SchedulingStore> AddShiftCmd<'a, S> {
    /// Creates a new add command.
    ///
    /// # Arguments
    ///
    /// * `store` - The store handle the command runs against
    /// * `organization_id` - The decoded organization id
    /// * `employee_id` - The employee to schedule
    /// * `day_of_week` - The validated day
    /// * `time_slot` - The validated slot
    pub const fn new(
        store: &'a mut S,
        organization_id: i64,
        employee_id: i64,
        day_of_week: DayOfWeek,
        time_slot: TimeSlot,
    ) -> Self {
        Self {
            store,
            organization_id,
            employee_id,
            day_of_week,
            time_slot,
        }
    }
}

impl<S: SchedulingStore> Command for AddShiftCmd<'_, S> {
    type Error = S::Error;

    fn execute(self) -> Result<CommandResult, Self::Error> {
        let employee: Option<Employee> = self
            .store
            .get_employee(self.organization_id, self.employee_id)?;
        let Some(employee) = employee else {
            debug!(
                organization_id = self.organization_id,
                employee_id = self.employee_id,
                "Add shift rejected: employee not found"
            );
            return Ok(CommandResult::failed(EMPLOYEE_NOT_FOUND));
        };

        let added: bool = self.store.add_shift(
            self.organization_id,
            self.employee_id,
            self.day_of_week,
            self.time_slot,
        )?;

        if !added {
            debug!(
                organization_id = self.organization_id,
                employee_id = self.employee_id,
                day = %self.day_of_week,
                slot = self.time_slot.value(),
                "Add shift rejected by store"
            );
            return Ok(CommandResult::failed(
                "Failed to add shift - slot might already be filled",
            ));
        }

        info!(
            organization_id = self.organization_id,
            employee_id = self.employee_id,
            day = %self.day_of_week,
            slot = self.time_slot.value(),
            "Shift added"
        );

        Ok(CommandResult::success("Shift added successfully").with_echo(
            employee.name(),
            self.day_of_week,
            self.time_slot,
        ))
    }
}
