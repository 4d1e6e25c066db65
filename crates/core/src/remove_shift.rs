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

/// Removes one recurring weekly assignment.
///
/// Removing an assignment that does not exist is reported as a failure,
/// even though the persisted state is the same either way.
pub struct RemoveShiftCmd<'a, S: SchedulingStore> {
    store: &'a mut S,
    organization_id: i64,
    employee_id: i64,
    day_of_week: DayOfWeek,
    time_slot: TimeSlot,
}

impl<'a, S: SchedulingStore> RemoveShiftCmd<'a, S> {
    /// Creates a new remove command.
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

impl<S: SchedulingStore> Command for RemoveShiftCmd<'_, S> {
    type Error = S::Error;

    fn execute(self) -> Result<CommandResult, Self::Error> {
        let employee: Option<Employee> = self
            .store
            .get_employee(self.organization_id, self.employee_id)?;
        let Some(employee) = employee else {
            debug!(
                organization_id = self.organization_id,
                employee_id = self.employee_id,
                "Remove shift rejected: employee not found"
            );
            return Ok(CommandResult::failed(EMPLOYEE_NOT_FOUND));
        };

        let removed: bool = self.store.remove_shift(
            self.organization_id,
            self.employee_id,
            self.day_of_week,
            self.time_slot,
        )?;

        if !removed {
            return Ok(CommandResult::failed(
                "Failed to remove shift - shift might not exist",
            ));
        }

        info!(
            organization_id = self.organization_id,
            employee_id = self.employee_id,
            day = %self.day_of_week,
            slot = self.time_slot.value(),
            "Shift removed"
        );

        Ok(CommandResult::success("Shift removed successfully").with_echo(
            employee.name(),
            self.day_of_week,
            self.time_slot,
        ))
    }
}
