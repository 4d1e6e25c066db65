// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_sched_domain::ShiftAssignment;
use tracing::debug;

use crate::command::Command;
use crate::result::{CommandResult, ShiftEntry};
use crate::store::SchedulingStore;

/// Lists every shift assignment of an organization.
///
/// An organization without assignments (or one the store has never heard
/// of) yields a successful result with an empty list.
pub struct GetShiftCmd<'a, S: SchedulingStore> {
    store: &'a mut S,
    organization_id: i64,
}

impl<'a, S: SchedulingStore> GetShiftCmd<'a, S> {
    /// Creates a new get command.
    pub const fn new(store: &'a mut S, organization_id: i64) -> Self {
        Self {
            store,
            organization_id,
        }
    }
}

impl<S: SchedulingStore> Command for GetShiftCmd<'_, S> {
    type Error = S::Error;

    fn execute(self) -> Result<CommandResult, Self::Error> {
        let mut assignments: Vec<ShiftAssignment> = self.store.get_shifts(self.organization_id)?;
        assignments.sort_by_key(|a| (a.day_of_week, a.time_slot, a.employee_id));

        debug!(
            organization_id = self.organization_id,
            count = assignments.len(),
            "Retrieved shifts"
        );

        let shifts: Vec<ShiftEntry> = assignments.iter().map(ShiftEntry::from).collect();
        Ok(CommandResult::success("Shifts retrieved successfully").with_shifts(shifts))
    }
}
