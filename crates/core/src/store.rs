// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_sched_domain::{DayOfWeek, Employee, ShiftAssignment, TimeSlot};

/// The persistence operations the command layer depends on.
///
/// Commands issue an existence check and a mutation as two separate calls,
/// so implementations must make each mutation atomic on its own: `add_shift`
/// needs unique-insert semantics on `(organization, employee, day, slot)`
/// and `remove_shift` needs found-and-delete semantics. Concurrent callers
/// for the same key must never produce a duplicate assignment.
pub trait SchedulingStore {
    /// Infrastructure failure (connectivity, corrupt rows, ...).
    type Error: std::error::Error;

    /// Looks up an employee within an organization.
    ///
    /// # Errors
    ///
    /// Returns an error only on infrastructure failure. An unknown employee is `Ok(None)`.
    fn get_employee(
        &mut self,
        organization_id: i64,
        employee_id: i64,
    ) -> Result<Option<Employee>, Self::Error>;

    /// Inserts a shift assignment.
    ///
    /// Returns `Ok(false)` when the assignment already exists or the insert
    /// is otherwise rejected by a constraint.
    ///
    /// # Errors
    ///
    /// Returns an error only on infrastructure failure.
    fn add_shift(
        &mut self,
        organization_id: i64,
        employee_id: i64,
        day_of_week: DayOfWeek,
        time_slot: TimeSlot,
    ) -> Result<bool, Self::Error>;

    /// Removes a shift assignment.
    ///
    /// Returns `Ok(false)` when no such assignment existed.
    ///
    /// # Errors
    ///
    /// Returns an error only on infrastructure failure.
    fn remove_shift(
        &mut self,
        organization_id: i64,
        employee_id: i64,
        day_of_week: DayOfWeek,
        time_slot: TimeSlot,
    ) -> Result<bool, Self::Error>;

    /// Lists every shift assignment of an organization, possibly none.
    ///
    /// # Errors
    ///
    /// Returns an error only on infrastructure failure.
    fn get_shifts(&mut self, organization_id: i64) -> Result<Vec<ShiftAssignment>, Self::Error>;
}
