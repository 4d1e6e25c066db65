// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift assignment queries.

use diesel::prelude::*;
use shift_sched_domain::{DayOfWeek, ShiftAssignment, TimeSlot};
use tracing::debug;

use crate::diesel_schema::shift_assignments;
use crate::error::PersistenceError;

/// Diesel Queryable struct for the key columns of a shift assignment.
#[derive(Queryable, Selectable)]
#[diesel(table_name = shift_assignments)]
struct ShiftAssignmentRow {
    organization_id: i64,
    employee_id: i64,
    day_of_week: i32,
    time_slot: i32,
}

impl TryFrom<ShiftAssignmentRow> for ShiftAssignment {
    type Error = PersistenceError;

    fn try_from(row: ShiftAssignmentRow) -> Result<Self, Self::Error> {
        let day_of_week: DayOfWeek = DayOfWeek::from_number(row.day_of_week)
            .map_err(|e| PersistenceError::CorruptRecord(e.to_string()))?;
        let time_slot: TimeSlot = TimeSlot::from_value(row.time_slot)
            .map_err(|e| PersistenceError::CorruptRecord(e.to_string()))?;
        Ok(Self::new(
            row.organization_id,
            row.employee_id,
            day_of_week,
            time_slot,
        ))
    }
}

backend_fn! {
/// Lists every shift assignment of an organization.
///
/// Rows come back ordered by day, then slot, then employee id.
///
/// # Errors
///
/// Returns an error if the query fails or a stored day/slot value is out
/// of range.
pub fn get_shifts(
    conn: &mut _,
    organization_id: i64,
) -> Result<Vec<ShiftAssignment>, PersistenceError> {
    let rows: Vec<ShiftAssignmentRow> = shift_assignments::table
        .filter(shift_assignments::organization_id.eq(organization_id))
        .order((
            shift_assignments::day_of_week.asc(),
            shift_assignments::time_slot.asc(),
            shift_assignments::employee_id.asc(),
        ))
        .select(ShiftAssignmentRow::as_select())
        .load(conn)?;

    debug!(organization_id, count = rows.len(), "Loaded shift assignments");

    rows.into_iter().map(ShiftAssignment::try_from).collect()
}
}
