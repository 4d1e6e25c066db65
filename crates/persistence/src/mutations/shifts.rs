// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift assignment mutations.
//!
//! Uniqueness of `(organization, employee, day, slot)` is enforced by the
//! table's unique constraint, so a concurrent duplicate insert loses at the
//! database rather than in a read-then-write check.

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{debug, info};

use crate::diesel_schema::shift_assignments;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a shift assignment.
///
/// Returns `Ok(false)` when the key already exists or references a missing
/// employee or organization.
///
/// # Errors
///
/// Returns an error for any other database failure.
pub fn insert_shift(
    conn: &mut _,
    organization_id: i64,
    employee_id: i64,
    day_of_week: i32,
    time_slot: i32,
) -> Result<bool, PersistenceError> {
    let inserted: Result<usize, DieselError> = diesel::insert_into(shift_assignments::table)
        .values((
            shift_assignments::organization_id.eq(organization_id),
            shift_assignments::employee_id.eq(employee_id),
            shift_assignments::day_of_week.eq(day_of_week),
            shift_assignments::time_slot.eq(time_slot),
        ))
        .execute(conn);

    match inserted {
        Ok(rows) => {
            info!(organization_id, employee_id, day_of_week, time_slot, "Shift assignment inserted");
            Ok(rows == 1)
        }
        Err(DieselError::DatabaseError(
            kind @ (DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::ForeignKeyViolation),
            details,
        )) => {
            debug!(
                organization_id,
                employee_id,
                day_of_week,
                time_slot,
                ?kind,
                reason = details.message(),
                "Shift assignment insert rejected"
            );
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
}

backend_fn! {
/// Deletes a shift assignment in a single statement.
///
/// Returns `Ok(false)` when no row matched.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_shift(
    conn: &mut _,
    organization_id: i64,
    employee_id: i64,
    day_of_week: i32,
    time_slot: i32,
) -> Result<bool, PersistenceError> {
    let deleted: usize = diesel::delete(
        shift_assignments::table
            .filter(shift_assignments::organization_id.eq(organization_id))
            .filter(shift_assignments::employee_id.eq(employee_id))
            .filter(shift_assignments::day_of_week.eq(day_of_week))
            .filter(shift_assignments::time_slot.eq(time_slot)),
    )
    .execute(conn)?;

    if deleted > 0 {
        info!(organization_id, employee_id, day_of_week, time_slot, "Shift assignment deleted");
    } else {
        debug!(organization_id, employee_id, day_of_week, time_slot, "No shift assignment to delete");
    }

    Ok(deleted > 0)
}
}
