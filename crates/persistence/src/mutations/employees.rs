// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::employees;
use crate::error::PersistenceError;

backend_fn! {
/// Creates an employee under an organization and returns the generated id.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `organization_id` - The owning organization
/// * `name` - The employee's display name
///
/// # Errors
///
/// Returns `ConstraintViolation` if the organization does not exist, or
/// another error if the insert fails.
pub fn create_employee(
    conn: &mut _,
    organization_id: i64,
    name: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(employees::table)
        .values((
            employees::organization_id.eq(organization_id),
            employees::name.eq(name),
        ))
        .execute(conn)?;

    let employee_id: i64 = conn.get_last_insert_rowid()?;

    info!(organization_id, employee_id, "Employee created");

    Ok(employee_id)
}
}
