// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee lookups.

use diesel::prelude::*;
use shift_sched_domain::Employee;
use tracing::debug;

use crate::diesel_schema::employees;
use crate::error::PersistenceError;

/// Diesel Queryable struct for employee rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = employees)]
struct EmployeeRow {
    employee_id: i64,
    organization_id: i64,
    name: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self::new(row.employee_id, row.organization_id, row.name)
    }
}

backend_fn! {
/// Retrieves an employee scoped to an organization.
///
/// An employee id that exists under a different organization is reported
/// as absent.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `organization_id` - The organization the employee must belong to
/// * `employee_id` - The employee to look up
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_employee(
    conn: &mut _,
    organization_id: i64,
    employee_id: i64,
) -> Result<Option<Employee>, PersistenceError> {
    debug!(organization_id, employee_id, "Looking up employee");

    let row: Option<EmployeeRow> = employees::table
        .filter(employees::organization_id.eq(organization_id))
        .filter(employees::employee_id.eq(employee_id))
        .select(EmployeeRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(Employee::from))
}
}

backend_fn! {
/// Lists the employees of an organization ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_employees(
    conn: &mut _,
    organization_id: i64,
) -> Result<Vec<Employee>, PersistenceError> {
    let rows: Vec<EmployeeRow> = employees::table
        .filter(employees::organization_id.eq(organization_id))
        .order(employees::employee_id.asc())
        .select(EmployeeRow::as_select())
        .load(conn)?;

    debug!(organization_id, count = rows.len(), "Listed employees");

    Ok(rows.into_iter().map(Employee::from).collect())
}
}
