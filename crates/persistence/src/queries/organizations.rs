// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use shift_sched_domain::Organization;
use tracing::debug;

use crate::diesel_schema::organizations;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = organizations)]
struct OrganizationRow {
    organization_id: i64,
    name: String,
}

backend_fn! {
/// Retrieves an organization by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the organization does not exist.
pub fn get_organization(
    conn: &mut _,
    organization_id: i64,
) -> Result<Option<Organization>, PersistenceError> {
    debug!(organization_id, "Looking up organization");

    let row: Option<OrganizationRow> = organizations::table
        .filter(organizations::organization_id.eq(organization_id))
        .select(OrganizationRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|r| Organization::new(r.organization_id, r.name)))
}
}
