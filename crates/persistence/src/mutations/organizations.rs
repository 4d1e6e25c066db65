// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::organizations;
use crate::error::PersistenceError;

backend_fn! {
/// Creates an organization and returns its generated id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_organization(conn: &mut _, name: &str) -> Result<i64, PersistenceError> {
    diesel::insert_into(organizations::table)
        .values(organizations::name.eq(name))
        .execute(conn)?;

    let organization_id: i64 = conn.get_last_insert_rowid()?;

    info!(organization_id, name, "Organization created");

    Ok(organization_id)
}
}
