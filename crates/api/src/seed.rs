// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bootstrap seeding of organizations and employees.
//!
//! The server can load a JSON document at startup so a fresh database has
//! organizations and employees to schedule:
//!
//! ```json
//! { "organizations": [ { "name": "Acme", "employees": ["Ada Lovelace"] } ] }
//! ```

use serde::{Deserialize, Serialize};
use shift_sched_domain::{
    Employee, Organization, validate_employee_name, validate_organization_name,
};
use shift_sched_persistence::Persistence;
use tracing::info;

use crate::codec::encode_organization_id;
use crate::error::{ApiError, translate_domain_error};

/// Seed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    pub organizations: Vec<SeedOrganization>,
}

/// One organization and the names of its employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedOrganization {
    pub name: String,
    #[serde(default)]
    pub employees: Vec<String>,
}

/// What was created for one seeded organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededOrganization {
    pub organization: Organization,
    /// The opaque id clients use as `cid`.
    pub cid: String,
    pub employees: Vec<Employee>,
}

/// Creates every organization and employee in `data`.
///
/// All names are validated before anything is written.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank name, or `Internal` if a write fails.
pub fn seed(
    persistence: &mut Persistence,
    data: &SeedData,
) -> Result<Vec<SeededOrganization>, ApiError> {
    for organization in &data.organizations {
        validate_organization_name(&organization.name).map_err(translate_domain_error)?;
        for name in &organization.employees {
            validate_employee_name(name).map_err(translate_domain_error)?;
        }
    }

    let mut seeded: Vec<SeededOrganization> = Vec::with_capacity(data.organizations.len());
    for entry in &data.organizations {
        let organization_id: i64 = persistence.create_organization(entry.name.trim())?;
        for name in &entry.employees {
            persistence.create_employee(organization_id, name.trim())?;
        }

        let organization: Organization = persistence
            .get_organization(organization_id)?
            .ok_or_else(|| ApiError::Internal {
                message: format!("Organization {organization_id} missing after creation"),
            })?;
        let employees: Vec<Employee> = persistence.list_employees(organization_id)?;
        let cid: String = encode_organization_id(organization_id);

        info!(
            organization_id,
            cid = %cid,
            employees = employees.len(),
            "Seeded organization"
        );

        seeded.push(SeededOrganization {
            organization,
            cid,
            employees,
        });
    }

    Ok(seeded)
}
