// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_sched_persistence::Persistence;

use crate::tests::helpers::create_seeded_store;
use crate::{ApiError, SeedData, SeedOrganization, decode_organization_id, seed};

#[test]
fn test_seed_creates_organization_and_employees() {
    let (_, seeded) = create_seeded_store();

    assert_eq!(seeded.organization.name, "Corner Bakery");
    assert_eq!(
        decode_organization_id(&seeded.cid),
        Ok(seeded.organization.organization_id)
    );
    let names: Vec<&str> = seeded.employees.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["Ada Lovelace", "Grace Hopper"]);
}

#[test]
fn test_seed_rejects_blank_names_before_writing() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let data: SeedData = SeedData {
        organizations: vec![
            SeedOrganization {
                name: String::from("Valid Org"),
                employees: vec![String::from("Ada Lovelace")],
            },
            SeedOrganization {
                name: String::from("Second Org"),
                employees: vec![String::from("   ")],
            },
        ],
    };

    let result = seed(&mut persistence, &data);

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
    assert_eq!(persistence.get_organization(1).unwrap(), None);
}

#[test]
fn test_seed_document_parses_without_employees() {
    let data: SeedData =
        serde_json::from_str(r#"{"organizations": [{"name": "Empty Shop"}]}"#).unwrap();
    assert!(data.organizations[0].employees.is_empty());
}
