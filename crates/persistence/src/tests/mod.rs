// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod shift_tests;

use crate::Persistence;

/// Returns a fresh in-memory store holding one organization with two
/// employees, as `(persistence, organization_id, [first_id, second_id])`.
pub fn create_seeded_persistence() -> (Persistence, i64, [i64; 2]) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let organization_id: i64 = persistence.create_organization("Acme Bakery").unwrap();
    let first: i64 = persistence
        .create_employee(organization_id, "Ada Lovelace")
        .unwrap();
    let second: i64 = persistence
        .create_employee(organization_id, "Grace Hopper")
        .unwrap();
    (persistence, organization_id, [first, second])
}
