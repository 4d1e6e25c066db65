// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::collections::HashMap;
use std::sync::Mutex;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::{Value, json};
use shift_sched::SchedulingStore;
use shift_sched_domain::{DayOfWeek, Employee, ShiftAssignment, TimeSlot};
use shift_sched_persistence::Persistence;

use crate::{
    EmployeeRegistry, NewEmployee, RegistrationOutcome, RegistryEmployee, RegistryError,
    SeedData, SeedOrganization, SeededOrganization, seed,
};

/// In-memory registry standing in for the external service.
#[derive(Default)]
pub struct FakeRegistry {
    /// Registry records by id; `None` is a record without a name.
    pub employees: HashMap<String, Option<String>>,
    pub organizations: HashMap<String, Value>,
    /// Status reported for every registration; 200 when `None`.
    pub registration_status: Option<i64>,
    pub unreachable: bool,
    pub registered: Mutex<Vec<NewEmployee>>,
}

impl FakeRegistry {
    pub fn with_employee(mut self, eid: &str, name: &str) -> Self {
        self.employees.insert(eid.to_string(), Some(name.to_string()));
        self
    }

    pub fn with_nameless_employee(mut self, eid: &str) -> Self {
        self.employees.insert(eid.to_string(), None);
        self
    }

    pub fn with_organization(mut self, cid: &str, document: Value) -> Self {
        self.organizations.insert(cid.to_string(), document);
        self
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }
}

impl EmployeeRegistry for FakeRegistry {
    fn employee_info<'a>(
        &'a self,
        employee_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<RegistryEmployee>, RegistryError>> {
        async move {
            if self.unreachable {
                return Err(RegistryError::Transport(String::from("connection refused")));
            }
            Ok(self
                .employees
                .get(employee_id)
                .map(|name| RegistryEmployee { name: name.clone() }))
        }
        .boxed()
    }

    fn register_employee<'a>(
        &'a self,
        employee: &'a NewEmployee,
    ) -> BoxFuture<'a, Result<RegistrationOutcome, RegistryError>> {
        async move {
            if self.unreachable {
                return Err(RegistryError::Transport(String::from("connection refused")));
            }
            self.registered.lock().unwrap().push(employee.clone());
            Ok(RegistrationOutcome {
                status: self.registration_status.unwrap_or(200),
                message: json!(format!("Employee {} added", employee.name)),
            })
        }
        .boxed()
    }

    fn organization_info<'a>(
        &'a self,
        client_id: &'a str,
    ) -> BoxFuture<'a, Result<Value, RegistryError>> {
        async move {
            if self.unreachable {
                return Err(RegistryError::Transport(String::from("connection refused")));
            }
            self.organizations
                .get(client_id)
                .cloned()
                .ok_or(RegistryError::UnexpectedStatus { status: 404 })
        }
        .boxed()
    }
}

/// Store whose every call fails, standing in for a broken database.
pub struct BrokenStore;

#[derive(Debug)]
pub struct BrokenStoreError;

impl std::fmt::Display for BrokenStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "disk I/O error at /var/lib/shift-sched/shifts.db")
    }
}

impl std::error::Error for BrokenStoreError {}

impl SchedulingStore for BrokenStore {
    type Error = BrokenStoreError;

    fn get_employee(
        &mut self,
        _organization_id: i64,
        _employee_id: i64,
    ) -> Result<Option<Employee>, Self::Error> {
        Err(BrokenStoreError)
    }

    fn add_shift(
        &mut self,
        _organization_id: i64,
        _employee_id: i64,
        _day_of_week: DayOfWeek,
        _time_slot: TimeSlot,
    ) -> Result<bool, Self::Error> {
        Err(BrokenStoreError)
    }

    fn remove_shift(
        &mut self,
        _organization_id: i64,
        _employee_id: i64,
        _day_of_week: DayOfWeek,
        _time_slot: TimeSlot,
    ) -> Result<bool, Self::Error> {
        Err(BrokenStoreError)
    }

    fn get_shifts(&mut self, _organization_id: i64) -> Result<Vec<ShiftAssignment>, Self::Error> {
        Err(BrokenStoreError)
    }
}

/// Returns an in-memory store with one seeded organization of two employees.
pub fn create_seeded_store() -> (Persistence, SeededOrganization) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let data: SeedData = SeedData {
        organizations: vec![SeedOrganization {
            name: String::from("Corner Bakery"),
            employees: vec![String::from("Ada Lovelace"), String::from("Grace Hopper")],
        }],
    };
    let mut seeded: Vec<SeededOrganization> = seed(&mut persistence, &data).unwrap();
    (persistence, seeded.remove(0))
}
