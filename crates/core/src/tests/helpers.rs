// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeSet, HashMap};

use shift_sched_domain::{DayOfWeek, Employee, ShiftAssignment, TimeSlot};

use crate::SchedulingStore;

/// Error raised by the test stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestStoreError(pub String);

impl std::fmt::Display for TestStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "test store error: {}", self.0)
    }
}

impl std::error::Error for TestStoreError {}

/// Set-backed store with the same uniqueness semantics as the database.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    employees: HashMap<(i64, i64), Employee>,
    pub shifts: BTreeSet<ShiftAssignment>,
}

impl InMemoryStore {
    pub fn with_employee(mut self, organization_id: i64, employee_id: i64, name: &str) -> Self {
        self.employees.insert(
            (organization_id, employee_id),
            Employee::new(employee_id, organization_id, name.to_string()),
        );
        self
    }
}

impl SchedulingStore for InMemoryStore {
    type Error = TestStoreError;

    fn get_employee(
        &mut self,
        organization_id: i64,
        employee_id: i64,
    ) -> Result<Option<Employee>, Self::Error> {
        Ok(self.employees.get(&(organization_id, employee_id)).cloned())
    }

    fn add_shift(
        &mut self,
        organization_id: i64,
        employee_id: i64,
        day_of_week: DayOfWeek,
        time_slot: TimeSlot,
    ) -> Result<bool, Self::Error> {
        Ok(self.shifts.insert(ShiftAssignment::new(
            organization_id,
            employee_id,
            day_of_week,
            time_slot,
        )))
    }

    fn remove_shift(
        &mut self,
        organization_id: i64,
        employee_id: i64,
        day_of_week: DayOfWeek,
        time_slot: TimeSlot,
    ) -> Result<bool, Self::Error> {
        Ok(self.shifts.remove(&ShiftAssignment::new(
            organization_id,
            employee_id,
            day_of_week,
            time_slot,
        )))
    }

    fn get_shifts(&mut self, organization_id: i64) -> Result<Vec<ShiftAssignment>, Self::Error> {
        Ok(self
            .shifts
            .iter()
            .filter(|s| s.organization_id == organization_id)
            .copied()
            .collect())
    }
}

/// Store whose every call fails, standing in for a lost connection.
pub struct UnavailableStore;

impl SchedulingStore for UnavailableStore {
    type Error = TestStoreError;

    fn get_employee(&mut self, _: i64, _: i64) -> Result<Option<Employee>, Self::Error> {
        Err(TestStoreError(String::from("connection lost")))
    }

    fn add_shift(&mut self, _: i64, _: i64, _: DayOfWeek, _: TimeSlot) -> Result<bool, Self::Error> {
        Err(TestStoreError(String::from("connection lost")))
    }

    fn remove_shift(
        &mut self,
        _: i64,
        _: i64,
        _: DayOfWeek,
        _: TimeSlot,
    ) -> Result<bool, Self::Error> {
        Err(TestStoreError(String::from("connection lost")))
    }

    fn get_shifts(&mut self, _: i64) -> Result<Vec<ShiftAssignment>, Self::Error> {
        Err(TestStoreError(String::from("connection lost")))
    }
}

pub fn create_test_store() -> InMemoryStore {
    InMemoryStore::default()
        .with_employee(7, 3, "Ada Lovelace")
        .with_employee(7, 4, "Grace Hopper")
        .with_employee(8, 1, "Alan Turing")
}
