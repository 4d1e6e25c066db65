// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_sched_domain::{DayOfWeek, TimeSlot};

use crate::tests::helpers::{InMemoryStore, TestStoreError, UnavailableStore, create_test_store};
use crate::{AddShiftCmd, Command, CommandResult, CommandStatus, RemoveShiftCmd};

#[test]
fn test_remove_existing_shift_succeeds() {
    let mut store: InMemoryStore = create_test_store();
    AddShiftCmd::new(&mut store, 7, 4, DayOfWeek::Sunday, TimeSlot::Evening)
        .execute()
        .unwrap();

    let result: CommandResult =
        RemoveShiftCmd::new(&mut store, 7, 4, DayOfWeek::Sunday, TimeSlot::Evening)
            .execute()
            .unwrap();

    assert_eq!(result.status, CommandStatus::Success);
    assert_eq!(result.message, "Shift removed successfully");
    assert_eq!(result.employee_name.as_deref(), Some("Grace Hopper"));
    assert_eq!(result.day_of_week.as_deref(), Some("SUNDAY"));
    assert_eq!(result.time_slot.as_deref(), Some("18:00–21:00"));
    assert!(store.shifts.is_empty());
}

#[test]
fn test_remove_never_added_shift_fails() {
    let mut store: InMemoryStore = create_test_store();
    AddShiftCmd::new(&mut store, 7, 3, DayOfWeek::Monday, TimeSlot::Morning)
        .execute()
        .unwrap();

    let result: CommandResult =
        RemoveShiftCmd::new(&mut store, 7, 3, DayOfWeek::Monday, TimeSlot::Evening)
            .execute()
            .unwrap();

    assert_eq!(result.status, CommandStatus::Failed);
    assert_eq!(
        result.message,
        "Failed to remove shift - shift might not exist"
    );
    assert_eq!(store.shifts.len(), 1);
}

#[test]
fn test_remove_shift_unknown_employee_fails() {
    let mut store: InMemoryStore = create_test_store();

    let result: CommandResult =
        RemoveShiftCmd::new(&mut store, 7, 42, DayOfWeek::Monday, TimeSlot::Morning)
            .execute()
            .unwrap();

    assert_eq!(result.status, CommandStatus::Failed);
    assert_eq!(result.message, "Employee not found");
}

#[test]
fn test_remove_shift_propagates_store_failure() {
    let mut store: UnavailableStore = UnavailableStore;

    let result: Result<CommandResult, TestStoreError> =
        RemoveShiftCmd::new(&mut store, 7, 3, DayOfWeek::Monday, TimeSlot::Morning).execute();

    assert!(result.is_err());
}
