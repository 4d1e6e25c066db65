// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift assignment storage and the command layer running against it.

use shift_sched::{AddShiftCmd, Command, CommandResult, GetShiftCmd, RemoveShiftCmd, SchedulingStore};
use shift_sched_domain::{DayOfWeek, ShiftAssignment, TimeSlot};

use crate::tests::create_seeded_persistence;

#[test]
fn test_add_shift_inserts_once() {
    let (mut persistence, organization_id, [employee_id, _]) = create_seeded_persistence();

    let first: bool = persistence
        .add_shift(organization_id, employee_id, DayOfWeek::Monday, TimeSlot::Morning)
        .unwrap();
    let second: bool = persistence
        .add_shift(organization_id, employee_id, DayOfWeek::Monday, TimeSlot::Morning)
        .unwrap();

    assert!(first);
    assert!(!second, "unique constraint must reject the duplicate");
    assert_eq!(persistence.get_shifts(organization_id).unwrap().len(), 1);
}

#[test]
fn test_add_shift_for_missing_employee_returns_false() {
    let (mut persistence, organization_id, _) = create_seeded_persistence();

    let added: bool = persistence
        .add_shift(organization_id, 9_999, DayOfWeek::Friday, TimeSlot::Evening)
        .unwrap();

    assert!(!added);
}

#[test]
fn test_remove_shift_reports_whether_a_row_was_deleted() {
    let (mut persistence, organization_id, [employee_id, _]) = create_seeded_persistence();
    persistence
        .add_shift(organization_id, employee_id, DayOfWeek::Sunday, TimeSlot::Afternoon)
        .unwrap();

    let removed: bool = persistence
        .remove_shift(organization_id, employee_id, DayOfWeek::Sunday, TimeSlot::Afternoon)
        .unwrap();
    let removed_again: bool = persistence
        .remove_shift(organization_id, employee_id, DayOfWeek::Sunday, TimeSlot::Afternoon)
        .unwrap();

    assert!(removed);
    assert!(!removed_again);
    assert!(persistence.get_shifts(organization_id).unwrap().is_empty());
}

#[test]
fn test_remove_only_touches_matching_key() {
    let (mut persistence, organization_id, [first, second]) = create_seeded_persistence();
    persistence
        .add_shift(organization_id, first, DayOfWeek::Tuesday, TimeSlot::Morning)
        .unwrap();
    persistence
        .add_shift(organization_id, second, DayOfWeek::Tuesday, TimeSlot::Morning)
        .unwrap();

    persistence
        .remove_shift(organization_id, first, DayOfWeek::Tuesday, TimeSlot::Morning)
        .unwrap();

    let remaining: Vec<ShiftAssignment> = persistence.get_shifts(organization_id).unwrap();
    assert_eq!(
        remaining,
        vec![ShiftAssignment::new(
            organization_id,
            second,
            DayOfWeek::Tuesday,
            TimeSlot::Morning
        )]
    );
}

#[test]
fn test_get_shifts_orders_by_day_slot_employee() {
    let (mut persistence, organization_id, [first, second]) = create_seeded_persistence();
    persistence
        .add_shift(organization_id, second, DayOfWeek::Saturday, TimeSlot::Morning)
        .unwrap();
    persistence
        .add_shift(organization_id, second, DayOfWeek::Monday, TimeSlot::Evening)
        .unwrap();
    persistence
        .add_shift(organization_id, second, DayOfWeek::Monday, TimeSlot::Morning)
        .unwrap();
    persistence
        .add_shift(organization_id, first, DayOfWeek::Monday, TimeSlot::Morning)
        .unwrap();

    let shifts: Vec<(i64, DayOfWeek, TimeSlot)> = persistence
        .get_shifts(organization_id)
        .unwrap()
        .into_iter()
        .map(|s| (s.employee_id, s.day_of_week, s.time_slot))
        .collect();

    assert_eq!(
        shifts,
        vec![
            (first, DayOfWeek::Monday, TimeSlot::Morning),
            (second, DayOfWeek::Monday, TimeSlot::Morning),
            (second, DayOfWeek::Monday, TimeSlot::Evening),
            (second, DayOfWeek::Saturday, TimeSlot::Morning),
        ]
    );
}

#[test]
fn test_get_shifts_for_unknown_organization_is_empty() {
    let (mut persistence, _, _) = create_seeded_persistence();
    assert!(persistence.get_shifts(31_337).unwrap().is_empty());
}

#[test]
fn test_commands_against_database_store() {
    let (mut persistence, organization_id, [employee_id, _]) = create_seeded_persistence();

    let added: CommandResult = AddShiftCmd::new(
        &mut persistence,
        organization_id,
        employee_id,
        DayOfWeek::Wednesday,
        TimeSlot::Afternoon,
    )
    .execute()
    .unwrap();
    assert!(added.is_success());
    assert_eq!(added.employee_name.as_deref(), Some("Ada Lovelace"));

    let duplicate: CommandResult = AddShiftCmd::new(
        &mut persistence,
        organization_id,
        employee_id,
        DayOfWeek::Wednesday,
        TimeSlot::Afternoon,
    )
    .execute()
    .unwrap();
    assert_eq!(
        duplicate.message,
        "Failed to add shift - slot might already be filled"
    );

    let listed: CommandResult = GetShiftCmd::new(&mut persistence, organization_id)
        .execute()
        .unwrap();
    assert_eq!(listed.shifts.map(|s| s.len()), Some(1));

    let removed: CommandResult = RemoveShiftCmd::new(
        &mut persistence,
        organization_id,
        employee_id,
        DayOfWeek::Wednesday,
        TimeSlot::Afternoon,
    )
    .execute()
    .unwrap();
    assert!(removed.is_success());
}
