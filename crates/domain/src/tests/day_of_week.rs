// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DayOfWeek, DomainError};

#[test]
fn test_all_days_construct_from_their_number() {
    for (index, day) in DayOfWeek::ALL.into_iter().enumerate() {
        let number: i32 = i32::try_from(index).unwrap() + 1;
        assert_eq!(DayOfWeek::from_number(number).unwrap(), day);
        assert_eq!(day.number(), number);
    }
}

#[test]
fn test_monday_is_one() {
    assert_eq!(DayOfWeek::from_number(1).unwrap(), DayOfWeek::Monday);
    assert_eq!(DayOfWeek::from_number(7).unwrap(), DayOfWeek::Sunday);
}

#[test]
fn test_out_of_range_days_rejected() {
    for value in [0, 8, -1, 42] {
        assert_eq!(
            DayOfWeek::from_number(value),
            Err(DomainError::InvalidDayOfWeek { value })
        );
    }
}

#[test]
fn test_day_labels() {
    assert_eq!(DayOfWeek::Monday.to_string(), "MONDAY");
    assert_eq!(DayOfWeek::Sunday.as_str(), "SUNDAY");
}

#[test]
fn test_days_order_monday_first() {
    assert!(DayOfWeek::Monday < DayOfWeek::Tuesday);
    assert!(DayOfWeek::Saturday < DayOfWeek::Sunday);
}
