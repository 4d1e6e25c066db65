// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, parse_hire_date, validate_employee_name, validate_organization_name};

#[test]
fn test_employee_name_must_not_be_blank() {
    assert!(validate_employee_name("Ada Lovelace").is_ok());
    assert!(matches!(
        validate_employee_name("   "),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_organization_name_must_not_be_empty() {
    assert!(validate_organization_name("Acme").is_ok());
    assert!(matches!(
        validate_organization_name(""),
        Err(DomainError::InvalidOrganizationName(_))
    ));
}

#[test]
fn test_parse_hire_date() {
    let date: time::Date = parse_hire_date("2024-03-15").unwrap();
    assert_eq!(date.year(), 2024);
    assert_eq!(date.month(), time::Month::March);
    assert_eq!(date.day(), 15);
}

#[test]
fn test_parse_hire_date_rejects_garbage() {
    let err: DomainError = parse_hire_date("15/03/2024").unwrap_err();
    assert!(matches!(err, DomainError::DateParseError { .. }));
    assert!(parse_hire_date("2024-02-30").is_err());
}
