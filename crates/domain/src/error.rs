// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The raw value does not name one of the three time slots.
    InvalidTimeSlot {
        /// The rejected value.
        value: i32,
    },
    /// The raw value is not a day number between 1 and 7.
    InvalidDayOfWeek {
        /// The rejected value.
        value: i32,
    },
    /// Employee name is empty or invalid.
    InvalidName(String),
    /// Organization name is empty or invalid.
    InvalidOrganizationName(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeSlot { value } => {
                write!(f, "Invalid time slot value: {value}. Must be 0, 1, or 2")
            }
            Self::InvalidDayOfWeek { value } => {
                write!(
                    f,
                    "Invalid day of week: {value}. Must be between 1 (Monday) and 7 (Sunday)"
                )
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidOrganizationName(msg) => write!(f, "Invalid organization name: {msg}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
