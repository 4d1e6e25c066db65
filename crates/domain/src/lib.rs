// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod day_of_week;
mod error;
mod time_slot;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use day_of_week::DayOfWeek;
pub use error::DomainError;
pub use time_slot::TimeSlot;
pub use types::{Employee, Organization, ShiftAssignment};
pub use validation::{parse_hire_date, validate_employee_name, validate_organization_name};
