// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift scheduling command layer.
//!
//! Every scheduling operation is a value built with everything it needs,
//! including an explicit handle to a [`SchedulingStore`], and run once via
//! [`Command::execute`]. Negative outcomes (unknown employee, occupied slot,
//! missing shift) come back as a failed [`CommandResult`]. Only store
//! infrastructure errors propagate as `Err`.

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

mod add_shift;
mod command;
mod get_shift;
mod remove_shift;
mod result;
mod store;

#[cfg(test)]
mod tests;

pub use add_shift::AddShiftCmd;
pub use command::Command;
pub use get_shift::GetShiftCmd;
pub use remove_shift::RemoveShiftCmd;
pub use result::{CommandResult, CommandStatus, ShiftEntry};
pub use store::SchedulingStore;

/// Message used by mutating commands when the employee lookup comes back empty.
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";
