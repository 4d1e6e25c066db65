// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! Every query is generated per backend (`_sqlite` / `_mysql` suffix) and
//! dispatched by the `Persistence` adapter in `lib.rs`.

pub mod employees;
pub mod organizations;
pub mod shifts;

pub use employees::{get_employee_sqlite, list_employees_sqlite};
pub use organizations::get_organization_sqlite;
pub use shifts::get_shifts_sqlite;

#[cfg(feature = "mysql")]
pub use employees::{get_employee_mysql, list_employees_mysql};
#[cfg(feature = "mysql")]
pub use organizations::get_organization_mysql;
#[cfg(feature = "mysql")]
pub use shifts::get_shifts_mysql;
