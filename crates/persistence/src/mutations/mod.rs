// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! Mutations use Diesel DSL only. Generated ids are read back through the
//! `PersistenceBackend` trait.

pub mod employees;
pub mod organizations;
pub mod shifts;

pub use employees::create_employee_sqlite;
pub use organizations::create_organization_sqlite;
pub use shifts::{delete_shift_sqlite, insert_shift_sqlite};

#[cfg(feature = "mysql")]
pub use employees::create_employee_mysql;
#[cfg(feature = "mysql")]
pub use organizations::create_organization_mysql;
#[cfg(feature = "mysql")]
pub use shifts::{delete_shift_mysql, insert_shift_mysql};
