// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for shift-sched.
//!
//! Turns raw boundary input (opaque client ids, integer day and slot
//! values, registration fields) into validated domain values, runs the
//! scheduling commands, and talks to the external employee registry.
//! Transport concerns (status codes, routing) belong to the server.

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
#![allow(clippy::multiple_crate_versions)]

mod codec;
mod error;
mod handlers;
mod registry;
mod request_response;
mod seed;

#[cfg(test)]
mod tests;

pub use codec::{CodecError, decode, decode_organization_id, encode_organization_id};
pub use error::{ApiError, translate_domain_error};
pub use handlers::{
    add_shift, get_organization_info, get_shift, login, register_employee, remove_shift,
};
pub use registry::{
    EmployeeRegistry, HttpEmployeeRegistry, NewEmployee, RegistrationOutcome, RegistryEmployee,
    RegistryError,
};
pub use request_response::{
    LoginRequest, OrganizationQuery, RegisterEmployeeRequest, ShiftRequest, StatusResponse,
};
pub use seed::{SeedData, SeedOrganization, SeededOrganization, seed};

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
