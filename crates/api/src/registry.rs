// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client for the external employee registry.
//!
//! The registry owns employee identity and organization documents. Login
//! and registration are delegated to it; this crate never stores its data.

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use time::Date;
use tracing::{debug, warn};

/// Failures talking to the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The request could not be sent or the response could not be read.
    #[error("Registry request failed: {0}")]
    Transport(String),

    /// The registry answered with a status this client does not handle.
    #[error("Registry responded with status {status}")]
    UnexpectedStatus {
        /// The HTTP status code.
        status: u16,
    },

    /// The registry body is not the expected JSON document.
    #[error("Registry returned an invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Employee record as returned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistryEmployee {
    /// The employee's full name. Records without one never match a login.
    #[serde(default)]
    pub name: Option<String>,
}

/// A new employee to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    /// Full name, `"{first} {last}"`.
    pub name: String,
    pub department_id: i64,
    pub hire_date: Date,
    pub position: String,
}

/// The registry's verdict on a registration.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationOutcome {
    /// Status reported in the body, falling back to the HTTP status.
    pub status: i64,
    /// The registry's message, passed through as-is.
    pub message: Value,
}

impl RegistrationOutcome {
    /// Returns whether the registry accepted the employee.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.status == 200
    }
}

/// Operations the boundary needs from the employee registry.
///
/// Object safe so the server can hold an `Arc<dyn EmployeeRegistry>` and
/// tests can substitute an in-memory fake.
pub trait EmployeeRegistry: Send + Sync {
    /// Looks up an employee; `Ok(None)` when the registry does not know the id.
    fn employee_info<'a>(
        &'a self,
        employee_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<RegistryEmployee>, RegistryError>>;

    /// Registers a new employee.
    fn register_employee<'a>(
        &'a self,
        employee: &'a NewEmployee,
    ) -> BoxFuture<'a, Result<RegistrationOutcome, RegistryError>>;

    /// Fetches the organization document for a client id.
    fn organization_info<'a>(
        &'a self,
        client_id: &'a str,
    ) -> BoxFuture<'a, Result<Value, RegistryError>>;
}

/// [`EmployeeRegistry`] over HTTP.
///
/// Endpoints, relative to the base URL:
/// - `GET /getEmpInfo?eid=`
/// - `POST /addNewEmp` (form: `name`, `departmentId`, `hireDate`, `position`)
/// - `GET /getOrgInfo?cid=`
#[derive(Debug, Clone)]
pub struct HttpEmployeeRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEmployeeRegistry {
    /// Creates a client for the registry at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

impl EmployeeRegistry for HttpEmployeeRegistry {
    fn employee_info<'a>(
        &'a self,
        employee_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<RegistryEmployee>, RegistryError>> {
        async move {
            let response: reqwest::Response = self
                .client
                .get(self.url("getEmpInfo"))
                .query(&[("eid", employee_id)])
                .send()
                .await?;

            let status: reqwest::StatusCode = response.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                debug!(employee_id, "Registry does not know employee");
                return Ok(None);
            }
            if !status.is_success() {
                warn!(employee_id, status = status.as_u16(), "Registry lookup failed");
                return Err(RegistryError::UnexpectedStatus {
                    status: status.as_u16(),
                });
            }

            let body: String = response.text().await?;
            if body.trim().is_empty() {
                return Ok(None);
            }
            serde_json::from_str::<RegistryEmployee>(&body)
                .map(Some)
                .map_err(|e| RegistryError::InvalidResponse(e.to_string()))
        }
        .boxed()
    }

    fn register_employee<'a>(
        &'a self,
        employee: &'a NewEmployee,
    ) -> BoxFuture<'a, Result<RegistrationOutcome, RegistryError>> {
        async move {
            let hire_date: String = employee.hire_date.to_string();
            let department_id: String = employee.department_id.to_string();
            let response: reqwest::Response = self
                .client
                .post(self.url("addNewEmp"))
                .form(&[
                    ("name", employee.name.as_str()),
                    ("departmentId", department_id.as_str()),
                    ("hireDate", hire_date.as_str()),
                    ("position", employee.position.as_str()),
                ])
                .send()
                .await?;

            let http_status: i64 = i64::from(response.status().as_u16());
            let body: Value = response
                .json()
                .await
                .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

            Ok(RegistrationOutcome {
                status: body.get("status").and_then(Value::as_i64).unwrap_or(http_status),
                message: body.get("message").cloned().unwrap_or(Value::Null),
            })
        }
        .boxed()
    }

    fn organization_info<'a>(
        &'a self,
        client_id: &'a str,
    ) -> BoxFuture<'a, Result<Value, RegistryError>> {
        async move {
            let response: reqwest::Response = self
                .client
                .get(self.url("getOrgInfo"))
                .query(&[("cid", client_id)])
                .send()
                .await?;

            let status: reqwest::StatusCode = response.status();
            if !status.is_success() {
                return Err(RegistryError::UnexpectedStatus {
                    status: status.as_u16(),
                });
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| RegistryError::InvalidResponse(e.to_string()))
        }
        .boxed()
    }
}
