use reqwest::blocking::Client;
use thiserror::Error;

use crate::model::Employee;

/// The public placeholder endpoint the directory reads from.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Any failure of an outbound directory call: connectivity, non-success
/// status, or a body that does not decode. A missing employee surfaces
/// here too; this layer does not tell not-found apart from other
/// failures.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<reqwest::Error>,
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl TransportError {
    #[cfg(test)]
    pub(crate) fn simulated(message: &str) -> Self {
        TransportError {
            message: message.to_string(),
            source: None,
        }
    }
}

/// Read access to the employee directory. The live implementation talks
/// HTTP; tests substitute an in-memory one.
pub trait Directory {
    /// Fetch every employee, in the order the remote source returns them.
    fn list_employees(&self) -> Result<Vec<Employee>, TransportError>;

    /// Fetch a single employee by its remote id.
    fn get_employee(&self, id: i64) -> Result<Employee, TransportError>;
}

/// The live directory: a thin pass-through over the remote REST source.
/// One GET per call, no caching, no retries.
pub struct EmployeeService {
    base_url: String,
    client: Client,
}

impl EmployeeService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        EmployeeService {
            base_url,
            client: Client::new(),
        }
    }

    fn employee_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl Directory for EmployeeService {
    fn list_employees(&self) -> Result<Vec<Employee>, TransportError> {
        let employees = self
            .client
            .get(&self.base_url)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(employees)
    }

    fn get_employee(&self, id: i64) -> Result<Employee, TransportError> {
        let employee = self
            .client
            .get(&self.employee_url(id))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(employee)
    }
}
