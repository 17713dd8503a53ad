//! Wire and result types for address submission

use crate::address::Address;
use serde::{Deserialize, Serialize};

/// Request body for a structured submission: `{"data": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct AddAddressRequest<'a> {
    /// The address fields
    pub data: &'a Address,
}

impl<'a> AddAddressRequest<'a> {
    pub fn new(data: &'a Address) -> Self {
        Self { data }
    }
}

/// Response body returned by the endpoint on success
///
/// Both fields are optional; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAddressResponse {
    /// Server-assigned identifier
    #[serde(default)]
    pub id: Option<i64>,

    /// Free-form status string
    #[serde(default)]
    pub status: Option<String>,
}

/// Tri-state outcome of a submission
///
/// A submission stream yields `Loading` once, then exactly one of
/// `Success` or `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResult<T> {
    /// Request is in flight
    Loading,

    /// The endpoint accepted the request
    Success(T),

    /// The request failed
    Error {
        /// Human-readable description
        message: String,
        /// HTTP status code, absent for transport/parse failures
        code: Option<u16>,
    },
}

impl<T> ApiResult<T> {
    /// Create an error result
    pub fn error(message: impl Into<String>, code: Option<u16>) -> Self {
        Self::Error {
            message: message.into(),
            code,
        }
    }

    /// Whether this is `Success` or `Error`
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Result of a single address submission
pub type SubmissionResult = ApiResult<AddAddressResponse>;
