// Copyright 2026 The cloudstack-rs Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error and Result implementations.

use std::fmt;

use reqwest::Error as HttpClientError;
use reqwest::StatusCode;
use serde_json::Error as JsonError;

/// Kind of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Authentication failure.
    ///
    /// Maps to CloudStack error codes 401 and 511.
    AuthenticationFailed,

    /// Access denied.
    ///
    /// Maps to HTTP 403.
    AccessDenied,

    /// Requested resource was not found.
    ///
    /// Also returned by lookup helpers when nothing matched.
    ResourceNotFound,

    /// Request returned more items than expected.
    ///
    /// Returned by lookup helpers when the match is ambiguous.
    TooManyItems,

    /// Invalid value passed to one of parameters.
    ///
    /// Maps to CloudStack error codes 430 and 431.
    InvalidInput,

    /// The command is not supported by the server or not allowed.
    ///
    /// Maps to CloudStack error codes 405 and 432.
    UnsupportedOperation,

    /// Conflict in the request.
    ///
    /// Maps to CloudStack error codes 536 and 537.
    Conflict,

    /// API request limit exceeded.
    ///
    /// Maps to CloudStack error code 429.
    RateLimited,

    /// Operation has reached the specified time out.
    ///
    /// The asynchronous job may still be running on the server.
    OperationTimedOut,

    /// Asynchronous job finished with a failure.
    OperationFailed,

    /// Protocol-level error reported by underlying HTTP library.
    ProtocolError,

    /// Response received from the server is malformed.
    InvalidResponse,

    /// Internal server error.
    ///
    /// Maps to HTTP 5xx and any CloudStack error code not listed above.
    InternalServerError,

    /// Invalid client configuration.
    InvalidConfig,
}

/// Error from a CloudStack call.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    status: Option<StatusCode>,
    error_code: Option<i32>,
    cs_error_code: Option<i32>,
    job_id: Option<String>,
}

/// Result of a CloudStack call.
pub type Result<T> = ::std::result::Result<T, Error>;

impl Error {
    /// Create a new error of the provided kind.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Error {
        Error {
            kind,
            message: Some(message.into()),
            status: None,
            error_code: None,
            cs_error_code: None,
            job_id: None,
        }
    }

    /// Create an error from an error envelope returned by the server.
    pub(crate) fn from_api(error_code: i32, cs_error_code: Option<i32>, text: String) -> Error {
        let kind = ErrorKind::from_api_code(error_code, &text);
        Error {
            kind,
            message: Some(text),
            status: None,
            error_code: Some(error_code),
            cs_error_code,
            job_id: None,
        }
    }

    /// Create an error from a bare HTTP status without a usable body.
    pub(crate) fn from_status(status: u16, body: &str) -> Error {
        let status = StatusCode::from_u16(status).ok();
        let kind = match status {
            Some(StatusCode::UNAUTHORIZED) => ErrorKind::AuthenticationFailed,
            Some(StatusCode::FORBIDDEN) => ErrorKind::AccessDenied,
            Some(StatusCode::NOT_FOUND) => ErrorKind::ResourceNotFound,
            Some(StatusCode::CONFLICT) => ErrorKind::Conflict,
            Some(StatusCode::TOO_MANY_REQUESTS) => ErrorKind::RateLimited,
            Some(c) if c.is_client_error() => ErrorKind::InvalidInput,
            Some(c) if c.is_server_error() => ErrorKind::InternalServerError,
            _ => ErrorKind::InvalidResponse,
        };
        let message = if body.is_empty() {
            None
        } else {
            Some(body.to_string())
        };
        Error {
            kind,
            message,
            status,
            error_code: None,
            cs_error_code: None,
            job_id: None,
        }
    }

    /// Attach the HTTP status of the response.
    pub(crate) fn with_status(mut self, status: u16) -> Error {
        self.status = StatusCode::from_u16(status).ok();
        self
    }

    /// Attach the asynchronous job this error belongs to.
    pub(crate) fn with_job_id<S: Into<String>>(mut self, job_id: S) -> Error {
        self.job_id = Some(job_id.into());
        self
    }

    /// Attach the CloudStack error code.
    pub(crate) fn with_error_code(mut self, error_code: i32) -> Error {
        self.error_code = Some(error_code);
        self
    }

    /// Error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Error message, if any.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// HTTP status of the failed response, if any.
    #[inline]
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// CloudStack error code (`errorcode`), if the server reported one.
    #[inline]
    pub fn error_code(&self) -> Option<i32> {
        self.error_code
    }

    /// CloudStack exception code (`cserrorcode`), if the server reported one.
    #[inline]
    pub fn cs_error_code(&self) -> Option<i32> {
        self.cs_error_code
    }

    /// ID of the asynchronous job this error is about.
    ///
    /// Set for `OperationTimedOut` and `OperationFailed`, so that the caller
    /// can keep polling or inspect the job later.
    #[inline]
    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }
}

impl ErrorKind {
    /// Short description of the error kind.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::AuthenticationFailed => "Failed to authenticate",
            ErrorKind::AccessDenied => "Access to the resource is denied",
            ErrorKind::ResourceNotFound => "Requested resource was not found",
            ErrorKind::TooManyItems => "Request returned too many items",
            ErrorKind::InvalidInput => "Input value(s) are invalid or missing",
            ErrorKind::UnsupportedOperation => "Requested operation is not supported",
            ErrorKind::Conflict => "Requested cannot be fulfilled due to a conflict",
            ErrorKind::RateLimited => "API request limit exceeded",
            ErrorKind::OperationTimedOut => "Time out reached while waiting for the operation",
            ErrorKind::OperationFailed => "Requested operation has failed",
            ErrorKind::ProtocolError => "Error when accessing the server",
            ErrorKind::InvalidResponse => "Received invalid response",
            ErrorKind::InternalServerError => "Internal server error or bad gateway",
            ErrorKind::InvalidConfig => "Configuration file cannot be found or is invalid",
        }
    }

    /// Classify a CloudStack `errorcode`.
    fn from_api_code(code: i32, text: &str) -> ErrorKind {
        match code {
            401 | 511 => ErrorKind::AuthenticationFailed,
            403 => ErrorKind::AccessDenied,
            430 | 431 if text.contains("entity does not exist") => ErrorKind::ResourceNotFound,
            430 | 431 => ErrorKind::InvalidInput,
            405 | 432 => ErrorKind::UnsupportedOperation,
            429 => ErrorKind::RateLimited,
            536 | 537 => ErrorKind::Conflict,
            _ => ErrorKind::InternalServerError,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(code) = self.error_code {
            write!(f, " (error code {})", code)?;
        }

        if let Some(ref msg) = self.message {
            write!(f, ": {}", msg)
        } else {
            Ok(())
        }
    }
}

impl ::std::error::Error for Error {}

impl From<HttpClientError> for Error {
    fn from(value: HttpClientError) -> Error {
        let msg = value.to_string();
        let kind = if value.is_decode() {
            ErrorKind::InvalidResponse
        } else if value.is_builder() {
            ErrorKind::InvalidInput
        } else {
            ErrorKind::ProtocolError
        };

        let mut error = Error::new(kind, msg);
        error.status = value.status();
        error
    }
}

impl From<JsonError> for Error {
    fn from(value: JsonError) -> Error {
        Error::new(
            ErrorKind::InvalidResponse,
            format!("Cannot decode response: {}", value),
        )
    }
}
