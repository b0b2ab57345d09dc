//! Response definitions
//!
//! Represents responses to clients.

use serde::Serialize;

use crate::error::Result;

/// Response status codes (HTTP)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Status {
    Ok = 200,
    BadRequest = 400,
    NotFound = 404,
    Conflict = 409,
    Error = 500,
}

impl Status {
    pub fn code(self) -> u16 {
        self as u16
    }
}

/// A response to send to a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// JSON body (value for OK, `{"error": ...}` otherwise, empty for NOT_FOUND)
    pub payload: Vec<u8>,
}

impl Response {
    /// Create an OK response carrying `value` as JSON
    pub fn ok<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self {
            status: Status::Ok,
            payload: serde_json::to_vec(value)?,
        })
    }

    /// Create a NOT_FOUND response
    pub fn not_found() -> Self {
        Self {
            status: Status::NotFound,
            payload: Vec::new(),
        }
    }

    /// Create a response with an error message body
    pub fn error(status: Status, message: &str) -> Self {
        let payload = serde_json::json!({ "error": message }).to_string().into_bytes();
        Self { status, payload }
    }
}
