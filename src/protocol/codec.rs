//! Protocol codec
//!
//! Mapping between requests and URL paths, and decoding of typed replies.
//!
//! ## Path Format
//! ```text
//! /v1/list
//! /v1/find/{id}
//! /v1/getcopies/{id}
//! /v1/addcopies/{id}/{n}
//! /v1/subcopies/{id}/{n}
//! ```
//! Every segment is percent-encoded on the wire, so IDs may contain `/`.
//! The IDs `""`, `.` and `..` are not addressable remotely.
//!
//! ## Reply Mapping
//! - 200: body is the JSON value for the request
//! - 404: target not found, body ignored
//! - anything else: unclassified failure, body kept for diagnostics

use reqwest::Url;
use serde::de::DeserializeOwned;

use super::{Request, RequestType};
use crate::error::{CatalogError, Result};

/// Versioned prefix segment of every request path
pub const API_VERSION: &str = "v1";

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Encode a request into its path segments (without the version prefix)
pub fn encode_request(request: &Request) -> Vec<String> {
    let op = request.request_type().segment().to_string();

    match request {
        Request::List => vec![op],
        Request::Find { id } | Request::GetCopies { id } => vec![op, id.clone()],
        Request::AddCopies { id, copies } | Request::SubCopies { id, copies } => {
            vec![op, id.clone(), copies.to_string()]
        }
    }
}

/// Decode already percent-decoded path segments into a request
pub fn decode_request(segments: &[&str]) -> Result<Request> {
    let (op, args) = segments
        .split_first()
        .ok_or_else(|| CatalogError::Protocol("empty request path".to_string()))?;

    let request_type = RequestType::from_segment(op)
        .ok_or_else(|| CatalogError::Protocol(format!("unknown operation: {:?}", op)))?;

    match (request_type, args) {
        (RequestType::List, []) => Ok(Request::List),
        (RequestType::Find, [id]) => Ok(Request::Find { id: id.to_string() }),
        (RequestType::GetCopies, [id]) => Ok(Request::GetCopies { id: id.to_string() }),
        (RequestType::AddCopies, [id, copies]) => Ok(Request::AddCopies {
            id: id.to_string(),
            copies: parse_copies(copies)?,
        }),
        (RequestType::SubCopies, [id, copies]) => Ok(Request::SubCopies {
            id: id.to_string(),
            copies: parse_copies(copies)?,
        }),
        _ => Err(CatalogError::Protocol(format!(
            "{}: unexpected number of arguments ({})",
            op,
            args.len()
        ))),
    }
}

fn parse_copies(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|e| CatalogError::Protocol(format!("invalid number of copies {:?}: {}", raw, e)))
}

/// Build the full URL for `request` against a server at `addr` (host:port)
///
/// IDs that cannot survive as a single path segment (empty, `.`, `..`) are
/// rejected here; URL normalization would drop or collapse them.
pub fn request_url(addr: &str, request: &Request) -> Result<Url> {
    if let Some(id) = request.id() {
        if matches!(id, "" | "." | "..") {
            return Err(CatalogError::Protocol(format!(
                "id {:?} cannot be sent as a path segment",
                id
            )));
        }
    }

    let mut url = Url::parse(&format!("http://{}/", addr))
        .map_err(|e| CatalogError::Config(format!("invalid server address {:?}: {}", addr, e)))?;

    url.path_segments_mut()
        .map_err(|_| CatalogError::Config(format!("invalid server address {:?}", addr)))?
        .clear()
        .push(API_VERSION)
        .extend(encode_request(request));

    Ok(url)
}

// =============================================================================
// Reply Decoding
// =============================================================================

/// Turn an HTTP status and body into a typed value
///
/// `target` names what was asked for and ends up in `NotFound`.
pub fn decode_reply<T: DeserializeOwned>(status: u16, body: &[u8], target: &str) -> Result<T> {
    if status == 404 {
        return Err(CatalogError::NotFound(target.to_string()));
    }

    if status != 200 {
        return Err(CatalogError::UnexpectedStatus {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }

    serde_json::from_slice(body).map_err(|e| CatalogError::Decode {
        message: e.to_string(),
        body: String::from_utf8_lossy(body).into_owned(),
    })
}
