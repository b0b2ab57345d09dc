//! Request dispatch
//!
//! Routes a decoded request to the matching catalog operation and turns the
//! outcome into a protocol response.

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::protocol::{decode_request, Request, Response, Status};

/// Execute `request` against `catalog`
pub fn dispatch(catalog: &Catalog, request: Request) -> Response {
    tracing::trace!("Dispatching {:?}", request);

    let result = match request {
        Request::List => Response::ok(&catalog.get_all_books()),
        Request::Find { id } => match catalog.get_book(&id) {
            Some(book) => Response::ok(&book),
            None => Err(CatalogError::NotFound(id)),
        },
        Request::GetCopies { id } => catalog.get_copies(&id).and_then(|n| Response::ok(&n)),
        Request::AddCopies { id, copies } => catalog
            .add_copies(&id, copies)
            .and_then(|n| Response::ok(&n)),
        Request::SubCopies { id, copies } => catalog
            .sub_copies(&id, copies)
            .and_then(|n| Response::ok(&n)),
    };

    result.unwrap_or_else(|e| error_response(&e))
}

/// Decode path segments and dispatch, answering 400 on a malformed path
pub fn dispatch_path(catalog: &Catalog, segments: &[&str]) -> Response {
    match decode_request(segments) {
        Ok(request) => dispatch(catalog, request),
        Err(e) => {
            tracing::debug!("Rejected request {:?}: {}", segments, e);
            error_response(&e)
        }
    }
}

/// Map an error to the status the client expects
pub fn error_response(error: &CatalogError) -> Response {
    match error {
        CatalogError::NotFound(_) => Response::not_found(),
        CatalogError::InsufficientStock { .. } => {
            Response::error(Status::Conflict, &error.to_string())
        }
        CatalogError::Validation(_) | CatalogError::Protocol(_) => {
            Response::error(Status::BadRequest, &error.to_string())
        }
        _ => {
            tracing::warn!("Request failed: {}", error);
            Response::error(Status::Error, &error.to_string())
        }
    }
}
