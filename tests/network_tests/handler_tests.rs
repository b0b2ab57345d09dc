//! Tests for request dispatch
//!
//! Exercises the route table without a network listener.

use bookstock::network::{dispatch, dispatch_path, error_response};
use bookstock::protocol::{Request, Status};
use bookstock::{Book, Catalog, CatalogError};

fn test_catalog() -> Catalog {
    let catalog = Catalog::new();
    catalog
        .add_book(Book::new("abc", "In the Company of Cheerful Ladies", "Alexander McCall Smith", 1))
        .unwrap();
    catalog
        .add_book(Book::new("xyz", "White Heat", "Dominic Sandbrook", 2))
        .unwrap();
    catalog
}

fn body<T: serde::de::DeserializeOwned>(payload: &[u8]) -> T {
    serde_json::from_slice(payload).unwrap()
}

#[test]
fn test_dispatch_list() {
    let catalog = test_catalog();

    let response = dispatch(&catalog, Request::List);

    assert_eq!(response.status, Status::Ok);
    let books: Vec<Book> = body(&response.payload);
    assert_eq!(books, catalog.get_all_books());
}

#[test]
fn test_dispatch_find() {
    let catalog = test_catalog();

    let response = dispatch(&catalog, Request::Find { id: "xyz".to_string() });

    assert_eq!(response.status, Status::Ok);
    let book: Book = body(&response.payload);
    assert_eq!(book.title, "White Heat");
}

#[test]
fn test_dispatch_find_missing() {
    let catalog = test_catalog();

    let response = dispatch(&catalog, Request::Find { id: "nope".to_string() });

    assert_eq!(response.status, Status::NotFound);
}

#[test]
fn test_dispatch_copies_operations() {
    let catalog = test_catalog();

    let response = dispatch(&catalog, Request::AddCopies { id: "abc".to_string(), copies: 2 });
    assert_eq!(response.status, Status::Ok);
    assert_eq!(body::<u64>(&response.payload), 3);

    let response = dispatch(&catalog, Request::SubCopies { id: "abc".to_string(), copies: 1 });
    assert_eq!(response.status, Status::Ok);
    assert_eq!(body::<u64>(&response.payload), 2);

    let response = dispatch(&catalog, Request::GetCopies { id: "abc".to_string() });
    assert_eq!(response.status, Status::Ok);
    assert_eq!(body::<u64>(&response.payload), 2);
}

#[test]
fn test_dispatch_insufficient_stock_is_conflict() {
    let catalog = test_catalog();

    let response = dispatch(&catalog, Request::SubCopies { id: "abc".to_string(), copies: 5 });

    assert_eq!(response.status, Status::Conflict);
    assert_eq!(catalog.get_copies("abc").unwrap(), 1);
}

#[test]
fn test_dispatch_missing_id_for_copies() {
    let catalog = test_catalog();

    for request in [
        Request::GetCopies { id: "nope".to_string() },
        Request::AddCopies { id: "nope".to_string(), copies: 1 },
        Request::SubCopies { id: "nope".to_string(), copies: 1 },
    ] {
        assert_eq!(dispatch(&catalog, request).status, Status::NotFound);
    }
}

#[test]
fn test_dispatch_path_decodes_segments() {
    let catalog = test_catalog();

    let response = dispatch_path(&catalog, &["addcopies", "xyz", "3"]);

    assert_eq!(response.status, Status::Ok);
    assert_eq!(catalog.get_copies("xyz").unwrap(), 5);
}

#[test]
fn test_dispatch_path_rejects_malformed() {
    let catalog = test_catalog();

    assert_eq!(dispatch_path(&catalog, &["bogus"]).status, Status::BadRequest);
    assert_eq!(
        dispatch_path(&catalog, &["addcopies", "abc", "many"]).status,
        Status::BadRequest
    );
    assert_eq!(catalog.get_copies("abc").unwrap(), 1);
}

#[test]
fn test_error_response_mapping() {
    assert_eq!(
        error_response(&CatalogError::NotFound("x".to_string())).status,
        Status::NotFound
    );
    assert_eq!(
        error_response(&CatalogError::Validation("bad".to_string())).status,
        Status::BadRequest
    );
    assert_eq!(error_response(&CatalogError::NoBackingFile).status, Status::Error);
}
