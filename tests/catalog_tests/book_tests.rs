//! Tests for Book
//!
//! These tests verify:
//! - Display rendering
//! - Copy count validation
//! - JSON field names

use bookstock::{Book, CatalogError};

#[test]
fn test_display_formats_book_info() {
    let book = Book::new("", "Sea Room", "Adam Nicolson", 2);

    assert_eq!(book.to_string(), "Sea Room by Adam Nicolson (copies: 2)");
}

#[test]
fn test_set_copies_updates_count() {
    let mut book = Book {
        copies: 5,
        ..Book::default()
    };

    book.set_copies(12).unwrap();

    assert_eq!(book.copies, 12);
}

#[test]
fn test_set_copies_zero_is_valid() {
    let mut book = Book::new("abc", "T", "A", 3);

    book.set_copies(0).unwrap();

    assert_eq!(book.copies, 0);
}

#[test]
fn test_set_copies_negative_is_rejected() {
    let mut book = Book::new("abc", "T", "A", 3);

    let err = book.set_copies(-1).unwrap_err();

    assert!(matches!(err, CatalogError::Validation(_)));
    assert_eq!(book.copies, 3);
}

#[test]
fn test_default_book_is_zero_value() {
    let book = Book::default();

    assert!(book.id.is_empty());
    assert!(book.title.is_empty());
    assert!(book.author.is_empty());
    assert_eq!(book.copies, 0);
}

#[test]
fn test_json_uses_capitalized_field_names() {
    let book = Book::new("abc", "White Heat", "Dominic Sandbrook", 2);

    let value = serde_json::to_value(&book).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "ID": "abc",
            "Title": "White Heat",
            "Author": "Dominic Sandbrook",
            "Copies": 2
        })
    );
}

#[test]
fn test_json_negative_copies_rejected() {
    let raw = r#"{"ID":"abc","Title":"T","Author":"A","Copies":-1}"#;

    assert!(serde_json::from_str::<Book>(raw).is_err());
}
