//! Service identity tests

use std::collections::HashSet;

use plinth_domain::value_objects::{ServiceIdentity, Token};

#[test]
fn test_same_name_different_identity() {
    let first = ServiceIdentity::new("Renderer");
    let second = ServiceIdentity::new("Renderer");
    assert_ne!(first, second);
    assert_eq!(first.name(), second.name());
}

#[test]
fn test_copies_compare_equal() {
    let token: Token<String> = Token::new("Title");
    let copy = token;
    assert_eq!(token.identity(), copy.identity());

    let mut seen = HashSet::new();
    seen.insert(token.identity());
    assert!(seen.contains(&copy.identity()));
}

#[test]
fn test_ids_are_increasing() {
    let first = ServiceIdentity::new("First");
    let second = ServiceIdentity::new("Second");
    assert!(second.id() > first.id());
}
