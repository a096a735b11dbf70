//! Binding model tests

use std::sync::Arc;

use plinth_domain::constants::UNSPECIFIED_ORIGIN;
use plinth_domain::value_objects::{Dependency, Lifetime, Token};

#[test]
fn test_binding_defaults() {
    let token: Token<u8> = Token::new("Byte");
    let binding = token.use_value(Arc::new(1));

    assert_eq!(binding.identity(), token.identity());
    assert!(!binding.is_multi());
    assert_eq!(binding.lifetime(), Lifetime::Singleton);
    assert_eq!(binding.origin(), UNSPECIFIED_ORIGIN);
    assert!(!binding.is_sensitive());
    assert!(!binding.is_trusted_override());
}

#[test]
fn test_binding_modifiers() {
    let token: Token<u8> = Token::new("Byte");
    let binding = token
        .use_value(Arc::new(1))
        .multi()
        .transient()
        .sensitive()
        .trusted_override()
        .with_origin("unit");

    assert!(binding.is_multi());
    assert_eq!(binding.lifetime(), Lifetime::Transient);
    assert!(binding.is_sensitive());
    assert!(binding.is_trusted_override());
    assert_eq!(binding.origin(), "unit");
}

#[test]
fn test_strategy_kinds_and_dependencies() {
    let source: Token<String> = Token::new("Source");
    let alias: Token<String> = Token::new("Alias");
    let derived: Token<usize> = Token::new("Derived");
    let source_copy = source;

    let existing = alias.use_existing(&source);
    let factory = derived.use_factory(
        vec![Dependency::one(&source), Dependency::optional(&alias)],
        move |deps| Ok(Arc::new(deps.get(&source_copy)?.len())),
    );

    assert_eq!(existing.strategy().kind(), "existing");
    assert_eq!(
        existing.strategy().dependencies(),
        vec![Dependency::One(source.identity())]
    );
    assert_eq!(factory.strategy().kind(), "factory");
    assert_eq!(factory.strategy().dependencies().len(), 2);
}
