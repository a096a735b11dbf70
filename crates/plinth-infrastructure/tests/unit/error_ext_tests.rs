//! Error Extension Tests

use plinth_domain::error::Error;
use plinth_infrastructure::error_ext::ErrorContext;

fn failing_io() -> std::io::Result<()> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
}

#[test]
fn test_context_wraps_as_infrastructure() {
    let err = failing_io().context("loading bindings").unwrap_err();
    match err {
        Error::Infrastructure { message, source } => {
            assert!(message.starts_with("loading bindings"));
            assert!(message.contains("missing"));
            assert!(source.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_io_context() {
    let err = failing_io().io_context("reading plinth.toml").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_config_context() {
    let err = failing_io().config_context("parsing").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_with_context_is_lazy_on_success() {
    let ok: std::io::Result<u8> = Ok(3);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 3);
}
