//! Tests for ReelfindError type

use super::*;

#[test]
fn test_config_error_display() {
    let error = ReelfindError::Config("missing field `endpoint`".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid configuration"));
    assert!(msg.contains("missing field `endpoint`"));
}

#[test]
fn test_endpoint_error_display() {
    let error = ReelfindError::Endpoint("relative URL without a base".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid search endpoint"));
    assert!(msg.contains("relative URL"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = ReelfindError::from(io_err);
    assert!(matches!(err, ReelfindError::Io(_)));
    assert!(err.to_string().contains("test error"));
}
