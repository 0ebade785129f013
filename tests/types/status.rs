use std::io;

use may_rail::types::{MayError, MultiError, NotOk, Status};

#[test]
fn success_statuses_normalize_to_nothing() {
    assert!(Status::Absent.normalize().is_none());
    assert!(Status::Bool(true).normalize().is_none());
    assert!(Status::default().is_success());
}

#[test]
fn false_normalizes_to_the_sentinel() {
    let failure = Status::Bool(false).normalize().unwrap();
    assert!(failure.is_not_ok());
    assert!(!Status::Bool(false).is_success());
}

#[test]
fn errors_pass_through() {
    let failure = Status::error(io::Error::other("boom")).normalize().unwrap();
    assert_eq!(failure.to_string(), "boom");
    assert!(failure.is::<io::Error>());
}

#[test]
fn boxed_may_errors_are_not_rewrapped() {
    let failure = Status::error(MayError::msg("kept")).normalize().unwrap();
    assert_eq!(format!("{failure:?}"), "Message(\"kept\")");

    let sentinel = Status::error(NotOk).normalize().unwrap();
    assert!(sentinel.is_not_ok());
}

#[test]
fn empty_aggregates_normalize_to_nothing() {
    assert!(Status::error(MultiError::new()).is_success());
    assert!(Status::error(MultiError::new()).normalize().is_none());
    assert!(Status::error(MayError::from(MultiError::new())).normalize().is_none());

    let one = MultiError::combine([MayError::msg("x")]).unwrap();
    assert!(!Status::error(one.clone()).is_success());
    assert_eq!(Status::error(one).normalize().unwrap().to_string(), "x");
}
