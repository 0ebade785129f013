use std::io;

use may_rail::traits::IntoStatus;
use may_rail::types::{BoxError, Cancelled, MayError, MultiError, NotOk, Status};

fn failure_text<S: IntoStatus>(status: S) -> Option<String> {
    status.into_status().normalize().map(|failure| failure.to_string())
}

#[test]
fn booleans() {
    assert_eq!(failure_text(true), None);
    assert_eq!(failure_text(false).as_deref(), Some("not ok"));
}

#[test]
fn options_and_results() {
    assert_eq!(failure_text(None::<io::Error>), None);
    assert_eq!(failure_text(Some("boom")).as_deref(), Some("boom"));
    assert_eq!(failure_text(Ok::<(), String>(())), None);
    assert_eq!(failure_text(Err::<(), _>(String::from("bad"))).as_deref(), Some("bad"));
}

#[test]
fn bare_errors() {
    assert_eq!(failure_text(io::Error::other("disk")).as_deref(), Some("disk"));
    assert_eq!(failure_text(Cancelled::canceled()).as_deref(), Some("operation canceled"));
    assert_eq!(failure_text(NotOk).as_deref(), Some("not ok"));
    assert_eq!(failure_text(MayError::msg("m")).as_deref(), Some("m"));

    let boxed: BoxError = "boxed".into();
    assert_eq!(failure_text(boxed).as_deref(), Some("boxed"));
}

#[test]
fn aggregates_are_failures() {
    let errors = MultiError::combine([MayError::msg("a"), MayError::msg("b")]).unwrap();
    assert_eq!(failure_text(errors).as_deref(), Some("a; b"));
}

#[test]
fn status_passes_through() {
    assert!(matches!(Status::Bool(false).into_status(), Status::Bool(false)));
    assert!(matches!(Status::Absent.into_status(), Status::Absent));
}
