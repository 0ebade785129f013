use std::error::Error;
use std::io;

use may_rail::msg;
use may_rail::types::{Cancelled, MayError, MultiError, NotOk};

#[test]
fn sentinel_displays_not_ok() {
    let err = MayError::not_ok();
    assert!(err.is_not_ok());
    assert!(err.is::<NotOk>());
    assert_eq!(err.to_string(), "not ok");
    assert_eq!(err.message(), None);
}

#[test]
fn message_replaces_the_sentinel() {
    let err = MayError::not_ok().decorate(&msg!("custom message"));
    assert_eq!(err.to_string(), "custom message");
    assert!(!err.to_string().contains("not ok"));
    assert_eq!(err.message(), Some("custom message"));
    assert!(err.source().is_none());
}

#[test]
fn empty_message_keeps_the_sentinel() {
    let err = MayError::not_ok().decorate(&msg!());
    assert!(err.is_not_ok());
    assert_eq!(err.to_string(), "not ok");

    let err = MayError::not_ok().decorate(&msg!(""));
    assert!(err.is_not_ok());
}

#[test]
fn message_prefixes_other_errors() {
    let err = MayError::new(io::Error::other("boom")).decorate(&msg!("custom message"));
    assert_eq!(err.to_string(), "custom message: boom");
    assert_eq!(err.message(), Some("custom message"));
    assert_eq!(err.source().unwrap().to_string(), "boom");
}

#[test]
fn decoration_keeps_the_original_error_reachable() {
    let err = MayError::new(io::Error::new(io::ErrorKind::NotFound, "missing"))
        .decorate(&msg!("opening %s", "a.txt"))
        .decorate(&msg!("loading"));

    assert_eq!(err.to_string(), "loading: opening a.txt: missing");
    assert_eq!(err.downcast_ref::<io::Error>().unwrap().kind(), io::ErrorKind::NotFound);
}

#[test]
fn undecorated_errors_are_transparent() {
    let err = MayError::new(Cancelled::with_cause("shutdown"));
    assert_eq!(err.to_string(), "operation canceled: shutdown");
    assert_eq!(err.source().unwrap().to_string(), "shutdown");
    assert!(err.downcast_ref::<Cancelled>().is_some());
}

#[test]
fn nested_sentinel_is_still_replaced() {
    let wrapped = MayError::new(MayError::not_ok());
    assert!(wrapped.is_not_ok());

    let boxed: Box<dyn Error + Send + Sync> = Box::new(NotOk);
    assert!(MayError::from(boxed).is_not_ok());
}

#[test]
fn converts_from_crate_errors() {
    let from_multi = MayError::from(MultiError::combine([MayError::msg("a")]).unwrap());
    assert_eq!(from_multi.to_string(), "a");
    assert!(from_multi.is::<MultiError>());

    assert_eq!(MayError::from(Cancelled::deadline_exceeded()).to_string(), "deadline exceeded");
    assert!(MayError::from(NotOk).is_not_ok());
}

#[test]
fn clones_share_the_failure() {
    let err = MayError::msg("shared");
    let clone = err.clone();
    assert_eq!(format!("{err:?}"), format!("{clone:?}"));
    assert_eq!(format!("{err:?}"), "Message(\"shared\")");
}
