use std::io;
use std::sync::{Arc, Mutex};

use may_rail::may::{handler, MayHandler};
use may_rail::types::{MayError, MultiError, NotOk};
use may_rail::{msg, May, May0, May2};


type Calls = Arc<Mutex<Vec<String>>>;

fn recording(name: &'static str, calls: &Calls) -> MayHandler {
    let calls = Arc::clone(calls);
    handler(move |error, args| {
        calls.lock().unwrap().push(format!("{name}: {error} ({})", args.len()));
    })
}

fn texts(may: &May<impl Sized>) -> Vec<String> {
    may.collect_as_errors().iter().map(ToString::to_string).collect()
}

#[test]
fn values_pass_through_for_every_status() {
    let may = May2::<&str, i32>::new();
    assert_eq!(may.invoke(("a", 1), true, &msg!()), ("a", 1));
    assert_eq!(may.invoke(("b", 2), false, &msg!()), ("b", 2));
    assert_eq!(may.invoke(("c", 3), Some(io::Error::other("e")), &msg!("m")), ("c", 3));
    assert_eq!(may.invoke(("d", 4), None::<io::Error>, &msg!()), ("d", 4));
}

#[test]
fn success_is_a_no_op() {
    let calls = Calls::default();
    let may = May::<u8>::new().with_handler(recording("h", &calls));

    may.invoke(1, true, &msg!("ignored"));
    may.invoke(2, None::<MayError>, &msg!());
    may.invoke(3, Ok::<(), io::Error>(()), &msg!());

    assert!(calls.lock().unwrap().is_empty());
    assert!(may.collect_as_error().is_none());
}

#[test]
fn empty_aggregate_status_is_a_no_op() {
    let calls = Calls::default();
    let may = May0::new().with_handler(recording("h", &calls));

    may.check(MultiError::new(), &msg!("nothing failed"));
    may.check(MayError::from(MultiError::new()), &msg!());
    may.invoke_result(Err::<(), _>(MultiError::new()), &msg!());

    assert!(calls.lock().unwrap().is_empty());
    assert!(may.collect_as_error().is_none());
}

#[test]
fn non_empty_aggregate_status_is_recorded_once_per_constituent() {
    let calls = Calls::default();
    let may = May0::new().with_handler(recording("h", &calls));

    let batch = MultiError::combine([MayError::msg("a"), MayError::msg("b")]);
    may.check(batch, &msg!());

    assert_eq!(*calls.lock().unwrap(), ["h: a; b (0)"]);
    assert_eq!(texts(&may), ["a", "b"]);
}

#[test]
fn fresh_filter_is_empty() {
    let may = May0::new();
    assert!(may.collect_as_error().is_none());
    assert!(may.collect_as_errors().is_empty());
}

#[test]
fn failures_keep_their_order() {
    let may = May0::new();
    may.check(io::Error::other("e1"), &msg!());
    may.check(io::Error::other("e2"), &msg!());
    may.check(io::Error::other("e3"), &msg!());

    assert_eq!(texts(&may), ["e1", "e2", "e3"]);
    assert_eq!(may.collect_as_error().unwrap().to_string(), "e1; e2; e3");
}

#[test]
fn false_with_a_message_is_just_the_message() {
    let may = May::<()>::new();
    may.check(false, &msg!("custom message"));

    let errors = may.collect_as_errors();
    assert_eq!(errors[0].to_string(), "custom message");
    assert!(!errors[0].is::<NotOk>());
}

#[test]
fn errors_with_a_message_are_prefixed() {
    let may = May::<()>::new();
    may.check(io::Error::other("boom"), &msg!("custom message"));
    may.check(false, &msg!());

    assert_eq!(texts(&may), ["custom message: boom", "not ok"]);
    assert!(may.collect_as_errors()[1].is_not_ok());
}

#[test]
fn handlers_fan_out_in_registration_order() {
    let calls = Calls::default();
    let may = May::<i32>::new()
        .with_handler(recording("h1", &calls))
        .with_handler(recording("h2", &calls));

    may.invoke(0, io::Error::other("boom"), &msg!("step %d", 3));

    assert_eq!(*calls.lock().unwrap(), ["h1: step 3: boom (2)", "h2: step 3: boom (2)"]);
}

#[test]
fn register_chains_on_an_existing_filter() {
    let calls = Calls::default();
    let mut may = May::<u8>::new();
    may.register(recording("a", &calls)).register(recording("b", &calls));
    assert_eq!(may.handler_count(), 2);

    may.invoke(1, false, &msg!());
    assert_eq!(*calls.lock().unwrap(), ["a: not ok (0)", "b: not ok (0)"]);
}

#[test]
fn with_handlers_appends_in_order() {
    let calls = Calls::default();
    let may = May::<u8>::new()
        .with_handler(recording("first", &calls))
        .with_handlers([recording("second", &calls), recording("third", &calls)]);

    may.invoke(1, false, &msg!());
    let names: Vec<String> =
        calls.lock().unwrap().iter().map(|line| line.split(':').next().unwrap().to_owned()).collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn invoke_result_unwraps_or_defaults() {
    let may = May::<Vec<u8>>::new();
    assert_eq!(may.invoke_result(Ok::<_, io::Error>(vec![1]), &msg!()), vec![1]);
    assert!(may.invoke_result(Err(io::Error::other("gone")), &msg!("reading")).is_empty());
    assert_eq!(texts(&may), ["reading: gone"]);
}

#[test]
fn handle_errors_is_gated() {
    let may = May::<()>::new();

    let mut calls = 0;
    may.handle_errors(|_| calls += 1);
    assert_eq!(calls, 0);
    assert_eq!(may.handle_errors_with_return(|_| Err("unreachable")), Ok(()));

    may.check(false, &msg!("once"));
    may.handle_errors(|errors| {
        calls += 1;
        assert_eq!(errors.len(), 1);
    });
    assert_eq!(calls, 1);

    let returned = may.handle_errors_with_return(|errors| Err(errors[0].to_string()));
    assert_eq!(returned, Err(String::from("once")));
}

#[test]
fn filters_are_independent() {
    let left = May::<()>::new();
    let right = May::<()>::new();
    left.check(false, &msg!("left"));
    assert!(right.collect_as_error().is_none());
    assert_eq!(texts(&left), ["left"]);
}
