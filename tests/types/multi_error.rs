use may_rail::msg;
use may_rail::types::{MayError, MultiError};

fn texts(errors: &MultiError) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

#[test]
fn combine_of_nothing_is_none() {
    assert!(MultiError::combine(Vec::new()).is_none());
    assert!(MultiError::new().is_empty());
}

#[test]
fn single_constituent_displays_as_itself() {
    let errors = MultiError::combine([MayError::msg("alone")]).unwrap();
    assert_eq!(errors.to_string(), "alone");
    assert_eq!(errors.len(), 1);
}

#[test]
fn appending_an_aggregate_flattens_it() {
    let inner = MultiError::combine([MayError::msg("b"), MayError::msg("c")]).unwrap();

    let mut outer = MultiError::new();
    outer.append(MayError::msg("a"));
    outer.append(MayError::from(inner));
    outer.append(MayError::msg("d"));

    assert_eq!(texts(&outer), ["a", "b", "c", "d"]);
}

#[test]
fn decorated_aggregates_stay_whole() {
    let inner = MultiError::combine([MayError::msg("b"), MayError::msg("c")]).unwrap();

    let mut outer = MultiError::new();
    outer.append(MayError::from(inner).decorate(&msg!("batch")));

    assert_eq!(outer.len(), 1);
    assert_eq!(outer.to_string(), "batch: b; c");
}

#[test]
fn combination_is_associative() {
    let left = {
        let ab = MultiError::combine([MayError::msg("a"), MayError::msg("b")]).unwrap();
        MultiError::combine([MayError::from(ab), MayError::msg("c")]).unwrap()
    };
    let right = {
        let bc = MultiError::combine([MayError::msg("b"), MayError::msg("c")]).unwrap();
        MultiError::combine([MayError::msg("a"), MayError::from(bc)]).unwrap()
    };

    assert_eq!(texts(&left), texts(&right));
}

#[test]
fn into_errors_keeps_append_order() {
    let errors: MultiError = ["e1", "e2", "e3"].into_iter().map(MayError::msg).collect();
    let list: Vec<String> = errors.into_errors().iter().map(ToString::to_string).collect();
    assert_eq!(list, ["e1", "e2", "e3"]);
}

#[test]
fn iterates_by_reference_and_by_value() {
    let mut errors = MultiError::new();
    errors.extend([MayError::msg("x"), MayError::msg("y")]);

    let borrowed: Vec<_> = (&errors).into_iter().map(|e| e.to_string()).collect();
    let owned: Vec<_> = errors.into_iter().map(|e| e.to_string()).collect();
    assert_eq!(borrowed, owned);
}
