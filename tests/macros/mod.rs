use may_rail::msg;
use may_rail::types::MessageArgs;

#[test]
fn empty_invocation_builds_empty_args() {
    let args: MessageArgs<'_> = msg!();
    assert!(args.is_empty());
    assert_eq!(args.len(), 0);
}

#[test]
fn arguments_keep_their_order() {
    let (a, b, c) = (1, "two", 3.0);
    let args = msg!(a, b, c);
    assert_eq!(args.len(), 3);
    assert_eq!(format!("{args:?}"), "[1, \"two\", 3]");
}

#[test]
fn trailing_comma_is_accepted() {
    let name = "report";
    assert_eq!(msg!("saving %s", name,).render(), "saving report");
}

#[test]
fn arguments_are_borrowed_not_moved() {
    let owned = String::from("still mine");
    let rendered = msg!("%s", owned).render();
    assert_eq!(rendered, "still mine");
    assert_eq!(owned.len(), 10);
}
