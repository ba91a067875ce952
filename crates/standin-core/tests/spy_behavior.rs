//! End-to-end spy scenarios exercised through the public API.

use std::cell::Cell;
use std::rc::Rc;

use standin_core::{Spy, Value};

#[test]
fn trailing_arguments_do_not_break_prefix_assertions() {
    let spy = Spy::new();
    spy.call(Value::Null, vec![Value::Int(1), Value::Int(2)]);
    spy.call(Value::Null, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);

    assert!(spy.was_called_with(&[Value::Int(1), Value::Int(2)]));
    assert!(!spy.was_called_with(&[Value::Int(2), Value::Int(1)]));
}

#[test]
fn later_substitution_wins_while_unconditional_side_effect_still_fires() {
    let spy = Spy::new();
    let fired = Rc::new(Cell::new(0));

    spy.when_called_with_return(vec![Value::text("x")], Value::text("A"));
    spy.when_called_with_return(vec![Value::text("x")], Value::text("B"));
    let f = Rc::clone(&fired);
    spy.when_called_run(move || f.set(f.get() + 1));

    let result = spy.call(Value::Null, vec![Value::text("x")]);
    assert_eq!(result, Value::text("B"));
    assert_eq!(fired.get(), 1);
}

#[test]
fn configuration_accumulates_across_repeated_registration() {
    let spy = Spy::wrapping(|| Value::Int(0));
    let effects = Rc::new(Cell::new(0));

    for _ in 0..3 {
        let e = Rc::clone(&effects);
        spy.when_called_run(move || e.set(e.get() + 1));
    }
    spy.call(Value::Null, Vec::new());
    assert_eq!(effects.get(), 3);

    spy.call(Value::Null, Vec::new());
    assert_eq!(effects.get(), 6);
    assert_eq!(spy.call_count(), 2);
}

#[test]
fn history_is_append_only_across_reconfiguration() {
    let spy = Spy::new();
    spy.call(Value::text("a"), Vec::new());
    spy.set_return(Value::Int(1));
    spy.replace_base(|| Value::Int(2));
    spy.call(Value::text("b"), Vec::new());

    let calls = spy.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].receiver, Value::text("a"));
    assert_eq!(calls[1].receiver, Value::text("b"));
}
