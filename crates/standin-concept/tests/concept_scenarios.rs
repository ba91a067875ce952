//! End-to-end schema scenarios: building, mocking, and validating concepts.

use std::rc::Rc;

use pretty_assertions::assert_eq;
use serde_json::json;
use standin_concept::ConceptBuilder;
use standin_core::Value;

#[test]
fn required_and_optional_fields_mock_and_validate() {
    let person = ConceptBuilder::new()
        .add_integer("age")
        .add_text("nickname")
        .make_optional()
        .build();

    let mocked = person.mock();
    assert_eq!(mocked.get("age"), Some(Value::Int(0)));
    // Optional fields still receive their category sample, not omission.
    assert_eq!(mocked.get("nickname"), Some(Value::text("")));

    assert!(person.is_implemented_by_json(&json!({"age": 5})));
    assert!(!person.is_implemented_by_json(&json!({"age": "5"})));
    assert!(person.is_implemented_by_json(&json!({"age": 5, "nickname": 17})));
}

#[test]
fn nested_concept_defaults_flow_through_the_parent_mock() {
    let inner = ConceptBuilder::new()
        .add_number("x")
        .with_default(Value::Int(9))
        .build_shared();
    let outer = ConceptBuilder::new().add_concept("box", inner).build();

    let boxed = outer.mock().get("box").expect("mock carries the box field");
    assert_eq!(boxed.get("x"), Some(Value::Int(9)));

    assert!(outer.is_implemented_by_json(&json!({"box": {"x": 1.5}})));
    assert!(!outer.is_implemented_by_json(&json!({"box": {"x": "nope"}})));
    assert!(!outer.is_implemented_by_json(&json!({"box": []})));
}

#[test]
fn rebuilt_concepts_mock_structurally_equal_objects() {
    let build = || {
        ConceptBuilder::new()
            .add_integer("age")
            .add_text("name")
            .with_default(Value::text("Spot"))
            .add_method("speak")
            .add_array("toys")
            .build()
    };
    let (first, second) = (build().mock(), build().mock());

    for name in ["age", "name", "toys"] {
        let (a, b) = (first.get(name).unwrap(), second.get(name).unwrap());
        assert!(a.structural_eq(&b), "field {name} diverged: {a:?} vs {b:?}");
    }

    // Callable fields are live spies, distinct per mock.
    let (a, b) = (first.get("speak").unwrap(), second.get("speak").unwrap());
    assert!(a.is_callable() && b.is_callable());
    assert!(a != b);
}

#[test]
fn mocked_methods_are_assertable_spies() {
    let greeter = ConceptBuilder::new().add_method("greet").build();
    let mocked = greeter.mock();

    let greet = mocked.get("greet").unwrap();
    let spy = greet.as_spy().expect("method fields mock to spies");

    spy.call(mocked.clone(), vec![Value::text("test")]);
    assert!(spy.was_called_with(&[Value::text("test")]));
    assert!(!spy.was_called_with(&[Value::text("other")]));

    // The mocked object still satisfies its own schema after use.
    assert!(greeter.is_implemented_by(&mocked));
}

#[test]
fn mocked_methods_can_be_stubbed_per_argument() {
    let calculator = ConceptBuilder::new().add_method("double").build();
    let mocked = calculator.mock();
    let double = mocked.get("double").unwrap();
    let spy = double.as_spy().unwrap();

    spy.when_called_with_return(vec![Value::Int(2)], Value::Int(4));
    spy.when_called_with_return(vec![Value::Int(3)], Value::Int(6));

    assert_eq!(spy.call(mocked.clone(), vec![Value::Int(2)]), Value::Int(4));
    assert_eq!(spy.call(mocked.clone(), vec![Value::Int(3)]), Value::Int(6));
    assert_eq!(spy.call(mocked, vec![Value::Int(5)]), Value::Null);
}

#[test]
fn shared_nested_concept_validates_independently() {
    let face = ConceptBuilder::new()
        .add_integer("num_eyes")
        .with_default(Value::Int(2))
        .add_number("num_ears")
        .with_default(Value::Float(1.5))
        .build_shared();
    let dog = ConceptBuilder::new()
        .add_integer("age")
        .with_default(Value::Int(0))
        .add_text("name")
        .with_default(Value::text("Spot"))
        .add_concept("face", Rc::clone(&face))
        .build();

    let mocked = dog.mock();
    assert_eq!(mocked.get("name"), Some(Value::text("Spot")));
    assert_eq!(mocked.get("face").unwrap().get("num_eyes"), Some(Value::Int(2)));

    // The nested concept remains usable on its own.
    assert!(face.is_implemented_by(&mocked.get("face").unwrap()));
    assert!(face.is_implemented_by_json(&json!({"num_eyes": 2, "num_ears": 1.5})));
    assert!(!face.is_implemented_by_json(&json!({"num_eyes": 2.5, "num_ears": 1.5})));
}

#[test]
fn validation_rejects_non_object_shapes_regardless_of_schema() {
    let any = ConceptBuilder::new().add_integer("x").make_optional().build();

    assert!(!any.is_implemented_by(&Value::Null));
    assert!(!any.is_implemented_by_json(&json!([1, 2, 3])));
    assert!(!any.is_implemented_by_json(&json!("scalar")));
    assert!(!any.is_implemented_by_json(&json!(1)));
    assert!(any.is_implemented_by_json(&json!({})));
}
