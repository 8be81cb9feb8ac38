use form_rail::validation::Validation;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[test]
fn valid_and_invalid_helpers_behave_as_expected() {
    let valid = Validation::<&str, i32>::valid(5);
    assert!(valid.is_valid());
    assert_eq!(valid.into_value(), Some(5));

    let invalid = Validation::<&str, i32>::invalid("missing");
    assert!(invalid.is_invalid());
    let errors = invalid.into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0], "missing");
}

#[test]
fn invalid_many_keeps_every_error_in_order() {
    let invalid = Validation::<&str, ()>::invalid_many(["first", "second", "third"]);
    let errors: Vec<_> = invalid.into_errors().unwrap().into_iter().collect();
    assert_eq!(errors, vec!["first", "second", "third"]);
}

#[test]
fn map_transforms_valid_and_preserves_invalid() {
    let doubled = Validation::<&str, i32>::valid(21).map(|x| x * 2);
    assert_eq!(doubled.into_value(), Some(42));

    let untouched = Validation::<&str, i32>::invalid("error").map(|x| x * 2);
    assert!(untouched.is_invalid());
}

#[test]
fn and_then_chains_success_and_skips_on_failure() {
    let result = Validation::<&str, i32>::valid(4).and_then(|x| {
        if x % 2 == 0 {
            Validation::valid(x + 1)
        } else {
            Validation::invalid("odd")
        }
    });
    assert_eq!(result.into_value(), Some(5));

    let skipped = Validation::<&str, i32>::invalid("error").and_then(|x| Validation::valid(x));
    assert!(skipped.is_invalid());
}

#[test]
fn or_else_recovers_only_from_invalid() {
    let kept = Validation::<&str, i32>::valid(42).or_else(|_| Validation::valid(0));
    assert_eq!(kept.into_value(), Some(42));

    let recovered = Validation::<&str, i32>::invalid("error").or_else(|_| Validation::valid(0));
    assert_eq!(recovered.into_value(), Some(0));
}

#[test]
fn zip_pairs_values_and_accumulates_errors() {
    let paired = Validation::<&str, i32>::valid(42).zip(Validation::valid("x"));
    assert_eq!(paired.into_value(), Some((42, "x")));

    let left = Validation::<&str, i32>::invalid("error1").zip(Validation::<&str, i32>::valid(1));
    assert_eq!(left.into_errors().unwrap().len(), 1);

    let both = Validation::<&str, i32>::invalid("error1")
        .zip(Validation::<&str, i32>::invalid("error2"));
    let errors: Vec<_> = both.into_errors().unwrap().into_iter().collect();
    assert_eq!(errors, vec!["error1", "error2"]);
}

#[test]
fn apply_applies_function_to_argument() {
    let f: Validation<&str, _> = Validation::valid(|x: i32| x * 2);
    assert_eq!(f.apply(Validation::valid(21)).into_value(), Some(42));
}

#[test]
fn apply_concatenates_errors_function_side_first() {
    let f: Validation<&str, fn(i32) -> i32> = Validation::invalid("no function");
    let x: Validation<&str, i32> = Validation::invalid("no argument");
    let errors: Vec<_> = f.apply(x).into_errors().unwrap().into_iter().collect();
    assert_eq!(errors, vec!["no function", "no argument"]);
}

#[test]
fn apply_passes_lone_failure_through_unchanged() {
    let f: Validation<&str, fn(i32) -> i32> = Validation::invalid("no function");
    let errors: Vec<_> = f
        .apply(Validation::valid(1))
        .into_errors()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(errors, vec!["no function"]);

    let f: Validation<&str, _> = Validation::valid(|x: i32| x);
    let errors: Vec<_> = f
        .apply(Validation::invalid("no argument"))
        .into_errors()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(errors, vec!["no argument"]);
}

#[test]
fn map_err_transforms_all_errors() {
    let invalid: Validation<&str, i32> = Validation::invalid_many(["a", "b"]);
    let mapped = invalid.map_err(|e| format!("ERR:{e}"));

    let errors: Vec<_> = mapped.into_errors().unwrap().into_iter().collect();
    assert_eq!(errors, vec!["ERR:a".to_string(), "ERR:b".to_string()]);
}

#[test]
fn to_result_preserves_all_errors_in_vec() {
    let invalid: Validation<&str, i32> = Validation::invalid_many(["first", "second"]);
    assert_eq!(invalid.to_result().unwrap_err().len(), 2);

    let valid: Validation<&str, i32> = Validation::valid(42);
    assert_eq!(valid.to_result(), Ok(42));
}

#[test]
fn from_result_converts_single_error() {
    let ok = Validation::from_result(Ok::<_, &str>(42));
    assert!(ok.is_valid());

    let err = Validation::from_result(Err::<i32, &str>("boom"));
    assert_eq!(err.into_errors().unwrap()[0], "boom");
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct TestData {
    id: i32,
}

#[test]
#[cfg(feature = "serde")]
fn validation_round_trips_through_serde() {
    let valid = Validation::<String, TestData>::valid(TestData { id: 1 });
    let serialized = serde_json::to_string(&valid).unwrap();
    let deserialized: Validation<String, TestData> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(valid, deserialized);

    let invalid = Validation::<String, TestData>::invalid("error".to_string());
    let serialized = serde_json::to_string(&invalid).unwrap();
    let deserialized: Validation<String, TestData> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(invalid, deserialized);
}
