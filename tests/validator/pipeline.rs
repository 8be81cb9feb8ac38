use form_rail::prelude::*;

struct RawForm {
    a: String,
    b: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Fields {
    a: String,
    b: String,
}

fn accept(s: &String) -> Validation<&'static str, String> {
    Validation::valid(s.clone())
}

fn two_required_fields() -> Validator<RawForm, &'static str, Fields> {
    Validator::succeed(|a: String| move |b: String| Fields { a, b })
        .required(
            |form: &RawForm| form.a.clone(),
            |s: &String| s.is_empty(),
            "a is required",
            Validator::custom(accept),
        )
        .required(
            |form: &RawForm| form.b.clone(),
            |s: &String| s.is_empty(),
            "b is required",
            Validator::custom(accept),
        )
}

#[test]
fn identity_pipeline_validates_a_single_required_value() {
    let greeting = Validator::succeed(|s: String| s).required(
        |input: &String| input.clone(),
        |s: &String| s.is_empty(),
        "No hello!",
        Validator::custom(accept),
    );

    assert_eq!(
        greeting.run(&"hello!".to_string()).into_value(),
        Some("hello!".to_string())
    );

    let errors: Vec<_> = greeting
        .run(&String::new())
        .into_errors()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(errors, vec!["No hello!"]);
}

#[test]
fn two_empty_required_fields_report_errors_in_declaration_order() {
    let pipeline = two_required_fields();
    let input = RawForm {
        a: String::new(),
        b: String::new(),
    };

    let errors: Vec<_> = pipeline
        .run(&input)
        .into_errors()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(errors, vec!["a is required", "b is required"]);
}

#[test]
fn both_fields_present_build_the_record() {
    let pipeline = two_required_fields();
    let input = RawForm {
        a: "hello".to_string(),
        b: "world".to_string(),
    };

    assert_eq!(
        pipeline.run(&input).into_value(),
        Some(Fields {
            a: "hello".to_string(),
            b: "world".to_string(),
        })
    );
}

#[test]
fn optional_field_falls_back_to_its_default() {
    let pipeline = Validator::succeed(|a: String| move |b: String| Fields { a, b })
        .required(
            |form: &RawForm| form.a.clone(),
            |s: &String| s.is_empty(),
            "a is required",
            Validator::custom(accept),
        )
        .optional(
            |form: &RawForm| form.b.clone(),
            |s: &String| s.is_empty(),
            "saylor".to_string(),
            Validator::custom(accept),
        );

    let input = RawForm {
        a: "hello".to_string(),
        b: String::new(),
    };
    assert_eq!(
        pipeline.run(&input).into_value(),
        Some(Fields {
            a: "hello".to_string(),
            b: "saylor".to_string(),
        })
    );
}

#[test]
fn optional_field_still_validates_non_empty_input() {
    let pipeline = Validator::succeed(|b: u32| b).optional(
        |form: &RawForm| form.b.clone(),
        |s: &String| s.is_empty(),
        10,
        Validator::custom(|s: &String| {
            Validation::from_result(s.parse::<u32>().map_err(|_| "b is not a number"))
        }),
    );

    let input = RawForm {
        a: String::new(),
        b: "saylor".to_string(),
    };
    let errors: Vec<_> = pipeline
        .run(&input)
        .into_errors()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(errors, vec!["b is not a number"]);
}

#[test]
fn mixed_pipeline_collects_every_fields_error_in_one_pass() {
    struct RawSignup {
        name: String,
        email: String,
        age: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Signup {
        name: String,
        email: String,
        age: u32,
    }

    let signup = Validator::succeed(
        |name: String| move |email: String| move |age: u32| Signup { name, email, age },
    )
    .required(
        |form: &RawSignup| form.name.clone(),
        |s: &String| s.is_empty(),
        "name is required",
        Validator::custom(accept),
    )
    .required(
        |form: &RawSignup| form.email.clone(),
        |s: &String| s.is_empty(),
        "email is required",
        Validator::custom(|s: &String| {
            if s.contains('@') {
                Validation::valid(s.clone())
            } else {
                Validation::invalid("email is malformed")
            }
        }),
    )
    .optional(
        |form: &RawSignup| form.age.clone(),
        |s: &String| s.is_empty(),
        18,
        Validator::custom(|s: &String| {
            Validation::from_result(s.parse::<u32>().map_err(|_| "age is not a number"))
        }),
    );

    let valid = signup.run(&RawSignup {
        name: "ada".to_string(),
        email: "ada@lovelace.dev".to_string(),
        age: String::new(),
    });
    assert_eq!(
        valid.into_value(),
        Some(Signup {
            name: "ada".to_string(),
            email: "ada@lovelace.dev".to_string(),
            age: 18,
        })
    );

    let invalid = signup.run(&RawSignup {
        name: String::new(),
        email: "nowhere".to_string(),
        age: "soon".to_string(),
    });
    let errors: Vec<_> = invalid.into_errors().unwrap().into_iter().collect();
    assert_eq!(
        errors,
        vec!["name is required", "email is malformed", "age is not a number"]
    );
}
