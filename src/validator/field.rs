use crate::validation::Validation;
use crate::validator::core::Validator;

/// Field-pipeline combinators.
///
/// `self` is the builder validator: its output `F` is a partially applied
/// record constructor still waiting for this field's value. Each call
/// consumes one field and returns a builder waiting for one argument fewer,
/// until the output is the finished record.
impl<A, E, F> Validator<A, E, F>
where
    A: 'static,
    E: 'static,
    F: 'static,
{
    /// Validates one mandatory field and feeds it to the builder.
    ///
    /// The raw value is extracted with `accessor`. If `is_empty` says the
    /// field is missing, the step fails with `error` and `field` is never
    /// run; otherwise `field` validates the raw value. Either way the
    /// builder also runs against the full input, and the two outcomes merge
    /// without short-circuiting: both-valid applies the constructor,
    /// both-invalid concatenates the builder's earlier errors ahead of this
    /// field's, so a finished pipeline reports errors in field order.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::prelude::*;
    ///
    /// let greeting = Validator::succeed(|s: String| s).required(
    ///     |input: &String| input.clone(),
    ///     |s: &String| s.is_empty(),
    ///     "No hello!",
    ///     Validator::custom(|s: &String| Validation::valid(s.clone())),
    /// );
    ///
    /// assert_eq!(
    ///     greeting.run(&"hello!".to_string()).into_value(),
    ///     Some("hello!".to_string())
    /// );
    ///
    /// let errors: Vec<_> = greeting
    ///     .run(&String::new())
    ///     .into_errors()
    ///     .unwrap()
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(errors, vec!["No hello!"]);
    /// ```
    pub fn required<B, C, D, Get, Empty>(
        self,
        accessor: Get,
        is_empty: Empty,
        error: E,
        field: Validator<B, E, C>,
    ) -> Validator<A, E, D>
    where
        B: 'static,
        C: 'static,
        D: 'static,
        E: Clone,
        F: FnOnce(C) -> D,
        Get: Fn(&A) -> B + 'static,
        Empty: Fn(&B) -> bool + 'static,
    {
        Validator::custom(move |input| {
            let field_result = match non_empty(&is_empty, accessor(input)) {
                Some(raw) => field.run(&raw),
                None => Validation::invalid(error.clone()),
            };
            self.run(input).apply(field_result)
        })
    }

    /// Validates one optional field, substituting `default` when it is empty.
    ///
    /// Emptiness is never an error here: an empty field becomes
    /// `Valid(default)` and `field` is not run. A non-empty field goes
    /// through `field`, and its failure counts like any other. Merging with
    /// the builder works exactly as in [`required`](Validator::required).
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::prelude::*;
    ///
    /// let port = Validator::succeed(|port: u16| port).optional(
    ///     |raw: &String| raw.clone(),
    ///     |s: &String| s.is_empty(),
    ///     8080,
    ///     Validator::custom(|s: &String| {
    ///         Validation::from_result(s.parse::<u16>().map_err(|_| "not a port"))
    ///     }),
    /// );
    ///
    /// assert_eq!(port.run(&String::new()).into_value(), Some(8080));
    /// assert_eq!(port.run(&"9000".to_string()).into_value(), Some(9000));
    /// assert!(port.run(&"many".to_string()).is_invalid());
    /// ```
    pub fn optional<B, C, D, Get, Empty>(
        self,
        accessor: Get,
        is_empty: Empty,
        default: C,
        field: Validator<B, E, C>,
    ) -> Validator<A, E, D>
    where
        B: 'static,
        C: Clone + 'static,
        D: 'static,
        F: FnOnce(C) -> D,
        Get: Fn(&A) -> B + 'static,
        Empty: Fn(&B) -> bool + 'static,
    {
        Validator::custom(move |input| {
            let field_result = match non_empty(&is_empty, accessor(input)) {
                Some(raw) => field.run(&raw),
                None => Validation::Valid(default.clone()),
            };
            self.run(input).apply(field_result)
        })
    }
}

/// Returns the value only when the emptiness predicate rejects it.
fn non_empty<B, P>(is_empty: &P, value: B) -> Option<B>
where
    P: Fn(&B) -> bool,
{
    if is_empty(&value) {
        None
    } else {
        Some(value)
    }
}
