use crate::alloc_type::Rc;
use crate::validation::Validation;

/// An opaque, reusable validation function from `&A` to [`Validation<E, B>`].
///
/// A `Validator` carries no state beyond the pure function it wraps: running
/// the same validator on the same input always produces the same outcome,
/// and every combinator returns a new `Validator` instead of mutating one.
/// Cloning is cheap (the wrapped function is shared).
///
/// # Type Parameters
///
/// * `A` - The input the validator reads (a whole form, or one raw field)
/// * `E` - The caller-defined error type, carried through opaquely
/// * `B` - The validated output type
///
/// # Examples
///
/// ```
/// use form_rail::prelude::*;
///
/// let non_blank = Validator::custom(|s: &String| {
///     if s.trim().is_empty() {
///         Validation::invalid("blank")
///     } else {
///         Validation::valid(s.trim().to_string())
///     }
/// });
///
/// assert_eq!(
///     non_blank.run(&"  form-rail  ".to_string()).into_value(),
///     Some("form-rail".to_string())
/// );
/// assert!(non_blank.run(&"   ".to_string()).is_invalid());
/// ```
#[must_use]
pub struct Validator<A, E, B> {
    inner: Rc<dyn Fn(&A) -> Validation<E, B>>,
}

impl<A, E, B> Clone for Validator<A, E, B> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A, E, B> Validator<A, E, B>
where
    A: 'static,
    E: 'static,
    B: 'static,
{
    /// Wraps an arbitrary validating function verbatim.
    ///
    /// The function receives the input by shared reference so the same input
    /// can be threaded through every validator in a pipeline.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::prelude::*;
    ///
    /// let length = Validator::<_, &str, _>::custom(|s: &String| Validation::valid(s.len()));
    /// assert_eq!(length.run(&"form".to_string()).into_value(), Some(4));
    /// ```
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&A) -> Validation<E, B> + 'static,
    {
        Self { inner: Rc::new(f) }
    }

    /// Runs the validator against an input.
    ///
    /// Pure and side-effect-free; may be called any number of times with
    /// different inputs.
    pub fn run(&self, input: &A) -> Validation<E, B> {
        (self.inner)(input)
    }

    /// A validator that ignores its input and always succeeds with `value`.
    ///
    /// This is the starting point of a field pipeline: seed it with the
    /// record constructor, then chain [`required`](Validator::required) /
    /// [`optional`](Validator::optional) once per field.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::prelude::*;
    ///
    /// let v: Validator<i32, &str, &str> = Validator::succeed("ok");
    /// assert_eq!(v.run(&7).into_value(), Some("ok"));
    /// ```
    pub fn succeed(value: B) -> Self
    where
        B: Clone,
    {
        Self::custom(move |_| Validation::Valid(value.clone()))
    }

    /// A validator that ignores its input and always fails with `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::prelude::*;
    ///
    /// let v: Validator<i32, &str, i32> = Validator::fail("nope");
    /// let errors: Vec<_> = v.run(&7).into_errors().unwrap().into_iter().collect();
    /// assert_eq!(errors, vec!["nope"]);
    /// ```
    pub fn fail(error: E) -> Self
    where
        E: Clone,
    {
        Self::custom(move |_| Validation::invalid(error.clone()))
    }

    /// Transforms a successful output with `f`; failures pass through.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::prelude::*;
    ///
    /// let parse = Validator::custom(|s: &String| {
    ///     Validation::from_result(s.parse::<u32>().map_err(|_| "not a number"))
    /// });
    /// let doubled = parse.map(|n| n * 2);
    /// assert_eq!(doubled.run(&"21".to_string()).into_value(), Some(42));
    /// ```
    pub fn map<C, F>(self, f: F) -> Validator<A, E, C>
    where
        C: 'static,
        F: Fn(B) -> C + 'static,
    {
        Validator::custom(move |input| self.run(input).map(&f))
    }

    /// Runs two validators against the same input and combines both outputs.
    ///
    /// Neither side short-circuits: both validators always run, and if both
    /// fail the error lists are concatenated with `first`'s errors ahead of
    /// `second`'s. Stopping at the first failure here would defeat the whole
    /// point of the crate.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::prelude::*;
    ///
    /// let fail1: Validator<i32, &str, i32> = Validator::fail("first");
    /// let fail2: Validator<i32, &str, i32> = Validator::fail("second");
    /// let both = Validator::map2(|x, y| x + y, fail1, fail2);
    ///
    /// let errors: Vec<_> = both.run(&0).into_errors().unwrap().into_iter().collect();
    /// assert_eq!(errors, vec!["first", "second"]);
    /// ```
    pub fn map2<C, D, F>(
        f: F,
        first: Validator<A, E, B>,
        second: Validator<A, E, C>,
    ) -> Validator<A, E, D>
    where
        C: 'static,
        D: 'static,
        F: Fn(B, C) -> D + 'static,
    {
        Validator::custom(move |input| {
            let f = &f;
            first
                .run(input)
                .map(|b| move |c| f(b, c))
                .apply(second.run(input))
        })
    }

    /// Applies a validated function to a validated value.
    ///
    /// `self` supplies the argument and `with_fn` supplies the function;
    /// the argument-first order keeps the accumulating builder on the right
    /// of a left-to-right pipeline. Defined in terms of
    /// [`map2`](Validator::map2), so a double failure concatenates
    /// `with_fn`'s errors ahead of `self`'s.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::prelude::*;
    ///
    /// let value: Validator<i32, &str, i32> = Validator::custom(|n: &i32| Validation::valid(*n));
    /// let builder = Validator::succeed(|n: i32| n + 1);
    /// assert_eq!(value.and_map(builder).run(&41).into_value(), Some(42));
    /// ```
    pub fn and_map<C, F>(self, with_fn: Validator<A, E, F>) -> Validator<A, E, C>
    where
        C: 'static,
        F: FnOnce(B) -> C + 'static,
    {
        Validator::map2(|func, value| func(value), with_fn, self)
    }

    /// Chains a dependent validation decided by the first one's output.
    ///
    /// Runs `self`; on success, `f` picks the next validator, which then runs
    /// against the original input. On failure the errors propagate and `f`
    /// is never invoked. This is the one combinator that short-circuits:
    /// the second step cannot be attempted without the first step's value.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::prelude::*;
    ///
    /// let kind = Validator::custom(|s: &String| {
    ///     Validation::<&str, _>::valid(s.starts_with("admin:"))
    /// });
    /// let gated = kind.and_then(|is_admin| {
    ///     if is_admin {
    ///         Validator::custom(|s: &String| Validation::valid(s.clone()))
    ///     } else {
    ///         Validator::fail("not an admin")
    ///     }
    /// });
    ///
    /// assert!(gated.run(&"admin:root".to_string()).is_valid());
    /// assert!(gated.run(&"guest".to_string()).is_invalid());
    /// ```
    pub fn and_then<C, F>(self, f: F) -> Validator<A, E, C>
    where
        C: 'static,
        F: Fn(B) -> Validator<A, E, C> + 'static,
    {
        Validator::custom(move |input| match self.run(input) {
            Validation::Valid(value) => f(value).run(input),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        })
    }
}
