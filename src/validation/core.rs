use crate::validation::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// The outcome of running a validator: a typed value or accumulated errors.
///
/// `Validation<E, A>` either succeeds with a value of type `A` or fails with
/// one or more errors of type `E`. Unlike `Result`, which fails fast on the
/// first error, `Validation` accumulates all errors, which is what a form
/// pipeline needs to report every invalid field in a single pass.
///
/// Errors are opaque to this crate: they are caller-supplied values carried
/// through unchanged, in the order they were discovered.
///
/// # Serde Support
///
/// `Validation` implements `Serialize` and `Deserialize` when `E` and `A` do.
/// This makes it easy to return validation outcomes from API handlers.
///
/// # Type Parameters
///
/// * `E` - The error type
/// * `A` - The success value type
///
/// # Examples
///
/// ```
/// use form_rail::validation::Validation;
///
/// let valid = Validation::<&str, i32>::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid = Validation::<&str, i32>::invalid("error");
/// assert!(invalid.is_invalid());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Validation<E, A> {
    Valid(A),
    Invalid(ErrorVec<E>),
}

impl<E, A> Validation<E, A> {
    /// Creates a valid outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(42);
    /// assert_eq!(v.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid outcome from a single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid("missing field");
    /// assert!(v.is_invalid());
    /// ```
    #[must_use]
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(smallvec![error])
    }

    /// Creates an invalid outcome from an iterator of errors.
    ///
    /// The iterator should yield at least one error; an empty `Invalid` is
    /// never produced by this crate's own combinators.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid_many(["missing", "invalid"]);
    /// assert_eq!(v.into_errors().unwrap().len(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn invalid_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::Invalid(errors.into_iter().collect())
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if the outcome holds errors.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Maps the valid value using the provided function.
    ///
    /// If the outcome is invalid, the errors are preserved unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(21);
    /// let doubled = v.map(|x| x * 2);
    /// assert_eq!(doubled.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Chains a computation that may itself fail to validate.
    ///
    /// Behaves like [`Result::and_then`]: `f` runs only when the current
    /// outcome is valid, and an invalid outcome passes through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// fn positive(n: i32) -> Validation<&'static str, i32> {
    ///     if n > 0 {
    ///         Validation::valid(n)
    ///     } else {
    ///         Validation::invalid("not positive")
    ///     }
    /// }
    ///
    /// assert!(Validation::valid(3).and_then(positive).is_valid());
    /// assert!(Validation::valid(-3).and_then(positive).is_invalid());
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Calls `op` with the errors if invalid, otherwise keeps the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::invalid("error");
    /// let recovered = v.or_else(|_errors| Validation::valid(42));
    /// assert_eq!(recovered.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn or_else<F>(self, op: F) -> Validation<E, A>
    where
        F: FnOnce(ErrorVec<E>) -> Validation<E, A>,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => op(errors),
        }
    }

    /// Combines two outcomes into a tuple, accumulating all errors.
    ///
    /// If both are valid, returns a tuple of both values. If either or both
    /// are invalid, all errors are kept, `self`'s errors first.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// let v1 = Validation::<&str, i32>::valid(42);
    /// let v2 = Validation::<&str, i32>::valid(21);
    /// assert_eq!(v1.zip(v2).into_value(), Some((42, 21)));
    ///
    /// let v3 = Validation::<&str, i32>::invalid("error1");
    /// let v4 = Validation::<&str, i32>::invalid("error2");
    /// assert_eq!(v3.zip(v4).into_errors().unwrap().len(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn zip<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        match (self, other) {
            (Validation::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Validation::Invalid(e), Validation::Valid(_)) => Validation::Invalid(e),
            (Validation::Valid(_), Validation::Invalid(e)) => Validation::Invalid(e),
            (Validation::Invalid(mut e1), Validation::Invalid(e2)) => {
                e1.extend(e2);
                Validation::Invalid(e1)
            }
        }
    }

    /// Applies a wrapped function to a wrapped argument, accumulating errors.
    ///
    /// This is the single merge rule behind every accumulating combinator in
    /// the crate: if both sides are valid the function is applied; if both
    /// are invalid the error lists are concatenated, function-side errors
    /// first; a lone failure passes through alone. Nothing short-circuits,
    /// so both sides are always evaluated before calling this.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// let f: Validation<&str, _> = Validation::valid(|x: i32| x + 1);
    /// let x = Validation::valid(41);
    /// assert_eq!(f.apply(x).into_value(), Some(42));
    ///
    /// let f: Validation<&str, fn(i32) -> i32> = Validation::invalid("no function");
    /// let x: Validation<&str, i32> = Validation::invalid("no argument");
    /// let errors: Vec<_> = f.apply(x).into_errors().unwrap().into_iter().collect();
    /// assert_eq!(errors, vec!["no function", "no argument"]);
    /// ```
    #[must_use]
    #[inline]
    pub fn apply<B, C>(self, argument: Validation<E, B>) -> Validation<E, C>
    where
        A: FnOnce(B) -> C,
    {
        match (self, argument) {
            (Validation::Valid(f), Validation::Valid(x)) => Validation::Valid(f(x)),
            (Validation::Invalid(e), Validation::Valid(_)) => Validation::Invalid(e),
            (Validation::Valid(_), Validation::Invalid(e)) => Validation::Invalid(e),
            (Validation::Invalid(mut e1), Validation::Invalid(e2)) => {
                e1.extend(e2);
                Validation::Invalid(e1)
            }
        }
    }

    /// Maps each error while preserving the success branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::invalid("error");
    /// let mapped = v.map_err(|e| format!("field: {}", e));
    /// assert!(mapped.is_invalid());
    /// ```
    #[must_use]
    #[inline]
    pub fn map_err<F, G>(self, f: F) -> Validation<G, A>
    where
        F: Fn(E) -> G,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.into_iter().map(f).collect()),
        }
    }

    /// Converts into a `Result`, keeping the full error list on the `Err` side.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::valid(42);
    /// assert_eq!(v.to_result(), Ok(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn to_result(self) -> Result<A, ErrorVec<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Wraps a plain `Result`, turning the error side into a singleton list.
    ///
    /// # Examples
    ///
    /// ```
    /// use form_rail::validation::Validation;
    ///
    /// let v = Validation::from_result("36".parse::<u32>());
    /// assert!(v.is_valid());
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    /// Extracts the error list, if any.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Extracts the value, if valid.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}
