//! Conversion helpers between `Result` and `Validation`.
//!
//! These adapters sit at the boundary of a pipeline: wrap a plain parse
//! result into a [`Validation`] on the way in, or flatten an accumulated
//! outcome back into per-error `Result`s on the way out.
//!
//! # Examples
//!
//! ```
//! use form_rail::convert::*;
//! use form_rail::validation::Validation;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let validation = result_to_validation(result);
//! assert!(validation.is_valid());
//! ```

use crate::validation::{ErrorVec, Validation};
use core::iter::FusedIterator;

/// Converts a `Validation` to a `Result`, taking the first error if invalid.
///
/// Later errors are discarded; use [`Validation::to_result`] to keep the
/// whole list.
///
/// # Panics
///
/// Panics if the `Validation::Invalid` variant contains no errors, which the
/// crate's own constructors never produce.
///
/// # Examples
///
/// ```
/// use form_rail::convert::validation_to_result;
/// use form_rail::validation::Validation;
///
/// let invalid = Validation::<&str, i32>::invalid_many(["first", "second"]);
/// assert_eq!(validation_to_result(invalid), Err("first"));
/// ```
#[inline]
pub fn validation_to_result<T, E>(validation: Validation<E, T>) -> Result<T, E> {
    match validation {
        Validation::Valid(value) => Ok(value),
        Validation::Invalid(errors) => {
            let error = errors
                .into_iter()
                .next()
                .expect("Validation::Invalid must contain at least one error");
            Err(error)
        }
    }
}

/// Converts a `Result` to a `Validation` with a singleton error list.
///
/// # Examples
///
/// ```
/// use form_rail::convert::result_to_validation;
///
/// let validation = result_to_validation(Err::<i32, _>("failed"));
/// assert!(validation.is_invalid());
/// ```
#[inline]
pub fn result_to_validation<T, E>(result: Result<T, E>) -> Validation<E, T> {
    match result {
        Ok(value) => Validation::Valid(value),
        Err(error) => Validation::invalid(error),
    }
}

/// Collects loose errors into a single `Validation<E, ()>`.
///
/// # Examples
///
/// ```
/// use form_rail::convert::collect_errors;
///
/// let validation = collect_errors(vec!["error1", "error2"]);
/// assert!(validation.is_invalid());
///
/// let none: Vec<&str> = vec![];
/// assert!(collect_errors(none).is_valid());
/// ```
#[inline]
pub fn collect_errors<E, I>(errors: I) -> Validation<E, ()>
where
    I: IntoIterator<Item = E>,
{
    let error_vec: ErrorVec<E> = errors.into_iter().collect();
    if error_vec.is_empty() {
        Validation::Valid(())
    } else {
        Validation::invalid_many(error_vec)
    }
}

/// Iterator returned by [`split_validation_errors`].
pub enum SplitValidationIter<T, E> {
    Valid(Option<T>),
    Invalid(<ErrorVec<E> as IntoIterator>::IntoIter),
}

impl<T, E> Iterator for SplitValidationIter<T, E> {
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Valid(opt) => opt.take().map(Ok),
            Self::Invalid(iter) => iter.next().map(Err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Valid(opt) => {
                let len = usize::from(opt.is_some());
                (len, Some(len))
            }
            Self::Invalid(iter) => iter.size_hint(),
        }
    }
}

impl<T, E> ExactSizeIterator for SplitValidationIter<T, E> {}
impl<T, E> FusedIterator for SplitValidationIter<T, E> {}

/// Splits a `Validation` into individual `Result` values.
///
/// A valid outcome yields a single `Ok`; an invalid outcome yields one
/// `Err` per accumulated error, in discovery order.
///
/// # Examples
///
/// ```
/// use form_rail::convert::split_validation_errors;
/// use form_rail::validation::Validation;
///
/// let invalid = Validation::<&str, i32>::invalid_many(vec!["err1", "err2"]);
/// let results: Vec<_> = split_validation_errors(invalid).collect();
/// assert_eq!(results, vec![Err("err1"), Err("err2")]);
/// ```
pub fn split_validation_errors<T, E>(validation: Validation<E, T>) -> SplitValidationIter<T, E> {
    match validation {
        Validation::Valid(value) => SplitValidationIter::Valid(Some(value)),
        Validation::Invalid(errors) => SplitValidationIter::Invalid(errors.into_iter()),
    }
}
