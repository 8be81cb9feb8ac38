//! The opaque [`Validator`] and its combinators.
//!
//! A `Validator<A, E, B>` wraps a pure function from a shared input `&A` to a
//! [`Validation<E, B>`](crate::validation::Validation). Construction goes
//! through [`Validator::custom`], [`Validator::succeed`],
//! [`Validator::fail`], or a combinator; the wrapped function itself is
//! never exposed, which is what keeps the accumulation rules airtight.
//!
//! Two kinds of composition live here:
//!
//! - generic combinators ([`Validator::map`], [`Validator::map2`],
//!   [`Validator::and_map`], [`Validator::and_then`]) that know nothing
//!   about fields, and
//! - the field-pipeline combinators ([`Validator::required`],
//!   [`Validator::optional`]) that thread a record constructor through a
//!   chain of per-field validators, collecting every field's errors.
pub mod core;
pub mod field;

pub use self::core::*;
