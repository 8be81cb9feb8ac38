//! Pipeline-style validation for form-like input.
//!
//! A [`Validator`] turns one raw input into either a typed value or a list of
//! errors. The field combinators [`Validator::required`] and
//! [`Validator::optional`] chain validators left to right, one field per
//! step, and keep going past failures so a single run reports every invalid
//! field at once instead of stopping at the first.
//!
//! # Examples
//!
//! ## Validating a whole form
//!
//! ```
//! use form_rail::prelude::*;
//!
//! struct RawForm {
//!     name: String,
//!     age: String,
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Signup {
//!     name: String,
//!     age: u32,
//! }
//!
//! let signup = Validator::succeed(|name: String| move |age: u32| Signup { name, age })
//!     .required(
//!         |form: &RawForm| form.name.clone(),
//!         |name: &String| name.is_empty(),
//!         "name is required",
//!         Validator::custom(|name: &String| Validation::valid(name.clone())),
//!     )
//!     .required(
//!         |form: &RawForm| form.age.clone(),
//!         |age: &String| age.is_empty(),
//!         "age is required",
//!         Validator::custom(|age: &String| {
//!             Validation::from_result(age.parse::<u32>().map_err(|_| "age is not a number"))
//!         }),
//!     );
//!
//! let ok = signup.run(&RawForm {
//!     name: "ada".into(),
//!     age: "36".into(),
//! });
//! assert_eq!(
//!     ok.into_value(),
//!     Some(Signup { name: "ada".into(), age: 36 })
//! );
//!
//! // Both problems are reported in one pass, in field order.
//! let bad = signup.run(&RawForm {
//!     name: String::new(),
//!     age: "soon".into(),
//! });
//! let errors: Vec<_> = bad.into_errors().unwrap().into_iter().collect();
//! assert_eq!(errors, vec!["name is required", "age is not a number"]);
//! ```
//!
//! ## Accumulating outcomes from many items
//!
//! ```
//! use form_rail::validation::Validation;
//!
//! let v1: Validation<&str, i32> = Validation::valid(10);
//! let v2: Validation<&str, i32> = Validation::invalid("error");
//! let combined: Validation<&str, Vec<i32>> = vec![v1, v2].into_iter().collect();
//!
//! assert!(combined.is_invalid());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// std/alloc path aliases for no_std builds
pub mod alloc_type;
/// Conversions between `Result` and `Validation`
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Validation outcome type and error accumulation
pub mod validation;
/// The opaque validator and its combinators
pub mod validator;

pub use convert::*;
pub use validation::{ErrorVec, Validation};
pub use validator::Validator;
