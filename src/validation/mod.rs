//! The validation outcome type and error accumulation.
//!
//! [`Validation`] is what running a validator produces: either a typed value
//! or every error discovered along the way. Unlike `Result`, combining two
//! `Validation`s keeps both error lists, which is what lets a form pipeline
//! report all invalid fields in one pass.
//!
//! # Examples
//!
//! ```
//! use form_rail::validation::Validation;
//!
//! let valid: Validation<String, i32> = Validation::Valid(42);
//! assert!(valid.is_valid());
//!
//! let invalid: Validation<&str, i32> = Validation::invalid_many(["err1", "err2"]);
//! assert_eq!(invalid.iter_errors().count(), 2);
//! ```
use smallvec::SmallVec;

pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;

/// SmallVec-backed list of accumulated validation errors.
///
/// Inline storage for two elements: a failing form run usually surfaces only
/// a couple of errors, so most runs never touch the heap.
pub type ErrorVec<E> = SmallVec<[E; 2]>;
