//! Convenience re-exports for common usage patterns.
//!
//! Import everything a typical pipeline needs with:
//!
//! ```
//! use form_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Validator`], [`Validation`], [`ErrorVec`]
//! - **Conversions**: [`result_to_validation`], [`validation_to_result`]
//!
//! # Examples
//!
//! ```
//! use form_rail::prelude::*;
//!
//! let non_empty = Validator::custom(|s: &String| {
//!     if s.is_empty() {
//!         Validation::invalid("required")
//!     } else {
//!         Validation::valid(s.clone())
//!     }
//! });
//!
//! assert!(non_empty.run(&"value".to_string()).is_valid());
//! ```

pub use crate::convert::{result_to_validation, validation_to_result};
pub use crate::validation::{ErrorVec, Validation};
pub use crate::validator::Validator;
