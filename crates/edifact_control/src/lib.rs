//! # EDIFACT Control
//!
//! Control-character configuration for EDIFACT interchanges.
//!
//! An interchange declares (or defaults) the set of delimiter and escape
//! characters used to serialize and parse its segments. This crate provides
//! that set as an opaque configuration value, [`Characters`], consumed by the
//! segment layer and by collaborating parser/serializer layers.
//!
//! The segment core stores a `Characters` value but does not interpret it;
//! interpretation happens in the tokenizer and serializer layers.
//!
//! ## Example
//!
//! ```rust
//! use edifact_control::Characters;
//!
//! let characters = Characters::default();
//! assert_eq!(characters.service_string(), ":+,? '");
//!
//! let custom: Characters = "UNA:+.? '".parse().unwrap();
//! assert_eq!(custom.decimal_mark, '.');
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod characters;
mod error;

pub use characters::Characters;
pub use error::{ControlError, ControlResult};
