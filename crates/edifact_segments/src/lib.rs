//! # EDIFACT Segments
//!
//! Segment value type and validating factory for EDIFACT interchanges.
//!
//! A segment is the atomic unit of an interchange: a tagged, ordered group
//! of data elements. This crate provides:
//! - [`Segment`] - the immutable segment value type
//! - [`DataElement`] - simple and composite data element values
//! - [`SegmentFactory`] - tag validation and segment construction
//! - [`SyntaxError`] - the recoverable syntax-error tier
//!
//! Tokenizing raw interchange text into segments and serializing segments
//! back to wire text are collaborator concerns and live outside this crate.
//!
//! ## Example
//!
//! ```rust
//! use edifact_segments::{DataElement, SegmentFactory};
//!
//! let factory = SegmentFactory::default();
//! let segment = factory
//!     .create_segment(
//!         "UNH",
//!         vec![
//!             DataElement::from("1"),
//!             DataElement::from(vec!["ORDERS", "D", "96A", "UN"]),
//!         ],
//!     )
//!     .unwrap();
//!
//! assert_eq!(segment.tag(), "UNH");
//! assert!(factory.create_segment("UN+H", vec![]).is_err());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod element;
mod error;
mod factory;
mod segment;

pub use element::DataElement;
pub use error::{SyntaxError, SyntaxResult};
pub use factory::{default_characters, SegmentFactory};
pub use segment::Segment;
