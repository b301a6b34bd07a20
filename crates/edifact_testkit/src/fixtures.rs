//! Segment fixtures for common service segments.
//!
//! Provides ready-made segments for test scenarios that need realistic
//! interchange content without building it by hand.

use edifact_segments::{DataElement, Segment};

/// A `UNH` message header for an ORDERS message.
#[must_use]
pub fn message_header() -> Segment {
    Segment::new(
        "UNH",
        vec![
            DataElement::from("1"),
            DataElement::from(vec!["ORDERS", "D", "96A", "UN"]),
        ],
    )
}

/// A `BGM` beginning-of-message segment for a purchase order.
#[must_use]
pub fn beginning_of_message() -> Segment {
    Segment::new(
        "BGM",
        vec![DataElement::from("220"), DataElement::from("B10001")],
    )
}

/// A `UNT` message trailer matching [`message_header`].
#[must_use]
pub fn message_trailer() -> Segment {
    Segment::new(
        "UNT",
        vec![DataElement::from("3"), DataElement::from("1")],
    )
}

/// A minimal, well-formed message: header, one business segment, trailer.
#[must_use]
pub fn sample_message() -> Vec<Segment> {
    vec![message_header(), beginning_of_message(), message_trailer()]
}
