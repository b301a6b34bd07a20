//! The segment value type.

use std::fmt;

use crate::element::DataElement;

/// A low-level segment of an EDI interchange.
///
/// A segment is a tagged, ordered group of data elements. The tag is stored
/// verbatim (no case normalization) and the element sequence is preserved
/// exactly as given, including the simple/composite shape of each element.
///
/// The basic constructor only enforces the non-empty-tag precondition;
/// syntactic validation of candidate tags belongs to
/// [`SegmentFactory`](crate::SegmentFactory). Once constructed, a segment is
/// never mutated and is safe to share across threads.
///
/// Two segments are equal iff their tags and their element sequences are
/// equal, element by element. A composite element and a simple element are
/// never equal, even when they would serialize to the same text.
#[derive(Clone, PartialEq, Eq)]
pub struct Segment {
    /// Alphanumeric code identifying the segment's role, e.g. `UNH`.
    tag: String,
    /// The data elements, in interchange order.
    elements: Vec<DataElement>,
}

impl Segment {
    /// Creates a new segment.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is empty. An empty tag is a programming error, not a
    /// user-input error; callers holding untrusted input go through
    /// [`SegmentFactory`](crate::SegmentFactory) instead.
    #[must_use]
    pub fn new(tag: impl Into<String>, elements: Vec<DataElement>) -> Self {
        let tag = tag.into();
        assert!(!tag.is_empty(), "segment tag must not be empty");
        Self { tag, elements }
    }

    /// Returns the segment tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the data elements in interchange order.
    #[must_use]
    pub fn elements(&self) -> &[DataElement] {
        &self.elements
    }

    /// Consumes the segment, returning its data elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<DataElement> {
        self.elements
    }

    fn fmt_elements(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Segment {
    /// Descriptive form, e.g. `'UNH' EDI segment: ['1', ['ORDERS', 'D']]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' EDI segment: ", self.tag)?;
        self.fmt_elements(f)
    }
}

impl fmt::Debug for Segment {
    /// Short form, e.g. `UNH segment: ['1', ['ORDERS', 'D']]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} segment: ", self.tag)?;
        self.fmt_elements(f)
    }
}
