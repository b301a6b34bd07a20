//! Segment construction with tag validation.

use std::sync::OnceLock;

use edifact_control::Characters;
use tracing::{debug, trace};

use crate::element::DataElement;
use crate::error::{SyntaxError, SyntaxResult};
use crate::segment::Segment;

static DEFAULT_CHARACTERS: OnceLock<Characters> = OnceLock::new();

/// Returns the process-wide default control-character set.
///
/// Initialized exactly once, on first use, no matter how many threads race
/// to construct their first default factory.
pub fn default_characters() -> &'static Characters {
    DEFAULT_CHARACTERS.get_or_init(Characters::default)
}

/// Factory for producing segments.
///
/// The factory validates candidate tags before construction and holds the
/// interchange's control-character set. The configuration is exposed for
/// collaborating layers (tokenizer, serializer) but is not consulted by tag
/// validation itself.
#[derive(Debug, Clone)]
pub struct SegmentFactory {
    characters: Characters,
}

impl SegmentFactory {
    /// Creates a factory for an interchange using the given control characters.
    #[must_use]
    pub fn new(characters: Characters) -> Self {
        Self { characters }
    }

    /// Returns the control-character set this factory was built with.
    #[must_use]
    pub fn characters(&self) -> &Characters {
        &self.characters
    }

    /// Creates a new segment from a candidate tag and its data elements.
    ///
    /// The tag must be non-empty and consist solely of alphanumeric
    /// characters. On success the elements are carried over unchanged in
    /// order and structure.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::EmptyTag`] or
    /// [`SyntaxError::TagNotAlphanumeric`].
    pub fn create_segment(
        &self,
        tag: &str,
        elements: Vec<DataElement>,
    ) -> SyntaxResult<Segment> {
        if let Err(err) = validate_tag(tag) {
            debug!(tag, %err, "rejected segment tag");
            return Err(err);
        }

        trace!(tag, element_count = elements.len(), "created segment");
        Ok(Segment::new(tag, elements))
    }

    /// Creates a new segment from an untyped candidate tag.
    ///
    /// This is the boundary entry point for external or deserialized data,
    /// where the tag position may hold any element shape. A composite value
    /// in tag position is reported as a syntax error rather than a panic.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::EmptyTag`], [`SyntaxError::TagNotText`] or
    /// [`SyntaxError::TagNotAlphanumeric`], checked in that order.
    pub fn create_segment_raw(
        &self,
        tag: DataElement,
        elements: Vec<DataElement>,
    ) -> SyntaxResult<Segment> {
        if tag.is_empty() {
            debug!("rejected segment with empty tag");
            return Err(SyntaxError::EmptyTag);
        }

        match tag {
            DataElement::Simple(tag) => self.create_segment(&tag, elements),
            composite @ DataElement::Composite(_) => {
                debug!(value = %composite, "rejected non-text segment tag");
                Err(SyntaxError::tag_not_text("composite", composite.to_string()))
            }
        }
    }
}

impl Default for SegmentFactory {
    /// Creates a factory over the shared default control characters.
    fn default() -> Self {
        Self::new(default_characters().clone())
    }
}

fn validate_tag(tag: &str) -> SyntaxResult<()> {
    if tag.is_empty() {
        return Err(SyntaxError::EmptyTag);
    }

    if !tag.chars().all(char::is_alphanumeric) {
        return Err(SyntaxError::tag_not_alphanumeric(tag));
    }

    Ok(())
}
