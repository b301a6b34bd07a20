//! The interchange control-character set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// The control characters of an EDIFACT interchange.
///
/// These are the six characters a `UNA` service string advice declares, in
/// advice order. When no advice is transmitted, the interchange uses the
/// standard set `:+,? '`, which is what [`Characters::default`] returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characters {
    /// Separates components inside a composite data element.
    pub component_separator: char,

    /// Separates data elements inside a segment.
    pub data_separator: char,

    /// Decimal notation mark for numeric values.
    pub decimal_mark: char,

    /// Release (escape) character for the other control characters.
    pub release_character: char,

    /// Reserved for future use (position five of the advice).
    pub reserved: char,

    /// Terminates a segment.
    pub segment_terminator: char,
}

impl Default for Characters {
    fn default() -> Self {
        Self {
            component_separator: ':',
            data_separator: '+',
            decimal_mark: ',',
            release_character: '?',
            reserved: ' ',
            segment_terminator: '\'',
        }
    }
}

impl Characters {
    /// Creates the standard control-character set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the component separator.
    #[must_use]
    pub const fn with_component_separator(mut self, c: char) -> Self {
        self.component_separator = c;
        self
    }

    /// Sets the data element separator.
    #[must_use]
    pub const fn with_data_separator(mut self, c: char) -> Self {
        self.data_separator = c;
        self
    }

    /// Sets the decimal mark.
    #[must_use]
    pub const fn with_decimal_mark(mut self, c: char) -> Self {
        self.decimal_mark = c;
        self
    }

    /// Sets the release character.
    #[must_use]
    pub const fn with_release_character(mut self, c: char) -> Self {
        self.release_character = c;
        self
    }

    /// Sets the segment terminator.
    #[must_use]
    pub const fn with_segment_terminator(mut self, c: char) -> Self {
        self.segment_terminator = c;
        self
    }

    /// Returns the six control characters in service string advice order.
    #[must_use]
    pub fn service_string(&self) -> String {
        [
            self.component_separator,
            self.data_separator,
            self.decimal_mark,
            self.release_character,
            self.reserved,
            self.segment_terminator,
        ]
        .iter()
        .collect()
    }
}

impl FromStr for Characters {
    type Err = ControlError;

    /// Parses a service string advice, with or without the `UNA` prefix.
    fn from_str(s: &str) -> ControlResult<Self> {
        let advice = s.strip_prefix("UNA").unwrap_or(s);
        let chars: Vec<char> = advice.chars().collect();

        if chars.len() != 6 {
            return Err(ControlError::invalid_service_string(s));
        }

        Ok(Self {
            component_separator: chars[0],
            data_separator: chars[1],
            decimal_mark: chars[2],
            release_character: chars[3],
            reserved: chars[4],
            segment_terminator: chars[5],
        })
    }
}

impl fmt::Display for Characters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UNA{}", self.service_string())
    }
}
