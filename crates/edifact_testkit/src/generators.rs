//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random segments and data elements
//! that maintain required invariants.

use edifact_control::Characters;
use edifact_segments::{DataElement, Segment};
use proptest::prelude::*;

/// Strategy for generating valid segment tags.
///
/// Tags are non-empty and alphanumeric, like the real service and business
/// segment codes (`UNH`, `BGM`, ...), but deliberately cover mixed case and
/// digits as well.
pub fn tag_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9]{1,8}").expect("Invalid regex")
}

/// Strategy for generating tags that fail alphanumeric validation.
///
/// Always embeds at least one separator, whitespace or punctuation
/// character inside an otherwise valid tag.
pub fn invalid_tag_strategy() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[A-Za-z0-9]{0,3}").expect("Invalid regex"),
        prop::sample::select(vec!['-', '+', ':', '?', '\'', ' ', '.', '/']),
        prop::string::string_regex("[A-Za-z0-9]{0,3}").expect("Invalid regex"),
    )
        .prop_map(|(head, bad, tail)| format!("{head}{bad}{tail}"))
}

/// Strategy for generating simple data element values.
pub fn simple_element_strategy() -> impl Strategy<Value = DataElement> {
    prop::string::string_regex("[A-Za-z0-9 .]{0,12}")
        .expect("Invalid regex")
        .prop_map(DataElement::Simple)
}

/// Strategy for generating composite data element values.
pub fn composite_element_strategy() -> impl Strategy<Value = DataElement> {
    prop::collection::vec(
        prop::string::string_regex("[A-Za-z0-9]{0,8}").expect("Invalid regex"),
        1..5,
    )
    .prop_map(DataElement::Composite)
}

/// Strategy for generating either element shape.
pub fn element_strategy() -> impl Strategy<Value = DataElement> {
    prop_oneof![simple_element_strategy(), composite_element_strategy()]
}

/// Strategy for generating an ordered element sequence.
pub fn elements_strategy() -> impl Strategy<Value = Vec<DataElement>> {
    prop::collection::vec(element_strategy(), 0..6)
}

/// Strategy for generating whole segments.
pub fn segment_strategy() -> impl Strategy<Value = Segment> {
    (tag_strategy(), elements_strategy()).prop_map(|(tag, elements)| Segment::new(tag, elements))
}

/// Strategy for generating non-standard control-character sets.
///
/// Varies the separators and terminator over characters that never collide
/// with each other or with the remaining defaults.
pub fn characters_strategy() -> impl Strategy<Value = Characters> {
    prop::sample::subsequence(vec!['|', '^', '.', '!', '~', ';', '&', '#', '*', '%'], 3).prop_map(
        |picked| {
            Characters::default()
                .with_component_separator(picked[0])
                .with_data_separator(picked[1])
                .with_segment_terminator(picked[2])
        },
    )
}
