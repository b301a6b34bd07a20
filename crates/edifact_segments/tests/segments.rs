//! Integration tests for segment construction and validation.

use std::thread;

use edifact_segments::{default_characters, DataElement, SegmentFactory, SyntaxError};
use edifact_testkit::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn valid_tags_construct_segments(
        tag in tag_strategy(),
        elements in elements_strategy(),
    ) {
        let factory = SegmentFactory::default();
        let segment = factory.create_segment(&tag, elements.clone()).unwrap();

        prop_assert_eq!(segment.tag(), tag.as_str());
        prop_assert_eq!(segment.elements(), &elements[..]);
    }

    #[test]
    fn invalid_tags_are_rejected(
        tag in invalid_tag_strategy(),
        elements in elements_strategy(),
    ) {
        let factory = SegmentFactory::default();
        let result = factory.create_segment(&tag, elements);

        prop_assert!(
            matches!(result, Err(SyntaxError::TagNotAlphanumeric { .. })),
            "expected TagNotAlphanumeric error"
        );
    }

    #[test]
    fn raw_path_matches_typed_path_for_simple_tags(
        tag in tag_strategy(),
        elements in elements_strategy(),
    ) {
        let factory = SegmentFactory::default();
        let typed = factory.create_segment(&tag, elements.clone()).unwrap();
        let raw = factory
            .create_segment_raw(DataElement::Simple(tag), elements)
            .unwrap();

        prop_assert_eq!(typed, raw);
    }

    #[test]
    fn generated_segments_roundtrip_equality(segment in segment_strategy()) {
        let same = segment.clone();
        prop_assert_eq!(&segment, &same);
    }

    #[test]
    fn validation_is_independent_of_configured_characters(
        characters in characters_strategy(),
        tag in tag_strategy(),
        elements in elements_strategy(),
    ) {
        // The configuration is an inert hook: any character set accepts the
        // same tags and rejects the same tags
        let factory = SegmentFactory::new(characters);

        let segment = factory.create_segment(&tag, elements.clone()).unwrap();
        prop_assert_eq!(segment.tag(), tag.as_str());
        prop_assert_eq!(segment.elements(), &elements[..]);

        prop_assert!(factory.create_segment("AB-1", vec![]).is_err());
        prop_assert_eq!(
            factory.create_segment("", vec![]),
            Err(SyntaxError::EmptyTag)
        );
    }
}

#[test]
fn empty_tag_error_message() {
    let factory = SegmentFactory::default();
    let err = factory.create_segment("", vec![]).unwrap_err();

    assert_eq!(err, SyntaxError::EmptyTag);
    assert_eq!(err.to_string(), "The tag of a segment must not be empty.");
}

#[test]
fn wrong_type_error_message_names_the_value() {
    let factory = SegmentFactory::default();
    let err = factory
        .create_segment_raw(DataElement::from(vec!["UNH", "1"]), vec![])
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "The tag name of a segment must be a string, but is a composite: ['UNH', '1']"
    );
}

#[test]
fn non_alphanumeric_error_message_names_the_tag() {
    let factory = SegmentFactory::default();
    let err = factory.create_segment("AB-1", vec![]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Tag 'AB-1': A tag name must only contain alphanumeric characters."
    );
}

#[test]
fn independent_constructions_share_no_state() {
    let factory = SegmentFactory::default();
    let elements = vec![DataElement::from("220"), DataElement::from("B10001")];

    let first = factory.create_segment("BGM", elements.clone()).unwrap();
    let second = factory.create_segment("BGM", elements.clone()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, beginning_of_message());

    // Dropping one leaves the other intact
    drop(first);
    assert_eq!(second.elements(), &elements[..]);
}

#[test]
fn fixtures_are_well_formed() {
    let factory = SegmentFactory::default();

    for segment in sample_message() {
        let rebuilt = factory
            .create_segment(segment.tag(), segment.elements().to_vec())
            .unwrap();
        assert_eq!(rebuilt, segment);
    }
}

#[test]
fn concurrent_default_factories_observe_one_configuration() {
    let observed: Vec<_> = thread::scope(|scope| {
        (0..8)
            .map(|i| {
                scope.spawn(move || {
                    let factory = SegmentFactory::default();
                    let segment = factory
                        .create_segment("UNH", vec![DataElement::from(i.to_string())])
                        .unwrap();
                    assert_eq!(segment.tag(), "UNH");
                    factory.characters().clone()
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for characters in &observed {
        assert_eq!(characters, default_characters());
    }

    // The shared default is a single instance, not re-created per call
    assert!(std::ptr::eq(default_characters(), default_characters()));
}
