use packed_event::{
    PackedEvent, PackedEventBuilder, PackedEventError, PackedEventView, ScanMode, Tag, TagBuilder,
    HEADER_SIZE,
};
use std::ops::ControlFlow;
use std::thread;

fn sample_tags() -> TagBuilder {
    let mut tags = TagBuilder::new();
    tags.add(b'e', b"deadbeef").unwrap();
    tags.add(b'p', b"cafebabe").unwrap();
    tags
}

fn sample_event() -> Vec<u8> {
    PackedEventBuilder::new(&[0u8; 32], &[1u8; 32], 1_700_000_000, 1, 0, &sample_tags())
        .unwrap()
        .into_bytes()
}

#[test]
fn test_end_to_end_example() {
    let bytes = sample_event();
    assert_eq!(bytes.len(), 108);

    let view = PackedEventView::new(&bytes).unwrap();
    assert_eq!(view.id(), &[0u8; 32]);
    assert_eq!(view.pubkey(), &[1u8; 32]);
    assert_eq!(view.created_at(), 1_700_000_000);
    assert_eq!(view.kind(), 1);
    assert_eq!(view.expiration(), 0);

    let tags: Vec<(u8, Vec<u8>)> = view
        .tags()
        .map(|t| t.map(|t| (t.name, t.value.to_vec())))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        tags,
        vec![
            (b'e', b"deadbeef".to_vec()),
            (b'p', b"cafebabe".to_vec())
        ]
    );
}

#[test]
fn test_minimum_length() {
    let short = vec![0u8; HEADER_SIZE - 1];
    assert!(matches!(
        PackedEventView::new(&short),
        Err(PackedEventError::Format { len: 87, .. })
    ));
    assert!(PackedEvent::from_bytes(short).is_err());

    let exact = vec![0u8; HEADER_SIZE];
    let view = PackedEventView::new(&exact).unwrap();
    assert!(view.tags().next().is_none());
    assert_eq!(view.kind(), 0);
}

#[test]
fn test_tag_size_boundary() {
    let mut tags = TagBuilder::new();
    assert!(tags.add(b'x', &[0u8; 255]).is_ok());
    assert!(matches!(
        tags.add(b'x', &[0u8; 256]),
        Err(PackedEventError::ValueTooLarge { size: 256, max: 255 })
    ));

    let bytes = PackedEventBuilder::new(&[0; 32], &[0; 32], 0, 0, 0, &tags)
        .unwrap()
        .into_bytes();
    let view = PackedEventView::new(&bytes).unwrap();
    let tag = view.tags().next().unwrap().unwrap();
    assert_eq!(tag.value.len(), 255);
    assert_eq!(view.validate().unwrap(), 1);
}

#[test]
fn test_visitor_early_exit() {
    let mut tags = sample_tags();
    tags.add(b't', b"third").unwrap();
    let bytes = PackedEventBuilder::new(&[0; 32], &[0; 32], 0, 0, 0, &tags)
        .unwrap()
        .into_bytes();
    let view = PackedEventView::new(&bytes).unwrap();

    let mut calls = 0;
    view.for_each_tag(|_| {
        calls += 1;
        ControlFlow::Break(())
    })
    .unwrap();
    assert_eq!(calls, 1);

    let mut seen = Vec::new();
    view.for_each_tag(|tag| {
        seen.push(tag.name);
        ControlFlow::Continue(())
    })
    .unwrap();
    assert_eq!(seen, vec![b'e', b'p', b't']);
}

#[test]
fn test_matcher_semantics() {
    let bytes = sample_event();
    let view = PackedEventView::new(&bytes).unwrap();

    assert!(!view.has_tag_with_value("", b"x").unwrap());
    assert!(view.has_tag_with_value("e", b"deadbeef").unwrap());
    assert!(!view.has_tag_with_value("e", b"other").unwrap());
    assert!(view.has_tag_with_value("event", b"deadbeef").unwrap());
    assert!(view.has_tag_with_value("pubkey", b"cafebabe").unwrap());
    assert!(!view.has_tag_with_value("p", b"deadbeef").unwrap());
}

#[test]
fn test_builder_rejects_short_identity() {
    let result = PackedEventBuilder::new(&[0u8; 31], &[1u8; 32], 0, 0, 0, &TagBuilder::new());
    assert!(matches!(
        result,
        Err(PackedEventError::InvalidLength {
            field: "id",
            expected: 32,
            actual: 31
        })
    ));
}

#[test]
fn test_owned_event_views() {
    let event = PackedEventBuilder::new(&[7; 32], &[8; 32], 10, 20, 30, &sample_tags())
        .unwrap()
        .finish();
    let stored = event.clone().into_bytes();
    let restored = PackedEvent::from_bytes(stored).unwrap();
    assert_eq!(restored, event);

    let view = restored.view();
    assert_eq!(view.as_bytes(), event.as_bytes());
    assert_eq!(view.expiration_at(), Some(30));
    assert_eq!(view.mode(), ScanMode::Strict);
    assert_eq!(
        restored.view_with_mode(ScanMode::Permissive).mode(),
        ScanMode::Permissive
    );
}

#[test]
fn test_corrupted_tail_policies() {
    let mut bytes = sample_event();
    bytes.truncate(bytes.len() - 3);

    let strict = PackedEventView::new(&bytes).unwrap();
    let results: Vec<_> = strict.tags().collect();
    assert_eq!(
        results,
        vec![
            Ok(Tag {
                name: b'e',
                value: b"deadbeef"
            }),
            Err(PackedEventError::TruncatedTag { offset: 98 })
        ]
    );
    assert!(strict.has_tag_with_value("e", b"deadbeef").unwrap());
    assert!(strict.has_tag_with_value("p", b"cafebabe").is_err());

    let permissive = PackedEventView::with_mode(&bytes, ScanMode::Permissive).unwrap();
    assert_eq!(permissive.tags().count(), 1);
    assert!(!permissive.has_tag_with_value("p", b"cafebabe").unwrap());
}

#[test]
fn test_concurrent_readers() {
    let bytes = sample_event();
    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let view = PackedEventView::new(&bytes).unwrap();
                assert!(view.has_tag_with_value("p", b"cafebabe").unwrap());
                assert_eq!(view.validate().unwrap(), 2);
            });
        }
    });
}
