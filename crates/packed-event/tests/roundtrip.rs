use packed_event::{PackedEventBuilder, PackedEventView, TagBuilder};
use proptest::collection::vec;
use proptest::prelude::*;

fn tag_strategy() -> impl Strategy<Value = (u8, Vec<u8>)> {
    (any::<u8>(), vec(any::<u8>(), 0..=255))
}

proptest! {
    #[test]
    fn build_then_view_preserves_fields(
        id in any::<[u8; 32]>(),
        pubkey in any::<[u8; 32]>(),
        created_at in any::<u64>(),
        kind in any::<u64>(),
        expiration in any::<u64>(),
        records in vec(tag_strategy(), 0..16),
    ) {
        let mut tags = TagBuilder::new();
        for (name, value) in &records {
            tags.add(*name, value).unwrap();
        }

        let bytes = PackedEventBuilder::new(&id, &pubkey, created_at, kind, expiration, &tags)
            .unwrap()
            .into_bytes();
        let expected_len = 88 + records.iter().map(|(_, v)| 2 + v.len()).sum::<usize>();
        prop_assert_eq!(bytes.len(), expected_len);

        let view = PackedEventView::new(&bytes).unwrap();
        prop_assert_eq!(view.id(), &id[..]);
        prop_assert_eq!(view.pubkey(), &pubkey[..]);
        prop_assert_eq!(view.created_at(), created_at);
        prop_assert_eq!(view.kind(), kind);
        prop_assert_eq!(view.expiration(), expiration);

        let scanned: Vec<(u8, Vec<u8>)> = view
            .tags()
            .map(|t| t.map(|t| (t.name, t.value.to_vec())))
            .collect::<Result<_, _>>()
            .unwrap();
        prop_assert_eq!(scanned, records);
    }

    #[test]
    fn short_buffers_are_rejected(len in 0usize..88) {
        let buf = vec![0u8; len];
        prop_assert!(PackedEventView::new(&buf).is_err());
    }
}
