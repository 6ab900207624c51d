//! Property checks for round-trips and terminator truncation.

use base64_dialects::{Dialect, TERMINATOR};
use proptest::prelude::*;

fn dialect() -> impl Strategy<Value = Dialect> {
    prop::sample::select(Dialect::ALL.to_vec())
}

proptest! {
    #[test]
    fn round_trips_without_terminator(
        dialect in dialect(),
        bytes in prop::collection::vec(1u8..=u8::MAX, 0..256),
    ) {
        let decoded = dialect.decode(dialect.encode(&bytes)).unwrap();
        prop_assert_eq!(decoded.value(), bytes.as_slice());
        prop_assert!(!decoded.had_embedded_terminator());
    }

    #[test]
    fn truncates_at_first_terminator(
        dialect in dialect(),
        head in prop::collection::vec(1u8..=u8::MAX, 0..64),
        tail in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut bytes = head.clone();
        bytes.push(TERMINATOR);
        bytes.extend_from_slice(&tail);

        let decoded = dialect.decode(dialect.encode(&bytes)).unwrap();
        prop_assert_eq!(decoded.value(), head.as_slice());
        prop_assert!(decoded.had_embedded_terminator());
    }

    #[test]
    fn foreign_bytes_are_rejected(
        dialect in dialect(),
        bytes in prop::collection::vec(any::<u8>(), 1..64),
        junk in any::<u8>(),
        at in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!dialect.is_valid_byte(junk));
        let mut encoded = dialect.encode(&bytes).into_bytes();
        encoded.insert(at.index(encoded.len() + 1), junk);
        prop_assert!(dialect.decode(&encoded).is_err());
    }
}
