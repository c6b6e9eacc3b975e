//! Property-based tests for the record codec.

use proptest::prelude::*;

use crate::codec::{decode, decode_prefix, encode};
use crate::format::FORMAT_VERSION;
use crate::{CodecError, Record};

fn arb_record() -> impl Strategy<Value = Record> {
    (any::<i32>(), ".*").prop_map(|(int_value, text)| Record::new(int_value, text))
}

proptest! {
    #[test]
    fn round_trip(record in arb_record()) {
        let bytes = encode(&record).unwrap();
        prop_assert_eq!(decode(&bytes).unwrap(), record);
    }

    #[test]
    fn other_versions_are_rejected(
        record in arb_record(),
        version in any::<u64>().prop_filter("not current", |v| *v != FORMAT_VERSION),
        cut in 8usize..64,
    ) {
        let mut bytes = encode(&record).unwrap();
        bytes[..8].copy_from_slice(&version.to_be_bytes());
        bytes.truncate(cut.min(bytes.len()));
        let is_mismatch = matches!(
            decode(&bytes),
            Err(CodecError::FormatVersionMismatch { found, .. }) if found == version
        );
        prop_assert!(is_mismatch);
    }

    #[test]
    fn strict_prefixes_are_truncated(record in arb_record(), cut in any::<prop::sample::Index>()) {
        let bytes = encode(&record).unwrap();
        let len = cut.index(bytes.len());
        let is_truncated = matches!(
            decode(&bytes[..len]),
            Err(CodecError::TruncatedInput { .. })
        );
        prop_assert!(is_truncated);
    }

    #[test]
    fn prefix_decode_ignores_suffix(record in arb_record(), suffix in prop::collection::vec(any::<u8>(), 0..32)) {
        let mut bytes = encode(&record).unwrap();
        let len = bytes.len();
        bytes.extend_from_slice(&suffix);
        prop_assert_eq!(decode_prefix(&bytes).unwrap(), (record, len));
    }
}
