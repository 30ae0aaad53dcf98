//! Property tests for the codec over arbitrary alphabets.

use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use shortuuid::{Alphabet, Codec, DigitOrder, Uuid};

fn alphabets() -> impl Strategy<Value = String> {
    prop_oneof![
        btree_set(any::<char>(), 2..80).prop_map(|set| set.into_iter().collect::<String>()),
        Just(shortuuid::DEFAULT_ALPHABET.to_string()),
        Just("01".to_string()),
    ]
}

proptest! {
    #[test]
    fn roundtrip(value in any::<u128>(), symbols in alphabets()) {
        let codec = Codec::with_alphabet(&symbols).unwrap();
        let uuid = Uuid::from_u128(value);
        let encoded = codec.encode(&uuid);
        prop_assert_eq!(codec.decode(&encoded).unwrap(), uuid);
    }

    #[test]
    fn fixed_width(value in any::<u128>(), symbols in alphabets()) {
        let codec = Codec::with_alphabet(&symbols).unwrap();
        let expected = codec.length();
        prop_assert_eq!(codec.encode(&Uuid::from_u128(value)).chars().count(), expected);
        prop_assert_eq!(codec.encode(&Uuid::nil()).chars().count(), expected);
        prop_assert_eq!(codec.encode(&Uuid::from_u128(u128::MAX)).chars().count(), expected);
    }

    #[test]
    fn legacy_reads_reversed_strings(value in any::<u128>()) {
        let codec = Codec::default();
        let uuid = Uuid::from_u128(value);
        let legacy: String = codec.encode(&uuid).chars().rev().collect();
        prop_assert_eq!(codec.decode_with(&legacy, DigitOrder::Legacy).unwrap(), uuid);
    }

    #[test]
    fn alphabet_ignores_order_and_duplicates(symbols in vec(any::<char>(), 2..60)) {
        let mut shuffled = symbols.clone();
        shuffled.reverse();
        shuffled.extend(symbols.iter().copied());

        let a = Alphabet::from_symbols(symbols);
        let b = Alphabet::from_symbols(shuffled);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn random_stays_in_alphabet(length in 0usize..64, symbols in alphabets()) {
        let codec = Codec::with_alphabet(&symbols).unwrap();
        let token = codec.random(Some(length));
        prop_assert_eq!(token.chars().count(), length);
        prop_assert!(token.chars().all(|c| codec.alphabet().contains(c)));
    }

    #[test]
    fn unpadded_has_no_leading_zero(value in 1..=u128::MAX) {
        let codec = Codec::default();
        let encoded = codec.encode_padded(&Uuid::from_u128(value), 0);
        prop_assert!(!encoded.starts_with(codec.alphabet().zero()));
        prop_assert_eq!(codec.decode(&encoded).unwrap().as_u128(), value);
    }
}
