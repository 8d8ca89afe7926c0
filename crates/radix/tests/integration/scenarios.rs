//! End-to-end conversions through the public encoder API.

use radix::Encoder;
use radix::Error;

use test_case::test_case;

#[test]
fn default_encoder_is_decimal() {
    let encoder = Encoder::new();
    assert_eq!(encoder.encode(152), "152");
    assert_eq!(encoder.decode("42345").unwrap(), 42345);
}

#[test_case(2, 0, "0"; "binary zero")]
#[test_case(2, 5, "101"; "binary five")]
#[test_case(8, 0, "0"; "octal zero")]
#[test_case(16, 0, "0"; "hex zero")]
#[test_case(16, 255, "ff"; "hex ff")]
#[test_case(10, 0, "0"; "decimal zero")]
fn canonical_encode(base: u32, num: u64, expected: &str) {
    let mut encoder = Encoder::new();
    encoder.set_alphabet(base).unwrap();
    assert_eq!(encoder.encode(num), expected);
}

#[test_case(2, "1010", 10; "binary")]
#[test_case(16, "deadbeef", 3_735_928_559; "hex")]
fn canonical_decode(base: u32, s: &str, expected: u64) {
    let mut encoder = Encoder::new();
    encoder.set_alphabet(base).unwrap();
    assert_eq!(encoder.decode(s).unwrap(), expected);
}

#[test]
fn custom_alphabets() {
    let mut encoder = Encoder::new();

    encoder.set_alphabet("ab").unwrap();
    assert_eq!(encoder.encode(5), "bab");
    assert_eq!(encoder.decode("bba").unwrap(), 6);

    encoder.set_alphabet("abcd").unwrap();
    assert_eq!(encoder.encode(0), "a");
    assert_eq!(encoder.encode(6), "bc");
    assert_eq!(encoder.decode("bc").unwrap(), 6);
}

#[test]
fn base_thirty_six_matches_std() {
    let encoder = Encoder::with_alphabet("0123456789abcdefghijklmnopqrstuvwxyz").unwrap();
    for num in [0, 1, 35, 36, 1_295, 46_656, 9_007_199_254_740_991, u64::MAX] {
        let encoded = encoder.encode(num);
        assert_eq!(u64::from_str_radix(&encoded, 36).unwrap(), num);
        assert_eq!(encoder.decode(&encoded).unwrap(), num);
    }
}

#[test]
fn rejected_alphabets() {
    let mut encoder = Encoder::new();

    assert_eq!(encoder.set_alphabet("abca"), Err(Error::DuplicateSymbol('a')));
    assert_eq!(encoder.set_alphabet("a"), Err(Error::AlphabetTooShort(1)));
    assert_eq!(encoder.set_alphabet(7u32), Err(Error::UnsupportedBase(7)));
    for base in [4u32, 20, 100] {
        assert_eq!(encoder.set_alphabet(base), Err(Error::UnsupportedBase(base)));
    }

    assert_eq!(encoder.alphabet(), "0123456789");
}

#[test]
fn decode_rejects_foreign_symbols() {
    let encoder = Encoder::with_alphabet("abc").unwrap();
    let err = encoder.decode("abcd").unwrap_err();

    let message = err.to_string();
    assert!(message.contains("'d'"), "{message}");
    assert!(message.contains("abc"), "{message}");
}

#[test]
fn decode_overflow_is_reported() {
    let encoder = Encoder::with_alphabet(16u32).unwrap();
    assert_eq!(encoder.decode("ffffffffffffffff").unwrap(), u64::MAX);
    assert_eq!(encoder.decode("10000000000000000"), Err(Error::Overflow));
}

#[test]
fn illegal_symbol_is_reported_even_past_overflow() {
    let encoder = Encoder::with_alphabet(2u32).unwrap();
    let input = format!("{}x", "1".repeat(70));

    assert_eq!(
        encoder.decode(&input),
        Err(Error::InvalidSymbol {
            symbol: 'x',
            position: 70,
            alphabet: "01".to_string(),
        })
    );
}
