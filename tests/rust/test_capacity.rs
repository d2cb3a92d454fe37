use super::*;
use proptest::prelude::*;

// ── Parsing ───────────────────────────────────────────────────────────────────

#[test]
fn test_parse_decimal() {
    let c = Capacity::parse("250000000").unwrap();
    assert_eq!(c, Capacity::from(250_000_000));
}

#[test]
fn test_parse_hex() {
    let c = Capacity::parse("0x2540be400").unwrap();
    assert_eq!(c, Capacity::from(10_000_000_000));
    assert_eq!(Capacity::parse("0X10").unwrap(), Capacity::from(16));
}

#[test]
fn test_parse_beyond_53_bits() {
    // 2^53 + 1 cannot be represented as an f64.
    let c = Capacity::parse("9007199254740993").unwrap();
    assert_eq!(c.to_string(), "9007199254740993");
}

#[test]
fn test_parse_beyond_u64() {
    let c = Capacity::parse("18446744073709551616").unwrap();
    assert_eq!(c.to_string(), "18446744073709551616");
}

#[test]
fn test_parse_rejects_malformed() {
    for bad in ["", "abc", "-1", "1.5", " 1", "1 ", "0x", "0xg1", "+5"] {
        let err = Capacity::parse(bad).unwrap_err();
        assert!(
            matches!(err, IllustrationError::InvalidCapacity { ref value } if value == bad),
            "{bad:?} gave {err:?}"
        );
    }
}

#[test]
fn test_from_str() {
    let c: Capacity = "42".parse().unwrap();
    assert_eq!(c, Capacity::from(42));
}

// ── Arithmetic ────────────────────────────────────────────────────────────────

#[test]
fn test_split() {
    let (whole, fraction) = Capacity::from(250_000_000).split();
    assert_eq!(whole, BigUint::from(2u32));
    assert_eq!(fraction, 50_000_000);
}

#[test]
fn test_sum_is_exact() {
    let parts = [
        Capacity::parse("9007199254740993").unwrap(),
        Capacity::from(1),
        Capacity::from(u64::MAX),
    ];
    let total: Capacity = parts.iter().sum();
    let expected = BigUint::from(9_007_199_254_740_993u64) + 1u32 + BigUint::from(u64::MAX);
    assert_eq!(total.shannons(), &expected);
}

#[test]
fn test_sum_empty_is_zero() {
    let total: Capacity = Vec::<Capacity>::new().into_iter().sum();
    assert!(total.is_zero());
}

// ── Labels ────────────────────────────────────────────────────────────────────

#[test]
fn test_format_whole() {
    assert_eq!(format_capacity(&Capacity::from(100_000_000)), "1 CKB");
    assert_eq!(format_capacity(&Capacity::from(0)), "0 CKB");
}

#[test]
fn test_format_fraction_padded() {
    assert_eq!(format_capacity(&Capacity::from(250_000_000)), "2.50000000 CKB");
    assert_eq!(format_capacity(&Capacity::from(100_000_001)), "1.00000001 CKB");
    assert_eq!(format_capacity(&Capacity::from(1)), "0.00000001 CKB");
}

#[test]
fn test_parse_label() {
    assert_eq!(parse_capacity_label("1 CKB").unwrap(), Capacity::from(100_000_000));
    assert_eq!(
        parse_capacity_label("2.50000000 CKB").unwrap(),
        Capacity::from(250_000_000)
    );
}

#[test]
fn test_parse_label_rejects_malformed() {
    for bad in ["1", "1.5 CKB", "CKB", "1 ckb", "1.123456789 CKB"] {
        assert!(
            matches!(parse_capacity_label(bad), Err(IllustrationError::InvalidLabel(_))),
            "{bad:?}"
        );
    }
}

proptest! {
    #[test]
    fn prop_label_round_trip(shannons in any::<u64>()) {
        let capacity = Capacity::from(shannons);
        let label = format_capacity(&capacity);
        prop_assert_eq!(parse_capacity_label(&label).unwrap(), capacity);
    }

    #[test]
    fn prop_label_matches_split(shannons in any::<u64>()) {
        let label = format_capacity(&Capacity::from(shannons));
        let whole = shannons / ONE_CKB;
        let fraction = shannons % ONE_CKB;
        let expected_prefix = format!("{whole}");
        prop_assert!(label.starts_with(&expected_prefix));
        prop_assert_eq!(label.contains('.'), fraction != 0);
    }
}
