use super::*;
use proptest::prelude::*;

#[test]
fn test_first_encounter_order() {
    let mut p = OwnerPalette::default();
    assert_eq!(p.color("0xbb"), ACCENT[0]);
    assert_eq!(p.color("0xaa"), ACCENT[1]);
    assert_eq!(p.color("0xbb"), ACCENT[0]);
    assert_eq!(p.domain(), &["0xbb".to_string(), "0xaa".to_string()]);
}

#[test]
fn test_wraps_beyond_scheme() {
    let mut p = OwnerPalette::default();
    let colors: Vec<Rgb> = (0..9).map(|i| p.color(&format!("0x{i:02x}"))).collect();
    assert_eq!(colors[8], colors[0]);
    assert_eq!(&colors[..8], &ACCENT[..]);
}

#[test]
fn test_custom_scheme() {
    let scheme = vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
    let mut p = OwnerPalette::new(scheme.clone());
    assert_eq!(p.color("a"), scheme[0]);
    assert_eq!(p.color("b"), scheme[1]);
    assert_eq!(p.color("c"), scheme[0]);
}

#[test]
fn test_empty_scheme_falls_back() {
    let mut p = OwnerPalette::new(Vec::new());
    let colors: Vec<Rgb> = (0..9).map(|i| p.color(&i.to_string())).collect();
    assert_eq!(&colors[..8], &ACCENT[..]);
    assert_eq!(colors[8], ACCENT[0]);
}

#[test]
fn test_fresh_palettes_are_independent() {
    let mut first = OwnerPalette::default();
    first.color("0x01");
    first.color("0x02");
    let mut second = OwnerPalette::default();
    assert_eq!(second.color("0x02"), ACCENT[0]);
}

proptest! {
    #[test]
    fn prop_same_key_same_color(keys in proptest::collection::vec("0x[0-9a-f]{1,4}", 1..40)) {
        let mut p = OwnerPalette::default();
        let first: Vec<Rgb> = keys.iter().map(|k| p.color(k)).collect();
        let again: Vec<Rgb> = keys.iter().map(|k| p.color(k)).collect();
        prop_assert_eq!(first, again);
    }

    #[test]
    fn prop_distinct_keys_distinct_colors_within_capacity(
        keys in proptest::collection::hash_set("0x[0-9a-f]{1,6}", 1..=8)
    ) {
        let mut p = OwnerPalette::default();
        let mut colors: Vec<Rgb> = keys.iter().map(|k| p.color(k)).collect();
        colors.sort_by_key(|c| (c.r, c.g, c.b));
        colors.dedup();
        prop_assert_eq!(colors.len(), keys.len());
    }
}
