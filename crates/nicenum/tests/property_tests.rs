//! Property-based tests for nicenum conversions.
//!
//! These tests use proptest to generate random inputs and verify that
//! the conversions maintain their invariants under all conditions.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **No panics**: Conversions never crash on any input
//! 2. **Round-trips**: Format-then-parse reconstructs the value within
//!    the precision's tolerance
//! 3. **Invariants**: Colorizing never alters the digits themselves

use proptest::prelude::*;
use regex::Regex;

use nicenum::{
    to_color, to_human, to_numeric, ColorName, ColumnSelection, Family, Frame, HumanOptions,
    NumericOptions, Transform, Value,
};

/// Range of magnitudes representable by both families at index 0..=5.
fn representable() -> impl Strategy<Value = f64> {
    0.001f64..9.0e16
}

/// Strings shaped like plausible abbreviated numbers.
fn abbreviation_like() -> impl Strategy<Value = String> {
    "[0-9]{1,3}(\\.[0-9]{0,3})?[kmbtqKMBTQ]?"
}

proptest! {
    #[test]
    fn round_trip_number_family(n in representable()) {
        let opts = HumanOptions { precision: 6, ..Default::default() };
        let rendered = to_human(n, &opts).unwrap();
        let parsed = to_numeric(&rendered, &NumericOptions::default()).unwrap();

        let tolerance = (n * 1e-5).max(1e-9);
        prop_assert!((parsed - n).abs() <= tolerance, "{} -> {} -> {}", n, rendered, parsed);
    }

    #[test]
    fn round_trip_filesize_family(n in representable()) {
        let opts = HumanOptions {
            precision: 6,
            family: Family::Filesize,
            ..Default::default()
        };
        let numeric_opts = NumericOptions {
            family: Family::Filesize,
            ..Default::default()
        };
        let rendered = to_human(n, &opts).unwrap();
        let parsed = to_numeric(&rendered, &numeric_opts).unwrap();

        let tolerance = (n * 1e-5).max(1e-9);
        prop_assert!((parsed - n).abs() <= tolerance, "{} -> {} -> {}", n, rendered, parsed);
    }

    #[test]
    fn formatter_never_panics(n in proptest::num::f64::ANY) {
        let _ = to_human(n, &HumanOptions::default());
    }

    #[test]
    fn parser_never_panics(s in "\\PC*") {
        let _ = to_numeric(&s, &NumericOptions::default());
    }

    #[test]
    fn plausible_abbreviations_parse(s in abbreviation_like()) {
        prop_assert!(to_numeric(&s, &NumericOptions::default()).is_ok());
    }

    #[test]
    fn colorizing_preserves_digits(n in proptest::num::u128::ANY) {
        let out = to_color(n, &ColorName::DEFAULT_CYCLE);
        let escapes = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
        prop_assert_eq!(escapes.replace_all(&out, "").into_owned(), n.to_string());
    }

    #[test]
    fn frame_round_trip(values in prop::collection::vec(0.001f64..9.0e16, 1..20)) {
        let cells: Vec<Value> = values.iter().copied().map(Value::Float).collect();
        let frame = Frame::from_columns(vec![("n", cells)]).unwrap();

        let human = Transform::Human(HumanOptions { precision: 6, ..Default::default() });
        let numeric = Transform::Numeric(NumericOptions::default());

        let back = frame
            .transform(&ColumnSelection::All, &human)
            .unwrap()
            .transform(&ColumnSelection::All, &numeric)
            .unwrap();

        for (row, n) in values.iter().enumerate() {
            let parsed = back.get(row, "n").unwrap().as_f64().unwrap();
            let tolerance = (n * 1e-5).max(1e-9);
            prop_assert!((parsed - n).abs() <= tolerance);
        }
    }
}
