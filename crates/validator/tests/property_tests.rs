//! Property-based tests for fieldcheck-validator.

use fieldcheck_validator::prelude::*;
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCY: checks are pure functions of their input
// ============================================================================

proptest! {
    #[test]
    fn pattern_check_idempotent(s in ".*") {
        let v = matches_pattern(r"\d{10}").unwrap();
        let r1 = v.validate(&s);
        let r2 = v.validate(&s);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }

    #[test]
    fn range_check_idempotent(n in any::<f64>()) {
        let v = numeric_range(-1000.0, 1000.0);
        let r1 = v.validate(&n);
        let r2 = v.validate(&n);
        prop_assert_eq!(r1.is_ok(), r2.is_ok());
    }
}

// ============================================================================
// FULL-MATCH SEMANTICS: a match on a substring is never enough
// ============================================================================

proptest! {
    #[test]
    fn phone_accepts_exactly_ten_digits(s in "[0-9]{10}") {
        let mut validator = Validator::new();
        prop_assert!(validator.validate(&s, "phone"));
    }

    #[test]
    fn phone_rejects_padded_digits(s in "[0-9]{10}", pad in "[a-z]{1,3}") {
        let mut validator = Validator::new();
        let prefixed = format!("{pad}{s}");
        let suffixed = format!("{s}{pad}");
        prop_assert!(!validator.validate(&prefixed, "phone"));
        prop_assert!(!validator.validate(&suffixed, "phone"));
    }

    #[test]
    fn date_shape_accepts_any_digits(s in "[0-9]{4}-[0-9]{2}-[0-9]{2}") {
        let mut validator = Validator::new();
        prop_assert!(validator.validate(&s, "date"));
    }
}

// ============================================================================
// RANGE LAW: verdict agrees with the comparison, boundaries included
// ============================================================================

proptest! {
    #[test]
    fn range_verdict_matches_comparison(
        v in -1.0e6_f64..1.0e6,
        lo in -1.0e6_f64..1.0e6,
        hi in -1.0e6_f64..1.0e6,
    ) {
        let mut validator = Validator::new();
        let verdict = validator.validate_numeric_range(v, lo, hi);
        prop_assert_eq!(verdict, lo <= v && v <= hi);
    }

    #[test]
    fn range_boundaries_always_pass(lo in -1.0e6_f64..1.0e6, span in 0.0_f64..1.0e6) {
        let hi = lo + span;
        let mut validator = Validator::new();
        prop_assert!(validator.validate_numeric_range(lo, lo, hi));
        prop_assert!(validator.validate_numeric_range(hi, lo, hi));
    }
}

// ============================================================================
// CONSISTENCY LAWS
// ============================================================================

proptest! {
    #[test]
    fn equality_consistency_is_reflexive(s in ".{0,30}") {
        let mut validator = Validator::new();
        prop_assert!(validator.check_consistency(&s, &s, "equality"));
    }

    #[test]
    fn numeric_consistency_is_symmetric(a in -1.0e9_f64..1.0e9, b in -1.0e9_f64..1.0e9) {
        let mut validator = Validator::new();
        let ab = validator.check_consistency(&a.to_string(), &b.to_string(), "numeric");
        let ba = validator.check_consistency(&b.to_string(), &a.to_string(), "numeric");
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn numeric_consistency_agrees_with_float_equality(a in -1.0e9_f64..1.0e9) {
        let mut validator = Validator::new();
        prop_assert!(validator.check_consistency(&a.to_string(), &a.to_string(), "numeric"));
    }

    #[test]
    fn unknown_kind_never_validates(kind in "[a-z]{1,12}") {
        prop_assume!(kind != "equality" && kind != "numeric");
        let mut validator = Validator::new();
        prop_assert!(!validator.check_consistency("x", "x", &kind));
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,20}") {
        let a = matches_pattern(r"[0-9]+").unwrap();
        let b = matches_pattern(r".{3,}").unwrap();
        let combined = a.clone().and(b.clone());

        let a_ok = a.validate(&s).is_ok();
        let b_ok = b.validate(&s).is_ok();
        prop_assert_eq!(combined.validate(&s).is_ok(), a_ok && b_ok);
    }

    #[test]
    fn or_passes_iff_either_passes(s in ".{0,20}") {
        let a = matches_pattern(r"[0-9]+").unwrap();
        let b = matches_pattern(r".{3,}").unwrap();
        let combined = a.clone().or(b.clone());

        let a_ok = a.validate(&s).is_ok();
        let b_ok = b.validate(&s).is_ok();
        prop_assert_eq!(combined.validate(&s).is_ok(), a_ok || b_ok);
    }

    #[test]
    fn double_negation_agrees(s in ".{0,20}") {
        let v = matches_pattern(r"[0-9]+").unwrap();
        let double_neg = v.clone().not().not();
        prop_assert_eq!(v.validate(&s).is_ok(), double_neg.validate(&s).is_ok());
    }
}

// ============================================================================
// REPORT INVARIANTS
// ============================================================================

proptest! {
    #[test]
    fn clear_always_resets(values in proptest::collection::vec(".{0,10}", 0..8)) {
        let mut validator = Validator::new();
        for value in &values {
            validator.validate(value, "phone");
        }
        validator.clear_errors();
        prop_assert!(validator.errors().is_empty());
    }

    #[test]
    fn one_message_per_failed_rule_check(values in proptest::collection::vec("[a-z]{1,9}", 1..8)) {
        let mut validator = Validator::new();
        // Lowercase letters never match the ten-digit phone rule.
        for value in &values {
            validator.validate(value, "phone");
        }
        prop_assert_eq!(validator.errors().len(), values.len());
    }
}
