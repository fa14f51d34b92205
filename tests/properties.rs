//! Property tests for the resolution core.

use genvy::core::expr::ExpressionEvaluator;
use genvy::core::range;
use genvy::core::registry::SecretRegistry;
use genvy::core::secret::{SecretGenerator, SecretIdentity, DEFAULT_RANGES};
use genvy::error::{Error, ExprError};

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(seed: u64) -> SecretGenerator {
    SecretGenerator::with_rng(
        SecretRegistry::default(),
        Box::new(StdRng::seed_from_u64(seed)),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn increasing_tokens_parse_to_half_open_intervals(a in 33u8..=126, b in 33u8..=126) {
        let token = format!("{}-{}", a as char, b as char);
        let parsed = range::parse(&token);

        if a < b {
            let parsed = parsed.expect("increasing token must parse");
            prop_assert_eq!(parsed.from, a as u32);
            prop_assert_eq!(parsed.to, b as u32 + 1);
        } else {
            prop_assert!(parsed.is_none());
        }
    }

    #[test]
    fn tokens_of_wrong_length_never_parse(token in "[a-z0-9!-]{0,2}|[a-z0-9!-]{4,8}") {
        prop_assume!(token != "!");
        prop_assert!(range::parse(&token).is_none());
    }

    #[test]
    fn generated_characters_stay_inside_the_ranges(seed in any::<u64>(), length in 0usize..64) {
        let ranges = [range::parse("0-9").unwrap(), range::parse("!").unwrap()];
        let identity = SecretIdentity { file: Some("app"), key: "k", env: "prod" };

        let secret = seeded(seed).generate(&identity, length, &ranges);

        prop_assert_eq!(secret.chars().count(), length);
        for c in secret.chars() {
            prop_assert!(
                ranges.iter().any(|r| r.contains(c as u32)),
                "character {:?} outside the supplied ranges", c
            );
        }
    }

    #[test]
    fn same_identity_always_reuses_the_first_draw(seed in any::<u64>()) {
        let identity = SecretIdentity { file: None, key: "k", env: "" };
        let mut generator = seeded(seed);

        let first = generator.generate(&identity, 16, &DEFAULT_RANGES);
        let second = generator.generate(&identity, 16, &DEFAULT_RANGES);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn accepted_charset_never_hits_the_character_check(expr in "[0-9+*/%() -]{0,20}") {
        let mut evaluator = ExpressionEvaluator::new();
        // Arbitrary charset strings may still be malformed, but they must
        // get past the character check.
        if let Err(e) = evaluator.evaluate(&expr) {
            prop_assert!(
                matches!(e, Error::Expr(ExprError::Malformed { .. })),
                "unexpected error: {:?}", e
            );
        }
    }

    #[test]
    fn any_letter_is_rejected_before_parsing(
        prefix in "[0-9+ ]{0,5}",
        letter in "[a-zA-Z]",
        suffix in "[0-9+ ]{0,5}",
    ) {
        let expr = format!("{prefix}{letter}{suffix}");
        let err = ExpressionEvaluator::new().evaluate(&expr).unwrap_err();
        prop_assert!(
            matches!(err, Error::Expr(ExprError::ForbiddenCharacter { .. })),
            "unexpected error: {:?}", err
        );
    }

    #[test]
    fn integer_sums_evaluate_exactly(a in 0u32..10_000, b in 0u32..10_000) {
        let value = ExpressionEvaluator::new()
            .evaluate(&format!("{a}+{b}"))
            .unwrap();
        prop_assert_eq!(value, f64::from(a) + f64::from(b));
    }
}
