//! Serializer totality properties.
//!
//! For any complete palette, flattening must produce exactly the entry
//! set implied by the scale definitions, values verbatim, and the same
//! output on every call.

use std::collections::BTreeMap;
use std::fmt::Debug;

use proptest::prelude::*;

use tredumo_core::models::theme::{
    ColorTokens, DesignTokens, FontFamily, FontSize, FontWeight, RadiusStep, RampStep,
    SemanticColor, ShadowStep, SpaceStep, Typography,
};
use tredumo_core::stylesheet::{serialize_design_tokens, theme_stylesheet};
use tredumo_core::validate::validate_design_tokens;

const COMPLETE_PALETTE_ENTRIES: usize = 81;

fn token_value() -> impl Strategy<Value = String> {
    "[a-z0-9#.]{1,16}"
}

fn complete_scale<K>(steps: &'static [K]) -> impl Strategy<Value = BTreeMap<K, String>>
where
    K: Ord + Copy + Debug,
{
    proptest::collection::vec(token_value(), steps.len())
        .prop_map(move |values| steps.iter().copied().zip(values).collect())
}

fn tokens_strategy() -> impl Strategy<Value = DesignTokens> {
    (
        (
            complete_scale(&RampStep::ALL),
            complete_scale(&RampStep::ALL),
            complete_scale(&RampStep::ALL),
            complete_scale(&RampStep::ALL),
            complete_scale(&SemanticColor::ALL),
        ),
        (
            complete_scale(&SpaceStep::ALL),
            complete_scale(&RadiusStep::ALL),
            complete_scale(&ShadowStep::ALL),
        ),
        (
            complete_scale(&FontFamily::ALL),
            complete_scale(&FontSize::ALL),
            complete_scale(&FontWeight::ALL),
        ),
    )
        .prop_map(
            |(
                (primary, secondary, accent, neutral, semantic),
                (spacing, radius, shadows),
                (families, sizes, weights),
            )| DesignTokens {
                colors: ColorTokens {
                    primary,
                    secondary,
                    accent,
                    neutral,
                    semantic,
                },
                spacing,
                radius,
                shadows,
                typography: Typography {
                    families,
                    sizes,
                    weights,
                },
            },
        )
}

proptest! {
    #[test]
    fn complete_palettes_validate(tokens in tokens_strategy()) {
        prop_assert!(validate_design_tokens(&tokens).is_ok());
    }

    #[test]
    fn serializer_is_total(tokens in tokens_strategy()) {
        let entries = serialize_design_tokens(&tokens);
        prop_assert_eq!(entries.len(), COMPLETE_PALETTE_ENTRIES);
    }

    #[test]
    fn values_survive_flattening_verbatim(tokens in tokens_strategy()) {
        let entries = serialize_design_tokens(&tokens);

        prop_assert_eq!(
            entries.get("color-primary-500"),
            Some(&tokens.colors.primary[&RampStep::S500])
        );
        prop_assert_eq!(
            entries.get("spacing-md"),
            Some(&tokens.spacing[&SpaceStep::Md])
        );
        prop_assert_eq!(
            entries.get("font-weight-bold"),
            Some(&tokens.typography.weights[&FontWeight::Bold])
        );
    }

    #[test]
    fn serializer_is_deterministic(tokens in tokens_strategy()) {
        prop_assert_eq!(
            serialize_design_tokens(&tokens),
            serialize_design_tokens(&tokens)
        );
    }

    #[test]
    fn stylesheet_declares_each_entry(tokens in tokens_strategy()) {
        let css = theme_stylesheet(&tokens);
        prop_assert_eq!(css.matches("  --").count(), COMPLETE_PALETTE_ENTRIES);
    }
}
