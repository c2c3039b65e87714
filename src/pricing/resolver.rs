use super::types::PriceTier;

/// Find the tier that applies to a token count.
///
/// Scans tiers in declared order and returns the first whose range
/// contains the count. Counts outside every declared range (beyond the
/// top boundary, negative, or NaN) bill at the last tier, treated as an
/// open-ended ceiling. Only an empty tier list resolves to `None`.
pub(crate) fn resolve_tier(tiers: &[PriceTier], token_count: f64) -> Option<&PriceTier> {
    tiers
        .iter()
        .find(|tier| tier.bounds().contains(token_count))
        .or_else(|| tiers.last())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::loader::builtin_model;
    use crate::pricing::types::TierRange;

    #[test]
    fn resolves_first_matching_tier() {
        let model = builtin_model();
        let tier = resolve_tier(&model.tiered_pricing, 1000.0).unwrap();
        assert_eq!(tier.input_cost_per_token, 1.2e-6);
    }

    #[test]
    fn lower_bound_is_inclusive_upper_exclusive() {
        let model = builtin_model();
        let at_boundary = resolve_tier(&model.tiered_pricing, 32000.0).unwrap();
        assert_eq!(at_boundary.input_cost_per_token, 2.4e-6);
        let below_boundary = resolve_tier(&model.tiered_pricing, 31999.9).unwrap();
        assert_eq!(below_boundary.input_cost_per_token, 1.2e-6);
    }

    #[test]
    fn count_beyond_top_boundary_uses_ceiling_tier() {
        let model = builtin_model();
        let tier = resolve_tier(&model.tiered_pricing, 300_000.0).unwrap();
        assert_eq!(tier.input_cost_per_token, 3e-6);
        assert_eq!(tier.output_cost_per_token, 1.5e-5);
    }

    #[test]
    fn negative_count_falls_back_to_ceiling_tier() {
        let model = builtin_model();
        let tier = resolve_tier(&model.tiered_pricing, -5.0).unwrap();
        assert_eq!(tier.input_cost_per_token, 3e-6);
    }

    #[test]
    fn nan_count_falls_back_to_ceiling_tier() {
        let model = builtin_model();
        let tier = resolve_tier(&model.tiered_pricing, f64::NAN).unwrap();
        assert_eq!(tier.input_cost_per_token, 3e-6);
    }

    #[test]
    fn empty_tier_list_resolves_to_none() {
        assert!(resolve_tier(&[], 1000.0).is_none());
    }

    #[test]
    fn tier_without_range_catches_everything() {
        let tiers = [PriceTier {
            input_cost_per_token: 1e-6,
            output_cost_per_token: 2e-6,
            range: None,
        }];
        assert!(resolve_tier(&tiers, 0.0).is_some());
        assert!(resolve_tier(&tiers, 1e9).is_some());
    }

    #[test]
    fn gap_between_ranges_falls_back_to_ceiling_tier() {
        let tiers = [
            PriceTier {
                input_cost_per_token: 1e-6,
                output_cost_per_token: 2e-6,
                range: Some(TierRange(0.0, 100.0)),
            },
            PriceTier {
                input_cost_per_token: 2e-6,
                output_cost_per_token: 4e-6,
                range: Some(TierRange(200.0, 300.0)),
            },
        ];
        // 150 sits in the gap, so the last tier applies
        let tier = resolve_tier(&tiers, 150.0).unwrap();
        assert_eq!(tier.input_cost_per_token, 2e-6);
    }
}
