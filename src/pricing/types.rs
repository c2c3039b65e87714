use serde::{Deserialize, Serialize};

/// Half-open token-count interval `[min, max)`, serialized as a
/// two-element JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct TierRange(pub(crate) f64, pub(crate) f64);

impl TierRange {
    pub(crate) fn min(self) -> f64 {
        self.0
    }

    pub(crate) fn max(self) -> f64 {
        self.1
    }

    /// NaN counts fail both comparisons and match no range.
    pub(crate) fn contains(self, token_count: f64) -> bool {
        token_count >= self.0 && token_count < self.1
    }
}

/// One pricing tier: per-token rates plus the token-count range they
/// apply to. Field names follow the LiteLLM model-db keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct PriceTier {
    pub(crate) input_cost_per_token: f64,
    pub(crate) output_cost_per_token: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) range: Option<TierRange>,
}

impl PriceTier {
    /// Effective bounds, defaulting to `[0, +inf)` when no range is declared.
    pub(crate) fn bounds(&self) -> TierRange {
        self.range.unwrap_or(TierRange(0.0, f64::INFINITY))
    }
}

/// Immutable tiered-pricing model definition. Tiers are ordered
/// ascending by range; contiguity is assumed, not validated.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PricingModel {
    #[serde(skip)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) litellm_provider: Option<String>,
    #[serde(default)]
    pub(crate) mode: Option<String>,
    #[serde(default)]
    pub(crate) max_input_tokens: Option<u64>,
    #[serde(default)]
    pub(crate) max_output_tokens: Option<u64>,
    #[serde(default)]
    pub(crate) tiered_pricing: Vec<PriceTier>,
}

/// Per-calculation cost breakdown. Transient, never persisted.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CostResult {
    pub(crate) input_tokens: f64,
    pub(crate) output_tokens: f64,
    pub(crate) input_tier: PriceTier,
    pub(crate) output_tier: PriceTier,
    pub(crate) input_cost: f64,
    pub(crate) output_cost: f64,
    pub(crate) total_cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_contains_is_half_open() {
        let range = TierRange(0.0, 32000.0);
        assert!(range.contains(0.0));
        assert!(range.contains(31999.0));
        assert!(!range.contains(32000.0));
        assert!(!range.contains(-1.0));
    }

    #[test]
    fn range_rejects_nan() {
        let range = TierRange(0.0, 32000.0);
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn missing_range_defaults_to_open_interval() {
        let tier = PriceTier {
            input_cost_per_token: 1e-6,
            output_cost_per_token: 2e-6,
            range: None,
        };
        let bounds = tier.bounds();
        assert_eq!(bounds.min(), 0.0);
        assert!(bounds.max().is_infinite());
        assert!(bounds.contains(1e12));
    }

    #[test]
    fn tier_deserializes_litellm_keys() {
        let tier: PriceTier = serde_json::from_str(
            r#"{"input_cost_per_token":1.2e-6,"output_cost_per_token":6e-6,"range":[0,32000.0]}"#,
        )
        .unwrap();
        assert_eq!(tier.input_cost_per_token, 1.2e-6);
        assert_eq!(tier.output_cost_per_token, 6e-6);
        assert_eq!(tier.range, Some(TierRange(0.0, 32000.0)));
    }

    #[test]
    fn tier_deserializes_without_range() {
        let tier: PriceTier = serde_json::from_str(
            r#"{"input_cost_per_token":1e-6,"output_cost_per_token":2e-6}"#,
        )
        .unwrap();
        assert_eq!(tier.range, None);
    }

    #[test]
    fn tier_serializes_range_as_array() {
        let tier = PriceTier {
            input_cost_per_token: 1e-6,
            output_cost_per_token: 2e-6,
            range: Some(TierRange(0.0, 100.0)),
        };
        let json = serde_json::to_value(tier).unwrap();
        assert_eq!(json["range"], serde_json::json!([0.0, 100.0]));
    }
}
