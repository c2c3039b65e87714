use std::fs;
use std::path::Path;

use crate::error::AppError;

use super::types::{PriceTier, PricingModel, TierRange};

/// Built-in model definition: dashscope/qwen3-max-preview, the
/// reference three-tier pricing from the LiteLLM model db.
pub(crate) fn builtin_model() -> PricingModel {
    PricingModel {
        name: "dashscope/qwen3-max-preview".to_string(),
        litellm_provider: Some("dashscope".to_string()),
        mode: Some("chat".to_string()),
        max_input_tokens: Some(258_048),
        max_output_tokens: Some(65_536),
        tiered_pricing: vec![
            PriceTier {
                input_cost_per_token: 1.2e-6,
                output_cost_per_token: 6e-6,
                range: Some(TierRange(0.0, 32_000.0)),
            },
            PriceTier {
                input_cost_per_token: 2.4e-6,
                output_cost_per_token: 1.2e-5,
                range: Some(TierRange(32_000.0, 128_000.0)),
            },
            PriceTier {
                input_cost_per_token: 3e-6,
                output_cost_per_token: 1.5e-5,
                range: Some(TierRange(128_000.0, 252_000.0)),
            },
        ],
    }
}

/// Load a model definition from a LiteLLM-style JSON file. The display
/// name comes from the file stem; unknown keys are ignored. A file
/// without pricing tiers is rejected outright, so every loaded model
/// can resolve a tier for any token count.
pub(crate) fn load_model(path: &Path) -> Result<PricingModel, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::ModelRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut model: PricingModel =
        serde_json::from_str(&content).map_err(|source| AppError::ModelParse {
            path: path.to_path_buf(),
            source,
        })?;
    if model.tiered_pricing.is_empty() {
        return Err(AppError::EmptyTiers {
            path: path.to_path_buf(),
        });
    }
    model.name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(model)
}
