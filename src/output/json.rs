use crate::check::ScenarioOutcome;
use crate::pricing::{CostResult, PricingModel};

fn model_json(model: &PricingModel) -> serde_json::Value {
    serde_json::json!({
        "name": model.name,
        "provider": model.litellm_provider,
        "mode": model.mode,
        "max_input_tokens": model.max_input_tokens,
        "max_output_tokens": model.max_output_tokens,
    })
}

pub(crate) fn output_tiers_json(model: &PricingModel) -> String {
    let output = serde_json::json!({
        "model": model_json(model),
        "tiers": model.tiered_pricing,
    });
    serde_json::to_string_pretty(&output).unwrap()
}

pub(crate) fn output_cost_json(model: &PricingModel, result: &CostResult) -> String {
    let output = serde_json::json!({
        "model": model_json(model),
        "result": result,
    });
    serde_json::to_string_pretty(&output).unwrap()
}

pub(crate) fn output_check_json(model: &PricingModel, outcomes: &[ScenarioOutcome]) -> String {
    let scenarios: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|outcome| {
            serde_json::json!({
                "description": outcome.scenario.description,
                "input_tokens": outcome.scenario.input_tokens,
                "output_tokens": outcome.scenario.output_tokens,
                "result": outcome.result,
                "passed": outcome.passed(),
            })
        })
        .collect();
    let output = serde_json::json!({
        "model": model_json(model),
        "scenarios": scenarios,
        "passed": outcomes.iter().all(ScenarioOutcome::passed),
    });
    serde_json::to_string_pretty(&output).unwrap()
}
