use super::resolver::resolve_tier;
use super::types::{CostResult, PricingModel};

/// Compute a cost breakdown for one request.
///
/// Input and output counts resolve their tiers independently, so a
/// large prompt with a small completion may bill the two sides at
/// different rates. `None` only when the model has no tiers at all.
pub(crate) fn calculate_cost(
    model: &PricingModel,
    input_tokens: f64,
    output_tokens: f64,
) -> Option<CostResult> {
    let input_tier = *resolve_tier(&model.tiered_pricing, input_tokens)?;
    let output_tier = *resolve_tier(&model.tiered_pricing, output_tokens)?;

    let input_cost = input_tokens * input_tier.input_cost_per_token;
    let output_cost = output_tokens * output_tier.output_cost_per_token;

    Some(CostResult {
        input_tokens,
        output_tokens,
        input_tier,
        output_tier,
        input_cost,
        output_cost,
        total_cost: input_cost + output_cost,
    })
}
