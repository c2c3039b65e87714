use comfy_table::{Cell, Color};

use crate::check::ScenarioOutcome;
use crate::pricing::{CostResult, PriceTier, PricingModel};

use super::format::{
    NumberFormat, create_styled_table, format_bound, format_cost, format_rate, format_tokens,
    header_cell, right_cell, status_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ReportOptions {
    pub(crate) use_color: bool,
    pub(crate) number_format: NumberFormat,
}

fn range_label(tier: &PriceTier, format: NumberFormat) -> String {
    let bounds = tier.bounds();
    format!(
        "[{} - {})",
        format_bound(bounds.min(), format),
        format_bound(bounds.max(), format)
    )
}

pub(crate) fn print_tier_table(model: &PricingModel, opts: ReportOptions) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Tier", opts.use_color),
        header_cell("Range (tokens)", opts.use_color),
        header_cell("Input $/token", opts.use_color),
        header_cell("Output $/token", opts.use_color),
    ]);

    for (index, tier) in model.tiered_pricing.iter().enumerate() {
        table.add_row(vec![
            right_cell(&(index + 1).to_string(), None, false),
            right_cell(&range_label(tier, opts.number_format), None, false),
            right_cell(&format_rate(tier.input_cost_per_token), None, false),
            right_cell(&format_rate(tier.output_cost_per_token), None, false),
        ]);
    }

    println!("{table}");
}

pub(crate) fn print_cost_breakdown(result: &CostResult, opts: ReportOptions) {
    let fmt = opts.number_format;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("", opts.use_color),
        header_cell("Tokens", opts.use_color),
        header_cell("Tier", opts.use_color),
        header_cell("Rate", opts.use_color),
        header_cell("Cost", opts.use_color),
    ]);

    table.add_row(vec![
        Cell::new("Input"),
        right_cell(&format_tokens(result.input_tokens, fmt), None, false),
        right_cell(&range_label(&result.input_tier, fmt), None, false),
        right_cell(&format_rate(result.input_tier.input_cost_per_token), None, false),
        right_cell(&format_cost(result.input_cost), None, false),
    ]);
    table.add_row(vec![
        Cell::new("Output"),
        right_cell(&format_tokens(result.output_tokens, fmt), None, false),
        right_cell(&range_label(&result.output_tier, fmt), None, false),
        right_cell(&format_rate(result.output_tier.output_cost_per_token), None, false),
        right_cell(&format_cost(result.output_cost), None, false),
    ]);

    let total_color = if opts.use_color {
        Some(Color::Yellow)
    } else {
        None
    };
    table.add_row(vec![
        Cell::new("Total"),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        right_cell(&format_cost(result.total_cost), total_color, true),
    ]);

    println!("{table}");
}

/// Human-readable model line shared by the check and tiers reports.
pub(crate) fn model_header(model: &PricingModel) -> String {
    match (&model.litellm_provider, &model.mode) {
        (Some(provider), Some(mode)) => format!("{} ({provider}, {mode})", model.name),
        (Some(provider), None) => format!("{} ({provider})", model.name),
        _ => model.name.clone(),
    }
}

pub(crate) fn print_check_report(
    model: &PricingModel,
    outcomes: &[ScenarioOutcome],
    opts: ReportOptions,
) {
    let fmt = opts.number_format;

    println!("Model: {}", model_header(model));
    println!();
    print_tier_table(model, opts);
    println!();

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", opts.use_color),
        header_cell("Scenario", opts.use_color),
        header_cell("Input", opts.use_color),
        header_cell("Output", opts.use_color),
        header_cell("Input tier", opts.use_color),
        header_cell("Output tier", opts.use_color),
        header_cell("Input cost", opts.use_color),
        header_cell("Output cost", opts.use_color),
        header_cell("Total", opts.use_color),
        header_cell("Status", opts.use_color),
    ]);

    for (index, outcome) in outcomes.iter().enumerate() {
        let scenario = outcome.scenario;
        match &outcome.result {
            Some(result) => {
                table.add_row(vec![
                    right_cell(&(index + 1).to_string(), None, false),
                    Cell::new(scenario.description),
                    right_cell(&format_tokens(result.input_tokens, fmt), None, false),
                    right_cell(&format_tokens(result.output_tokens, fmt), None, false),
                    right_cell(&range_label(&result.input_tier, fmt), None, false),
                    right_cell(&range_label(&result.output_tier, fmt), None, false),
                    right_cell(&format_cost(result.input_cost), None, false),
                    right_cell(&format_cost(result.output_cost), None, false),
                    right_cell(&format_cost(result.total_cost), None, true),
                    status_cell(outcome.passed(), opts.use_color),
                ]);
            }
            None => {
                eprintln!(
                    "Scenario {} ({}) failed: could not calculate cost",
                    index + 1,
                    scenario.description
                );
                table.add_row(vec![
                    right_cell(&(index + 1).to_string(), None, false),
                    Cell::new(scenario.description),
                    right_cell(&format_tokens(scenario.input_tokens, fmt), None, false),
                    right_cell(&format_tokens(scenario.output_tokens, fmt), None, false),
                    Cell::new("n/a"),
                    Cell::new("n/a"),
                    Cell::new("n/a"),
                    Cell::new("n/a"),
                    Cell::new("n/a"),
                    status_cell(false, opts.use_color),
                ]);
            }
        }
    }

    println!("{table}");

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed == 0 {
        println!("All scenarios passed.");
    } else {
        println!("{failed} of {} scenarios failed.", outcomes.len());
    }
}
