//! Built-in smoke scenarios for the tiered-pricing pipeline.
//!
//! Five fixed requests spanning every tier plus the beyond-range
//! fallback. The pass criterion is deliberately loose (non-zero total
//! cost): this is a smoke check, not a correctness oracle.

use crate::pricing::{CostResult, PricingModel, calculate_cost};

#[derive(Debug)]
pub(crate) struct Scenario {
    pub(crate) description: &'static str,
    pub(crate) input_tokens: f64,
    pub(crate) output_tokens: f64,
}

pub(crate) const SCENARIOS: [Scenario; 5] = [
    Scenario {
        description: "Small request (Tier 1)",
        input_tokens: 1_000.0,
        output_tokens: 500.0,
    },
    Scenario {
        description: "Medium request (Tier 1)",
        input_tokens: 10_000.0,
        output_tokens: 5_000.0,
    },
    Scenario {
        description: "Large request (Tier 2)",
        input_tokens: 50_000.0,
        output_tokens: 10_000.0,
    },
    Scenario {
        description: "Very large request (Tier 3)",
        input_tokens: 150_000.0,
        output_tokens: 20_000.0,
    },
    Scenario {
        description: "Beyond max range (uses Tier 3)",
        input_tokens: 300_000.0,
        output_tokens: 50_000.0,
    },
];

#[derive(Debug)]
pub(crate) struct ScenarioOutcome {
    pub(crate) scenario: &'static Scenario,
    pub(crate) result: Option<CostResult>,
}

impl ScenarioOutcome {
    pub(crate) fn passed(&self) -> bool {
        self.result.as_ref().is_some_and(|r| r.total_cost != 0.0)
    }
}

/// Run every scenario against the model. A failed cost computation is
/// recorded and the run continues; callers decide the exit status.
pub(crate) fn run_scenarios(model: &PricingModel) -> Vec<ScenarioOutcome> {
    SCENARIOS
        .iter()
        .map(|scenario| ScenarioOutcome {
            scenario,
            result: calculate_cost(model, scenario.input_tokens, scenario.output_tokens),
        })
        .collect()
}

pub(crate) fn all_passed(outcomes: &[ScenarioOutcome]) -> bool {
    outcomes.iter().all(ScenarioOutcome::passed)
}
