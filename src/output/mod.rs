mod format;
mod json;
mod report;

pub(crate) use format::NumberFormat;
pub(crate) use json::{output_check_json, output_cost_json, output_tiers_json};
pub(crate) use report::{
    ReportOptions, model_header, print_check_report, print_cost_breakdown, print_tier_table,
};
