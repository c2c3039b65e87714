use std::process::ExitCode;

use crate::check::{all_passed, run_scenarios};
use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::output::{
    NumberFormat, ReportOptions, model_header, output_check_json, output_cost_json,
    output_tiers_json, print_check_report, print_cost_breakdown, print_tier_table,
};
use crate::pricing::{PricingModel, builtin_model, calculate_cost, load_model};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) model: PricingModel,
    pub(crate) report_options: ReportOptions,
}

fn handle_check(ctx: &CommandContext<'_>) -> ExitCode {
    let outcomes = run_scenarios(&ctx.model);
    if ctx.cli.json {
        println!("{}", output_check_json(&ctx.model, &outcomes));
    } else {
        print_check_report(&ctx.model, &outcomes, ctx.report_options);
    }
    if all_passed(&outcomes) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn handle_cost(ctx: &CommandContext<'_>, input: u64, output: u64) -> ExitCode {
    match calculate_cost(&ctx.model, input as f64, output as f64) {
        Some(result) => {
            if ctx.cli.json {
                println!("{}", output_cost_json(&ctx.model, &result));
            } else {
                print_cost_breakdown(&result, ctx.report_options);
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("Model {} has no pricing tiers.", ctx.model.name);
            ExitCode::FAILURE
        }
    }
}

fn handle_tiers(ctx: &CommandContext<'_>) -> ExitCode {
    if ctx.cli.json {
        println!("{}", output_tiers_json(&ctx.model));
    } else {
        println!("Model: {}", model_header(&ctx.model));
        print_tier_table(&ctx.model, ctx.report_options);
    }
    ExitCode::SUCCESS
}

pub(crate) fn run(cli: &Cli) -> Result<ExitCode, AppError> {
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;

    let model = match &cli.model {
        Some(path) => load_model(path)?,
        None => builtin_model(),
    };

    let ctx = CommandContext {
        cli,
        model,
        report_options: ReportOptions {
            use_color: cli.use_color(),
            number_format,
        },
    };

    let code = match &cli.command {
        None | Some(Commands::Check) => handle_check(&ctx),
        Some(Commands::Cost { input, output }) => handle_cost(&ctx, *input, *output),
        Some(Commands::Tiers) => handle_tiers(&ctx),
    };

    Ok(code)
}
