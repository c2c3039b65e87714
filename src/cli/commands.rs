//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Run the built-in smoke scenarios against the pricing model (default)
    Check,
    /// Compute a cost breakdown for the given token counts
    Cost {
        /// Input (prompt) token count
        #[arg(short, long)]
        input: u64,
        /// Output (completion) token count
        #[arg(short, long)]
        output: u64,
    },
    /// Show the model's pricing tiers
    Tiers,
}
