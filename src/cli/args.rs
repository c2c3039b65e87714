//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "tiercost")]
#[command(about = "Tiered token pricing calculator and smoke checker", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Pricing model JSON file (defaults to built-in qwen3-max-preview)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub(crate) model: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Locale for number formatting (e.g., "en", "de", "fr")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.json && config.json {
            self.json = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if let Some(ref color) = config.color
            && self.color == ColorMode::Auto
        {
            match color.to_lowercase().as_str() {
                "always" => self.color = ColorMode::Always,
                "never" => self.color = ColorMode::Never,
                _ => {}
            }
        }

        // String options: only apply if CLI didn't set them
        if self.model.is_none() {
            self.model = config.model.clone();
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            command: None,
            model: None,
            json: false,
            color: ColorMode::Auto,
            no_color: false,
            locale: None,
        }
    }

    #[test]
    fn config_fills_unset_options() {
        let config = Config {
            json: true,
            no_color: false,
            color: Some("never".to_string()),
            locale: Some("de".to_string()),
            model: Some(PathBuf::from("/tmp/model.json")),
        };
        let cli = bare_cli().with_config(&config);
        assert!(cli.json);
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.locale.as_deref(), Some("de"));
        assert_eq!(cli.model.as_deref(), Some(std::path::Path::new("/tmp/model.json")));
    }

    #[test]
    fn cli_args_take_precedence_over_config() {
        let config = Config {
            json: false,
            no_color: false,
            color: Some("never".to_string()),
            locale: Some("de".to_string()),
            model: None,
        };
        let mut cli = bare_cli();
        cli.color = ColorMode::Always;
        cli.locale = Some("fr".to_string());
        let cli = cli.with_config(&config);
        assert_eq!(cli.color, ColorMode::Always);
        assert_eq!(cli.locale.as_deref(), Some("fr"));
    }

    #[test]
    fn no_color_flag_wins() {
        let mut cli = bare_cli();
        cli.no_color = true;
        cli.color = ColorMode::Always;
        assert!(!cli.use_color());
    }
}
