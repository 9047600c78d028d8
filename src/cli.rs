use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use common::{LabelLocale, Period};

pub mod commands;

use crate::config::GeneratorConfig;
use commands::{generate, period, scatter, scores, slider};

#[derive(Parser)]
#[command(name = "raincast")]
#[command(about = "Synthetic rainfall series and model estimates behind the rainfall dashboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that generates a series
#[derive(Args, Debug, Clone)]
pub struct SeriesArgs {
    /// Number of days to generate, starting at 2024-01-01
    ///
    /// Zero or negative values produce an empty series.
    #[arg(short, long, env = "RAINCAST_DAYS", default_value_t = 365, allow_negative_numbers = true)]
    pub days: i64,

    /// Seed for the random source
    ///
    /// Without a seed every run draws a different series.
    #[arg(short, long, env = "RAINCAST_SEED")]
    pub seed: Option<u64>,

    /// Language of the day labels (id, en)
    #[arg(short, long, env = "RAINCAST_LOCALE", default_value = "id")]
    pub locale: LabelLocale,
}

impl SeriesArgs {
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.days, self.seed, self.locale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns
    Table,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a series and print every channel
    Generate {
        #[command(flatten)]
        series: SeriesArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Print the part of a series selected by a season filter
    ///
    /// Periods: wet (days 0-89), dry (days 150-239), all (first year)
    Period {
        /// Season filter
        period: Period,

        #[command(flatten)]
        series: SeriesArgs,
    },
    /// Print the actual-vs-ensemble pairs of every third day as JSON
    Scatter {
        #[command(flatten)]
        series: SeriesArgs,
    },
    /// Print the three live estimates for a rainfall value
    Slider {
        /// Rainfall in mm
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Compare model errors: published figures and scores measured on a generated series
    Scores {
        #[command(flatten)]
        series: SeriesArgs,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let output = match self.command {
            Commands::Generate { series, format } => generate(&series.config(), format)?,
            Commands::Period { period: selected, series } => period(&series.config(), selected)?,
            Commands::Scatter { series } => scatter(&series.config())?,
            Commands::Slider { value } => slider(value),
            Commands::Scores { series } => scores(&series.config())?,
        };
        println!("{}", output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_with_defaults() {
        let cli = Cli::try_parse_from(["raincast", "generate", "--seed", "4"]).unwrap();
        match cli.command {
            Commands::Generate { series, format } => {
                assert_eq!(series.seed, Some(4));
                assert_eq!(series.locale, LabelLocale::Indonesian);
                assert_eq!(format, OutputFormat::Table);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_period() {
        let cli = Cli::try_parse_from(["raincast", "period", "dry", "-d", "200", "-l", "en"]).unwrap();
        match cli.command {
            Commands::Period { period, series } => {
                assert_eq!(period, Period::Dry);
                assert_eq!(series.days, 200);
                assert_eq!(series.locale, LabelLocale::English);
            }
            _ => panic!("expected period"),
        }
    }

    #[test]
    fn test_unknown_period_is_rejected() {
        assert!(Cli::try_parse_from(["raincast", "period", "monsoon"]).is_err());
    }

    #[test]
    fn test_negative_days_are_accepted() {
        let cli = Cli::try_parse_from(["raincast", "scatter", "--days", "-3"]).unwrap();
        match cli.command {
            Commands::Scatter { series } => assert_eq!(series.config().days, 0),
            _ => panic!("expected scatter"),
        }
    }
}
