// Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mockdraft_core::{SeedInput, SettingsInput};

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(
    name = "mockdraft",
    version,
    about = "Seeded, reproducible fantasy football mock drafts"
)]
pub struct Cli {
    /// Directory holding defaults/ and config/ (default: current directory)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one mock draft and print the report
    Simulate {
        #[command(flatten)]
        league: LeagueArgs,
        /// balanced, hero_rb, zero_rb, elite_qb, upside_chaser
        #[arg(long)]
        strategy: Option<String>,
    },
    /// Run the same league once per strategy and rank the results
    Compare {
        #[command(flatten)]
        league: LeagueArgs,
    },
    /// Print roster targets and hard caps for a draft length
    Targets {
        #[arg(long, default_value = "15")]
        rounds: f64,
    },
}

/// Flags shared by every command that runs a draft. Each one overrides the
/// matching config file value.
#[derive(Args, Debug, Clone, Default)]
pub struct LeagueArgs {
    /// League size (10, 12 or 14)
    #[arg(long)]
    pub teams: Option<f64>,
    /// Draft length (12, 15 or 18)
    #[arg(long)]
    pub rounds: Option<f64>,
    /// Your draft position, 1-based
    #[arg(long)]
    pub slot: Option<f64>,
    /// standard, half_ppr, ppr
    #[arg(long)]
    pub scoring: Option<String>,
    /// Number or any text; the same seed replays the same draft
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<String>,
    /// Player pool file (.csv or .json)
    #[arg(long)]
    pub players: Option<PathBuf>,
    /// Report format
    #[arg(long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(s).ok_or_else(|| format!("unknown format '{s}' (expected text or json)"))
}

/// Layer command-line values over the config file's draft section.
pub fn merge_settings(
    file: &SettingsInput,
    league: &LeagueArgs,
    strategy: Option<&str>,
) -> SettingsInput {
    SettingsInput {
        teams: league.teams.or(file.teams),
        rounds: league.rounds.or(file.rounds),
        draft_slot: league.slot.or(file.draft_slot),
        scoring: league.scoring.clone().or_else(|| file.scoring.clone()),
        strategy: strategy.map(str::to_string).or_else(|| file.strategy.clone()),
        seed: league
            .seed
            .as_deref()
            .map(SeedInput::from_arg)
            .or_else(|| file.seed.clone()),
    }
}
