// Mock draft entry point.
//
// Startup sequence:
// 1. Parse arguments
// 2. Initialize tracing (stderr, so stdout stays clean for JSON)
// 3. Load config (copying defaults on first run) unless only targets are asked for
// 4. Load the player pool
// 5. Normalize settings, run the command, print the report

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use mockdraft::cli::{merge_settings, Cli, Commands, LeagueArgs};
use mockdraft::commands::{compare_strategies, load_players};
use mockdraft::config::{self, Config, OutputFormat};
use mockdraft::report;
use mockdraft_core::{simulate, Player, Settings, SettingsInput};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to read current directory")?,
    };

    match cli.command {
        Commands::Targets { rounds } => {
            let settings = Settings::normalize(&SettingsInput {
                rounds: Some(rounds),
                ..Default::default()
            });
            print!("{}", report::render_targets(settings.rounds));
        }
        Commands::Simulate { league, strategy } => {
            let (config, players) = prepare(&base_dir, &league)?;
            let input = merge_settings(&config.draft, &league, strategy.as_deref());
            let settings = Settings::normalize(&input);
            info!("simulating with seed {}", settings.seed);

            let result = simulate(&settings, &players).context("simulation failed")?;
            match output_format(&config, &league) {
                OutputFormat::Text => print!("{}", report::render_text(&result)),
                OutputFormat::Json => println!(
                    "{}",
                    report::render_json(&result).context("failed to serialize result")?
                ),
            }
        }
        Commands::Compare { league } => {
            let (config, players) = prepare(&base_dir, &league)?;
            let input = merge_settings(&config.draft, &league, None);
            let settings = Settings::normalize(&input);
            info!("comparing strategies with seed {}", settings.seed);

            let runs = compare_strategies(&settings, &players).context("comparison failed")?;
            match output_format(&config, &league) {
                OutputFormat::Text => print!("{}", report::render_comparison_text(&settings, &runs)),
                OutputFormat::Json => println!(
                    "{}",
                    report::render_comparison_json(&settings, &runs)
                        .context("failed to serialize comparison")?
                ),
            }
        }
    }

    Ok(())
}

/// Load config and the player pool, honoring a `--players` override.
fn prepare(base_dir: &std::path::Path, league: &LeagueArgs) -> anyhow::Result<(Config, Vec<Player>)> {
    let config = config::load_config(base_dir).context("failed to load configuration")?;
    let path: PathBuf = league
        .players
        .clone()
        .unwrap_or_else(|| config.players_path.clone());
    let players = load_players(&path)
        .with_context(|| format!("failed to load player pool from {}", path.display()))?;
    Ok((config, players))
}

fn output_format(config: &Config, league: &LeagueArgs) -> OutputFormat {
    league.format.unwrap_or(config.output)
}

/// Initialize tracing to stderr. Filter comes from `MOCKDRAFT_LOG`.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_env("MOCKDRAFT_LOG")
                .unwrap_or_else(|_| EnvFilter::new("mockdraft=info,mockdraft_core=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
