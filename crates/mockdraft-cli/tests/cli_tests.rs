// Integration tests for the CLI library: config on disk, pool loading, and
// the commands and reports built on top of them.

use std::fs;
use std::path::PathBuf;

use mockdraft::cli::{merge_settings, LeagueArgs};
use mockdraft::commands::{compare_strategies, load_players};
use mockdraft::config::{load_config, OutputFormat, CONFIG_FILE};
use mockdraft::report;
use mockdraft_core::rng::fnv1a_32;
use mockdraft_core::{simulate, PoolError, Scoring, SeedInput, Settings, SettingsInput, Strategy};
use tempfile::TempDir;

// ===========================================================================
// Test helpers
// ===========================================================================

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// A scratch project: config/mockdraft.toml plus players.csv at the root.
fn scratch_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("config")).unwrap();
    fs::copy(fixture(CONFIG_FILE), tmp.path().join("config").join(CONFIG_FILE)).unwrap();
    fs::copy(fixture("players.csv"), tmp.path().join("players.csv")).unwrap();
    tmp
}

fn fixture_settings(tmp: &TempDir) -> (Settings, Vec<mockdraft_core::Player>) {
    let config = load_config(tmp.path()).unwrap();
    let players = load_players(&config.players_path).unwrap();
    let input = merge_settings(&config.draft, &LeagueArgs::default(), None);
    (Settings::normalize(&input), players)
}

// ===========================================================================
// Config + pool
// ===========================================================================

#[test]
fn fixture_config_loads_and_normalizes() {
    let tmp = scratch_project();
    let config = load_config(tmp.path()).unwrap();
    assert_eq!(config.output, OutputFormat::Json);
    assert_eq!(config.players_path, tmp.path().join("players.csv"));

    let (settings, players) = fixture_settings(&tmp);
    assert_eq!(players.len(), 222);
    assert_eq!(settings.teams, 10);
    assert_eq!(settings.rounds, 12);
    assert_eq!(settings.draft_slot, 4);
    assert_eq!(settings.scoring, Scoring::Ppr);
    assert_eq!(settings.strategy, Strategy::HeroRb);
    assert_eq!(settings.seed, fnv1a_32("fixture-league"));
}

#[test]
fn json_pool_loads_by_extension() {
    let players = load_players(&fixture("players.json")).unwrap();
    assert_eq!(players.len(), 12);
    assert!(players.windows(2).all(|w| w[0].adp <= w[1].adp));
}

#[test]
fn missing_pool_is_an_io_error() {
    let err = load_players(&fixture("does-not-exist.csv")).unwrap_err();
    assert!(matches!(err, PoolError::Io { .. }));
}

// ===========================================================================
// Simulate
// ===========================================================================

#[test]
fn fixture_league_runs_a_full_draft() {
    let tmp = scratch_project();
    let (settings, players) = fixture_settings(&tmp);
    let result = simulate(&settings, &players).unwrap();

    let overall: Vec<u32> = result.user_picks.iter().map(|p| p.overall_pick).collect();
    assert_eq!(overall, vec![4, 17, 24, 37, 44, 57, 64, 77, 84, 97, 104, 117]);
    assert_eq!(result.skipped_picks, 0);
    assert_eq!(result.roster.total(), 12);
    assert_eq!(result.roster.k, 0);
}

#[test]
fn reported_seed_replays_the_draft() {
    let tmp = scratch_project();
    let (settings, players) = fixture_settings(&tmp);
    let first = simulate(&settings, &players).unwrap();

    let text = report::render_text(&first);
    assert!(text.contains(&format!("(seed {})", settings.seed)));

    let replay_input = SettingsInput {
        seed: Some(SeedInput::from_arg(&settings.seed.to_string())),
        ..SettingsInput::from(&settings)
    };
    let replay = simulate(&Settings::normalize(&replay_input), &players).unwrap();
    assert_eq!(first, replay);
}

#[test]
fn flag_overrides_change_the_league() {
    let tmp = scratch_project();
    let config = load_config(tmp.path()).unwrap();
    let league = LeagueArgs {
        teams: Some(12.0),
        slot: Some(1.0),
        ..Default::default()
    };
    let settings = Settings::normalize(&merge_settings(&config.draft, &league, Some("zero_rb")));
    assert_eq!(settings.teams, 12);
    assert_eq!(settings.draft_slot, 1);
    assert_eq!(settings.strategy, Strategy::ZeroRb);
    assert_eq!(settings.rounds, 12);
}

// ===========================================================================
// Compare
// ===========================================================================

#[test]
fn compare_runs_every_strategy_best_first() {
    let tmp = scratch_project();
    let (settings, players) = fixture_settings(&tmp);
    let runs = compare_strategies(&settings, &players).unwrap();

    assert_eq!(runs.len(), Strategy::ALL.len());
    for pair in runs.windows(2) {
        assert!(pair[0].grade.score >= pair[1].grade.score);
    }
    for run in &runs {
        let direct = simulate(&Settings { strategy: run.strategy, ..settings }, &players).unwrap();
        assert_eq!(run.grade, direct.grade);
    }

    let text = report::render_comparison_text(&settings, &runs);
    assert!(text.contains(&format!("seed {}", settings.seed)));
}
