// Configuration loading and parsing (mockdraft.toml).

use std::path::{Path, PathBuf};

use mockdraft_core::settings::{lenient_number, lenient_seed, lenient_text};
use mockdraft_core::{SeedInput, SettingsInput};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

pub const CONFIG_FILE: &str = "mockdraft.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Assembled Config
// ---------------------------------------------------------------------------

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Raw draft settings. Still untrusted: they go through the normalizer
    /// like any other input.
    pub draft: SettingsInput,
    /// Player pool file, resolved against the base directory.
    pub players_path: PathBuf,
    pub output: OutputFormat,
}

// ---------------------------------------------------------------------------
// mockdraft.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire mockdraft.toml file.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    draft: DraftSection,
    data: DataSection,
    #[serde(default)]
    output: OutputSection,
}

/// Wrongly typed values become `None` here and fall back to defaults
/// during normalization, same as an absent key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DraftSection {
    #[serde(deserialize_with = "lenient_number")]
    teams: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    rounds: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    draft_slot: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    scoring: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    strategy: Option<String>,
    #[serde(deserialize_with = "lenient_seed")]
    seed: Option<SeedInput>,
}

impl From<DraftSection> for SettingsInput {
    fn from(d: DraftSection) -> Self {
        SettingsInput {
            teams: d.teams,
            rounds: d.rounds,
            draft_slot: d.draft_slot,
            scoring: d.scoring,
            strategy: d.strategy,
            seed: d.seed,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct DataSection {
    players: String,
}

#[derive(Debug, Clone, Deserialize)]
struct OutputSection {
    #[serde(default = "default_format")]
    format: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        OutputSection {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".into()
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/mockdraft.toml` relative to `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&file)?;

    let output = OutputFormat::parse(&file.output.format).unwrap_or_default();
    let players = PathBuf::from(file.data.players.trim());
    let players_path = if players.is_absolute() {
        players
    } else {
        base_dir.join(players)
    };

    Ok(Config {
        draft: file.draft.into(),
        players_path,
        output,
    })
}

/// Copy `defaults/mockdraft.toml` into `config/` when no config exists yet.
/// Returns whether a copy was made. An existing config is never touched.
pub fn ensure_config_file(base_dir: &Path) -> Result<bool, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.exists() {
        return Ok(false);
    }

    let source = base_dir.join("defaults").join(CONFIG_FILE);
    if !source.exists() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "neither config/{CONFIG_FILE} nor defaults/{CONFIG_FILE} found in {}",
                base_dir.display()
            ),
        });
    }

    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to create {}: {e}", dir.display()),
        })?;
    }
    std::fs::copy(&source, &target).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to copy {}: {e}", source.display()),
    })?;

    info!("created {} from defaults", target.display());
    Ok(true)
}

/// Convenience wrapper: ensures defaults are copied, then loads config
/// relative to `base_dir`.
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    ensure_config_file(base_dir)?;
    load_config_from(base_dir)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Only the fields the CLI itself owns are validated here. Draft settings
/// are left to the normalizer, which never rejects input.
fn validate(file: &ConfigFile) -> Result<(), ConfigError> {
    if file.data.players.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.players".into(),
            message: "must not be empty".into(),
        });
    }

    if OutputFormat::parse(&file.output.format).is_none() {
        return Err(ConfigError::ValidationError {
            field: "output.format".into(),
            message: format!("must be \"text\" or \"json\", got \"{}\"", file.output.format),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Helper: the workspace root, which holds `defaults/`.
    fn project_root() -> PathBuf {
        let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        manifest
            .ancestors()
            .find(|p| p.join("defaults").join(CONFIG_FILE).exists())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| panic!("cannot locate defaults/ above {}", manifest.display()))
    }

    fn write_config(dir: &TempDir, body: &str) {
        let config_dir = dir.path().join("config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(CONFIG_FILE), body).unwrap();
    }

    #[test]
    fn load_shipped_defaults() {
        let tmp = TempDir::new().unwrap();
        let defaults = tmp.path().join("defaults");
        fs::create_dir_all(&defaults).unwrap();
        fs::copy(
            project_root().join("defaults").join(CONFIG_FILE),
            defaults.join(CONFIG_FILE),
        )
        .unwrap();

        let config = load_config(tmp.path()).expect("defaults should load");
        assert_eq!(config.draft.teams, Some(12.0));
        assert_eq!(config.draft.rounds, Some(15.0));
        assert_eq!(config.draft.scoring.as_deref(), Some("half_ppr"));
        assert_eq!(config.draft.strategy.as_deref(), Some("balanced"));
        assert_eq!(config.draft.seed, None);
        assert_eq!(config.players_path, tmp.path().join("data/players.csv"));
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn draft_section_is_optional() {
        let tmp = TempDir::new().unwrap();
        write_config(&tmp, "[data]\nplayers = \"pool.json\"\n");
        let config = load_config_from(tmp.path()).unwrap();
        assert_eq!(config.draft, SettingsInput::default());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn seed_may_be_number_or_text() {
        let tmp = TempDir::new().unwrap();
        write_config(
            &tmp,
            "[draft]\nseed = 42\ndraft_slot = 3\n[data]\nplayers = \"p.csv\"\n",
        );
        let config = load_config_from(tmp.path()).unwrap();
        assert_eq!(config.draft.seed, Some(SeedInput::Number(42.0)));
        assert_eq!(config.draft.draft_slot, Some(3.0));

        write_config(
            &tmp,
            "[draft]\nseed = \"draft-night\"\n[data]\nplayers = \"p.csv\"\n",
        );
        let config = load_config_from(tmp.path()).unwrap();
        assert_eq!(config.draft.seed, Some(SeedInput::Text("draft-night".into())));
    }

    #[test]
    fn out_of_range_draft_values_are_not_rejected() {
        let tmp = TempDir::new().unwrap();
        write_config(
            &tmp,
            "[draft]\nteams = 11\nrounds = 999\nstrategy = \"yolo\"\n[data]\nplayers = \"p.csv\"\n",
        );
        let config = load_config_from(tmp.path()).unwrap();
        assert_eq!(config.draft.rounds, Some(999.0));
        assert_eq!(config.draft.strategy.as_deref(), Some("yolo"));
    }

    #[test]
    fn absolute_players_path_is_kept() {
        let tmp = TempDir::new().unwrap();
        let abs = tmp.path().join("elsewhere/players.csv");
        write_config(
            &tmp,
            &format!("[data]\nplayers = {:?}\n", abs.display().to_string()),
        );
        let config = load_config_from(tmp.path()).unwrap();
        assert_eq!(config.players_path, abs);
    }

    #[test]
    fn json_output_format() {
        let tmp = TempDir::new().unwrap();
        write_config(&tmp, "[data]\nplayers = \"p.csv\"\n[output]\nformat = \"JSON\"\n");
        assert_eq!(load_config_from(tmp.path()).unwrap().output, OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_output_format() {
        let tmp = TempDir::new().unwrap();
        write_config(&tmp, "[data]\nplayers = \"p.csv\"\n[output]\nformat = \"xml\"\n");
        match load_config_from(tmp.path()).unwrap_err() {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "output.format"),
            other => panic!("expected ValidationError, got: {other}"),
        }
    }

    #[test]
    fn rejects_empty_players_path() {
        let tmp = TempDir::new().unwrap();
        write_config(&tmp, "[data]\nplayers = \"  \"\n");
        match load_config_from(tmp.path()).unwrap_err() {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "data.players"),
            other => panic!("expected ValidationError, got: {other}"),
        }
    }

    #[test]
    fn missing_data_section_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        write_config(&tmp, "[draft]\nteams = 10\n");
        assert!(matches!(
            load_config_from(tmp.path()).unwrap_err(),
            ConfigError::ParseError { .. }
        ));
    }

    #[test]
    fn file_not_found_for_missing_config() {
        let tmp = TempDir::new().unwrap();
        match load_config_from(tmp.path()).unwrap_err() {
            ConfigError::FileNotFound { path } => assert!(path.ends_with("config/mockdraft.toml")),
            other => panic!("expected FileNotFound, got: {other}"),
        }
    }

    #[test]
    fn wrongly_typed_draft_values_fall_back() {
        let tmp = TempDir::new().unwrap();
        write_config(
            &tmp,
            r#"
[draft]
teams = "twelve"
rounds = "18"
draft_slot = 3
scoring = 3
strategy = ["zero_rb"]
seed = true

[data]
players = "p.csv"
"#,
        );
        let config = load_config_from(tmp.path()).unwrap();
        assert_eq!(config.draft.teams, None);
        assert_eq!(config.draft.rounds, Some(18.0));
        assert_eq!(config.draft.draft_slot, Some(3.0));
        assert_eq!(config.draft.scoring, None);
        assert_eq!(config.draft.strategy, None);
        assert_eq!(config.draft.seed, None);

        let settings = mockdraft_core::Settings::normalize(&config.draft);
        assert_eq!(settings.teams, 12);
        assert_eq!(settings.rounds, 18);
        assert_eq!(settings.draft_slot, 3);
        assert_eq!(settings.scoring, mockdraft_core::Scoring::HalfPpr);
    }

    #[test]
    fn ensure_config_file_copies_defaults() {
        let tmp = TempDir::new().unwrap();
        let defaults = tmp.path().join("defaults");
        fs::create_dir_all(&defaults).unwrap();
        fs::write(defaults.join(CONFIG_FILE), "[data]\nplayers = \"p.csv\"\n").unwrap();

        assert!(ensure_config_file(tmp.path()).unwrap());
        let config = load_config_from(tmp.path()).unwrap();
        assert_eq!(config.players_path, tmp.path().join("p.csv"));
    }

    #[test]
    fn ensure_config_file_keeps_existing() {
        let tmp = TempDir::new().unwrap();
        let defaults = tmp.path().join("defaults");
        fs::create_dir_all(&defaults).unwrap();
        fs::write(defaults.join(CONFIG_FILE), "[data]\nplayers = \"p.csv\"\n").unwrap();
        write_config(&tmp, "# custom\n");

        assert!(!ensure_config_file(tmp.path()).unwrap());
        let content = fs::read_to_string(tmp.path().join("config").join(CONFIG_FILE)).unwrap();
        assert_eq!(content, "# custom\n");
    }

    #[test]
    fn ensure_config_file_errors_without_defaults() {
        let tmp = TempDir::new().unwrap();
        match ensure_config_file(tmp.path()).unwrap_err() {
            ConfigError::DefaultsCopyError { message } => {
                assert!(message.contains("neither config/mockdraft.toml nor defaults/mockdraft.toml"));
            }
            other => panic!("expected DefaultsCopyError, got: {other}"),
        }
    }
}
