// Player pool: the static candidate list a simulation drafts from.
//
// Where the data comes from is the caller's business. This module only fixes
// the record shape and offers loaders for the two formats we ship (CSV and
// JSON) behind the `PlayerPool` trait.

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::draft::pick::Position;
use crate::settings::Scoring;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Season projections keyed by scoring format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Projections {
    pub standard: f64,
    pub half_ppr: f64,
    pub ppr: f64,
}

impl Projections {
    pub fn for_scoring(&self, scoring: Scoring) -> f64 {
        match scoring {
            Scoring::Standard => self.standard,
            Scoring::HalfPpr => self.half_ppr,
            Scoring::Ppr => self.ppr,
        }
    }
}

/// A draftable player. Read-only for the lifetime of a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub team: String,
    pub position: Position,
    /// Coarse quality bucket, lower is better.
    pub tier: u8,
    /// Average draft position (expected overall pick).
    pub adp: f64,
    pub projections: Projections,
    /// Normalized ceiling / week-to-week variance. Higher is more volatile.
    pub upside: f64,
}

impl Player {
    pub fn projection(&self, scoring: Scoring) -> f64 {
        self.projections.for_scoring(scoring)
    }
}

/// Source of the candidate list for a simulation.
pub trait PlayerPool {
    /// Produce the full candidate list, in a stable order.
    fn load(&self) -> Result<Vec<Player>, PoolError>;
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Raw serde structs (private)
// ---------------------------------------------------------------------------

/// One player row as it appears in a pool file. Extra columns are absorbed
/// via `#[serde(flatten)]`.
#[derive(Debug, Deserialize)]
struct RawPlayer {
    #[serde(alias = "player")]
    name: String,
    #[serde(default)]
    team: String,
    #[serde(alias = "pos")]
    position: String,
    tier: u8,
    adp: f64,
    #[serde(alias = "standard")]
    proj_standard: f64,
    #[serde(alias = "half_ppr")]
    proj_half_ppr: f64,
    #[serde(alias = "ppr")]
    proj_ppr: f64,
    #[serde(default)]
    upside: f64,
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

impl RawPlayer {
    /// Validate and convert. Returns `None` (after logging) for rows the
    /// simulation cannot use.
    fn into_player(self) -> Option<Player> {
        let name = self.name.trim().to_string();
        let Some(position) = Position::from_str_pos(&self.position) else {
            warn!("skipping player '{}': unknown position '{}'", name, self.position);
            return None;
        };
        let numbers = [
            self.adp,
            self.proj_standard,
            self.proj_half_ppr,
            self.proj_ppr,
            self.upside,
        ];
        if !numbers.iter().all(|v| v.is_finite()) {
            warn!("skipping player '{}': non-finite numeric field", name);
            return None;
        }
        Some(Player {
            name,
            team: self.team.trim().to_string(),
            position,
            tier: self.tier,
            adp: self.adp,
            projections: Projections {
                standard: self.proj_standard,
                half_ppr: self.proj_half_ppr,
                ppr: self.proj_ppr,
            },
            upside: self.upside,
        })
    }
}

// ---------------------------------------------------------------------------
// Reader-based loaders (private, enable testing without temp files)
// ---------------------------------------------------------------------------

fn load_csv_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let mut players = Vec::new();
    for result in reader.deserialize::<RawPlayer>() {
        match result {
            Ok(raw) => players.extend(raw.into_player()),
            Err(e) => warn!("skipping malformed player row: {}", e),
        }
    }
    Ok(players)
}

fn load_json_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, serde_json::Error> {
    let rows: Vec<serde_json::Value> = serde_json::from_reader(rdr)?;
    let mut players = Vec::new();
    for row in rows {
        match serde_json::from_value::<RawPlayer>(row) {
            Ok(raw) => players.extend(raw.into_player()),
            Err(e) => warn!("skipping malformed player entry: {}", e),
        }
    }
    Ok(players)
}

fn non_empty(players: Vec<Player>, path: &Path) -> Result<Vec<Player>, PoolError> {
    if players.is_empty() {
        return Err(PoolError::Validation(format!(
            "{} produced zero valid players",
            path.display()
        )));
    }
    Ok(players)
}

fn open(path: &Path) -> Result<std::fs::File, PoolError> {
    std::fs::File::open(path).map_err(|e| PoolError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Pool implementations
// ---------------------------------------------------------------------------

/// Player pool backed by a CSV file.
#[derive(Debug, Clone)]
pub struct CsvPool {
    pub path: PathBuf,
}

impl CsvPool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvPool { path: path.into() }
    }
}

impl PlayerPool for CsvPool {
    fn load(&self) -> Result<Vec<Player>, PoolError> {
        let file = open(&self.path)?;
        let players = load_csv_from_reader(file).map_err(|e| PoolError::Csv {
            path: self.path.display().to_string(),
            source: e,
        })?;
        non_empty(players, &self.path)
    }
}

/// Player pool backed by a JSON array file.
#[derive(Debug, Clone)]
pub struct JsonPool {
    pub path: PathBuf,
}

impl JsonPool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonPool { path: path.into() }
    }
}

impl PlayerPool for JsonPool {
    fn load(&self) -> Result<Vec<Player>, PoolError> {
        let file = open(&self.path)?;
        let players = load_json_from_reader(file).map_err(|e| PoolError::Json {
            path: self.path.display().to_string(),
            source: e,
        })?;
        non_empty(players, &self.path)
    }
}

/// In-memory pool.
#[derive(Debug, Clone, Default)]
pub struct StaticPool(pub Vec<Player>);

impl PlayerPool for StaticPool {
    fn load(&self) -> Result<Vec<Player>, PoolError> {
        Ok(self.0.clone())
    }
}

/// Pick a loader from the file extension: `.json` is JSON, anything else CSV.
pub fn pool_for_path(path: impl Into<PathBuf>) -> Box<dyn PlayerPool> {
    let path = path.into();
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        Box::new(JsonPool::new(path))
    } else {
        Box::new(CsvPool::new(path))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
