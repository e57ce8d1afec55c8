// Settings normalization: untrusted input -> fully resolved draft settings.
//
// The caller is usually a form or a config file, so nothing here is an error.
// Every missing or out-of-range field silently falls back to its default.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::rng::fnv1a_32;

// ---------------------------------------------------------------------------
// Allowed values and defaults
// ---------------------------------------------------------------------------

pub const ALLOWED_TEAMS: [u32; 3] = [10, 12, 14];
pub const ALLOWED_ROUNDS: [u32; 3] = [12, 15, 18];
pub const DEFAULT_TEAMS: u32 = 12;
pub const DEFAULT_ROUNDS: u32 = 15;

// ---------------------------------------------------------------------------
// Scoring format
// ---------------------------------------------------------------------------

/// Fantasy scoring format; selects which projection column a player uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scoring {
    Standard,
    #[default]
    HalfPpr,
    Ppr,
}

impl Scoring {
    pub const ALL: [Scoring; 3] = [Scoring::Standard, Scoring::HalfPpr, Scoring::Ppr];

    /// Parse a scoring name (`standard`, `half_ppr`, `ppr`), case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(Scoring::Standard),
            "half_ppr" => Some(Scoring::HalfPpr),
            "ppr" => Some(Scoring::Ppr),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scoring::Standard => "standard",
            Scoring::HalfPpr => "half_ppr",
            Scoring::Ppr => "ppr",
        }
    }
}

impl fmt::Display for Scoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Draft strategy
// ---------------------------------------------------------------------------

/// Team-building philosophy that biases the pick scoring function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Balanced,
    HeroRb,
    ZeroRb,
    EliteQb,
    UpsideChaser,
}

impl Strategy {
    /// Fixed order; simulated opponents draw from this list by index.
    pub const ALL: [Strategy; 5] = [
        Strategy::Balanced,
        Strategy::HeroRb,
        Strategy::ZeroRb,
        Strategy::EliteQb,
        Strategy::UpsideChaser,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "balanced" => Some(Strategy::Balanced),
            "hero_rb" => Some(Strategy::HeroRb),
            "zero_rb" => Some(Strategy::ZeroRb),
            "elite_qb" => Some(Strategy::EliteQb),
            "upside_chaser" => Some(Strategy::UpsideChaser),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Balanced => "balanced",
            Strategy::HeroRb => "hero_rb",
            Strategy::ZeroRb => "zero_rb",
            Strategy::EliteQb => "elite_qb",
            Strategy::UpsideChaser => "upside_chaser",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// A seed as supplied by the caller: either a number or arbitrary text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedInput {
    Number(f64),
    Text(String),
}

impl SeedInput {
    /// Interpret command-line style text: finite numbers stay numeric,
    /// everything else is kept as a string to be hashed.
    pub fn from_arg(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => SeedInput::Number(n),
            _ => SeedInput::Text(raw.to_string()),
        }
    }

    /// Resolve to the 32-bit seed the RNG consumes.
    ///
    /// Finite numbers are floored and wrapped into u32. Anything else hashes
    /// its string form, so "NaN" and "Infinity" are stable seeds too.
    pub fn resolve(&self) -> u32 {
        match self {
            SeedInput::Number(n) if n.is_finite() => (n.floor() as i64) as u32,
            SeedInput::Number(n) => fnv1a_32(&non_finite_repr(*n)),
            SeedInput::Text(s) => fnv1a_32(s),
        }
    }
}

fn non_finite_repr(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_sign_negative() {
        "-Infinity".to_string()
    } else {
        "Infinity".to_string()
    }
}

/// Partial, untrusted settings. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsInput {
    #[serde(deserialize_with = "lenient_number")]
    pub teams: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub rounds: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub draft_slot: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub scoring: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub strategy: Option<String>,
    #[serde(deserialize_with = "lenient_seed")]
    pub seed: Option<SeedInput>,
}

// ---------------------------------------------------------------------------
// Lenient field deserializers
// ---------------------------------------------------------------------------
//
// A wrongly typed field must not sink the whole input. Each of these accepts
// any value and maps what it cannot use to `None`, which the normalizer then
// replaces with the default.

/// Any scalar or structure a settings field might carry.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Number, or text holding a number ("12"). Anything else is `None`.
pub fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<LooseValue>::deserialize(d)? {
        Some(LooseValue::Number(n)) => Some(n),
        Some(LooseValue::Text(s)) => match s.trim().parse::<f64>() {
            Ok(n) => Some(n),
            Err(_) => {
                debug!("ignoring non-numeric value '{}'", s);
                None
            }
        },
        Some(LooseValue::Other(_)) => {
            debug!("ignoring numeric field of unsupported type");
            None
        }
        None => None,
    })
}

/// Text only. Numbers and structures are `None`.
pub fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<LooseValue>::deserialize(d)? {
        Some(LooseValue::Text(s)) => Some(s),
        Some(_) => {
            debug!("ignoring non-text value for a text field");
            None
        }
        None => None,
    })
}

/// Number or text seed. Anything else is `None` (a clock seed is used).
pub fn lenient_seed<'de, D: Deserializer<'de>>(d: D) -> Result<Option<SeedInput>, D::Error> {
    Ok(match Option::<LooseValue>::deserialize(d)? {
        Some(LooseValue::Number(n)) => Some(SeedInput::Number(n)),
        Some(LooseValue::Text(s)) => Some(SeedInput::Text(s)),
        Some(LooseValue::Other(_)) => {
            debug!("ignoring seed of unsupported type");
            None
        }
        None => None,
    })
}

// ---------------------------------------------------------------------------
// Normalized settings
// ---------------------------------------------------------------------------

/// Fully resolved settings. Every field is present and in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub teams: u32,
    pub rounds: u32,
    pub draft_slot: u32,
    pub scoring: Scoring,
    pub strategy: Strategy,
    pub seed: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            teams: DEFAULT_TEAMS,
            rounds: DEFAULT_ROUNDS,
            draft_slot: default_slot(DEFAULT_TEAMS),
            scoring: Scoring::default(),
            strategy: Strategy::default(),
            seed: 0,
        }
    }
}

impl Settings {
    /// Normalize raw input. A missing seed is taken from the wall clock,
    /// which makes that run non-reproducible unless the caller records
    /// the resolved `seed` from the returned settings.
    pub fn normalize(input: &SettingsInput) -> Settings {
        Self::normalize_with_clock(input, clock_seed)
    }

    /// Same as [`Settings::normalize`] with an injectable seed source for
    /// the no-seed case.
    pub fn normalize_with_clock(input: &SettingsInput, clock: impl FnOnce() -> u32) -> Settings {
        let teams = pick_allowed(input.teams, &ALLOWED_TEAMS, DEFAULT_TEAMS, "teams");
        let rounds = pick_allowed(input.rounds, &ALLOWED_ROUNDS, DEFAULT_ROUNDS, "rounds");

        let draft_slot = match input.draft_slot {
            Some(slot) if slot.is_finite() => slot.floor().clamp(1.0, f64::from(teams)) as u32,
            Some(slot) => {
                debug!("draft slot {} is not finite, using default", slot);
                default_slot(teams)
            }
            None => default_slot(teams),
        };

        let scoring = match input.scoring.as_deref() {
            Some(raw) => Scoring::parse(raw).unwrap_or_else(|| {
                debug!("unknown scoring '{}', falling back to half_ppr", raw);
                Scoring::default()
            }),
            None => Scoring::default(),
        };

        let strategy = match input.strategy.as_deref() {
            Some(raw) => Strategy::parse(raw).unwrap_or_else(|| {
                debug!("unknown strategy '{}', falling back to balanced", raw);
                Strategy::default()
            }),
            None => Strategy::default(),
        };

        let seed = match &input.seed {
            Some(seed) => seed.resolve(),
            None => clock(),
        };

        Settings {
            teams,
            rounds,
            draft_slot,
            scoring,
            strategy,
            seed,
        }
    }

    /// Total picks the draft is scheduled to make.
    pub fn total_picks(&self) -> u32 {
        self.teams * self.rounds
    }
}

impl From<&Settings> for SettingsInput {
    fn from(settings: &Settings) -> Self {
        SettingsInput {
            teams: Some(f64::from(settings.teams)),
            rounds: Some(f64::from(settings.rounds)),
            draft_slot: Some(f64::from(settings.draft_slot)),
            scoring: Some(settings.scoring.as_str().to_string()),
            strategy: Some(settings.strategy.as_str().to_string()),
            seed: Some(SeedInput::Number(f64::from(settings.seed))),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn default_slot(teams: u32) -> u32 {
    teams.div_ceil(2)
}

fn pick_allowed(raw: Option<f64>, allowed: &[u32], default: u32, field: &str) -> u32 {
    match raw {
        Some(v) => allowed
            .iter()
            .copied()
            .find(|&a| f64::from(a) == v)
            .unwrap_or_else(|| {
                debug!("{} = {} is not one of {:?}, using {}", field, v, allowed, default);
                default
            }),
        None => default,
    }
}

/// Low 32 bits of the current Unix time in milliseconds.
fn clock_seed() -> u32 {
    (chrono::Utc::now().timestamp_millis() & 0xFFFF_FFFF) as u32
}
