//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HYPERCUBE_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use hypercube_core::{Projection, PuzzleTiming};
use serde::{Serialize, Deserialize};
use std::path::Path;
use thiserror::Error;

/// Smallest eye distance that keeps every rotated vertex in front of the eye
pub const MIN_W_DISTANCE: f32 = 2.0;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Puzzle identity and seeds
    #[serde(default)]
    pub puzzle: PuzzleConfig,
    /// Animation and input timings
    #[serde(default)]
    pub timing: PuzzleTiming,
    /// 4D to 3D projection
    #[serde(default)]
    pub projection: Projection,
    /// Frame stepping of the host loop
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HYPERCUBE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional user overrides
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HYPERCUBE_PUZZLE__RULE_SEED=7 -> puzzle.rule_seed = 7
        figment = figment.merge(Env::prefixed("HYPERCUBE_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check constraints the types alone cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timing
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if !(self.projection.w_distance > MIN_W_DISTANCE) {
            return Err(ConfigError::Invalid(format!(
                "projection.w_distance must exceed {}, got {}",
                MIN_W_DISTANCE, self.projection.w_distance
            )));
        }
        if !self.projection.scale.is_finite() || self.projection.scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "projection.scale must be positive, got {}",
                self.projection.scale
            )));
        }
        if self.simulation.frame_rate == 0 {
            return Err(ConfigError::Invalid("simulation.frame_rate must be at least 1".to_string()));
        }
        if !(self.simulation.max_dt > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "simulation.max_dt must be positive, got {}",
                self.simulation.max_dt
            )));
        }
        Ok(())
    }
}

/// Puzzle identity and seeds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Id shown in log lines
    pub instance_id: u32,
    /// Seed for the rule tables
    pub rule_seed: u64,
    /// Seed for rotations, colorings and pauses; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            instance_id: 1,
            rule_seed: 1,
            rng_seed: None,
        }
    }
}

/// Host loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Frames per second the puzzle is advanced at
    pub frame_rate: u32,
    /// Largest step passed to a single advance, in seconds
    pub max_dt: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            max_dt: 0.25,
        }
    }
}

impl SimulationConfig {
    /// Seconds per frame
    pub fn frame_dt(&self) -> f32 {
        (1.0 / self.frame_rate.max(1) as f32).min(self.max_dt)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the schema
    #[error("Configuration error: {0}")]
    Load(#[from] figment::Error),
    /// Values that parse but make no sense
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
