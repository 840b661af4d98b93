//! Configuration management for uxlex.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, UxlexError};
use crate::core::search::Bm25Params;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Corpus data configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Directory holding the domain CSV files (stacks live in `stacks/`)
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Results returned when the caller does not ask for a count
    #[serde(default = "default_max_results")]
    pub default_max_results: usize,

    /// Hard cap on results per query
    #[serde(default = "default_max_results_cap")]
    pub max_results_cap: usize,

    /// Maximum query string length (characters)
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    /// BM25 term-frequency saturation
    #[serde(default = "default_k1")]
    pub k1: f64,

    /// BM25 length normalization
    #[serde(default = "default_b")]
    pub b: f64,

    /// Maximum edit distance for typo correction
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: usize,

    /// Expand queries with the synonym table
    #[serde(default = "default_true")]
    pub use_synonyms: bool,

    /// Correct unknown query tokens against the corpus vocabulary
    #[serde(default = "default_true")]
    pub use_fuzzy: bool,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_max_results() -> usize {
    3
}

fn default_max_results_cap() -> usize {
    50
}

fn default_max_query_length() -> usize {
    500
}

fn default_k1() -> f64 {
    1.5
}

fn default_b() -> f64 {
    0.75
}

fn default_fuzzy_threshold() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_max_results: default_max_results(),
            max_results_cap: default_max_results_cap(),
            max_query_length: default_max_query_length(),
            k1: default_k1(),
            b: default_b(),
            fuzzy_threshold: default_fuzzy_threshold(),
            use_synonyms: true,
            use_fuzzy: true,
        }
    }
}

impl SearchConfig {
    /// BM25 parameters derived from this configuration
    pub fn bm25_params(&self) -> Bm25Params {
        Bm25Params {
            k1: self.k1,
            b: self.b,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| UxlexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. UXLEX_CONFIG env var
    /// 2. XDG config file (~/.config/uxlex/config.toml)
    /// 3. ./uxlex.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("UXLEX_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("uxlex.toml").exists() {
                Self::from_file("uxlex.toml")?
            } else {
                Self::default()
            }
        };

        // Fall back to the XDG data directory when ./data is absent
        if env::var("UXLEX_DATA_DIR").is_err()
            && config.data.dir == default_data_dir()
            && !config.data.dir.exists()
        {
            config.data.dir = xdg.corpus_dir();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(data_dir) = env::var("UXLEX_DATA_DIR") {
            self.data.dir = PathBuf::from(data_dir);
        }

        if let Ok(default_max) = env::var("UXLEX_DEFAULT_MAX_RESULTS") {
            if let Ok(n) = default_max.parse() {
                self.search.default_max_results = n;
            }
        }
        if let Ok(cap) = env::var("UXLEX_MAX_RESULTS_CAP") {
            if let Ok(n) = cap.parse() {
                self.search.max_results_cap = n;
            }
        }
        if let Ok(max_query_len) = env::var("UXLEX_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }
        if let Ok(k1) = env::var("UXLEX_K1") {
            if let Ok(v) = k1.parse() {
                self.search.k1 = v;
            }
        }
        if let Ok(b) = env::var("UXLEX_B") {
            if let Ok(v) = b.parse() {
                self.search.b = v;
            }
        }
        if let Ok(threshold) = env::var("UXLEX_FUZZY_THRESHOLD") {
            if let Ok(t) = threshold.parse() {
                self.search.fuzzy_threshold = t;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.default_max_results == 0 {
            return Err(UxlexError::ConfigError(
                "Default max results must be non-zero".to_string(),
            ));
        }

        if self.search.default_max_results > self.search.max_results_cap {
            return Err(UxlexError::ConfigError(
                "Default max results cannot exceed the results cap".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(UxlexError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if !self.search.k1.is_finite() || self.search.k1 < 0.0 {
            return Err(UxlexError::ConfigError(
                "k1 must be a non-negative number".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.search.b) {
            return Err(UxlexError::ConfigError(
                "b must be between 0 and 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Data dir: {:?}", self.data.dir);
        tracing::info!(
            "  Default max results: {}",
            self.search.default_max_results
        );
        tracing::info!("  Max results cap: {}", self.search.max_results_cap);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  BM25: k1={} b={}", self.search.k1, self.search.b);
        tracing::info!("  Fuzzy threshold: {}", self.search.fuzzy_threshold);
        tracing::info!(
            "  Synonyms: {}, fuzzy: {}",
            self.search.use_synonyms,
            self.search.use_fuzzy
        );
    }
}
