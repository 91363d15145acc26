use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "VetCheck";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "vetcheck_lib=info,warn"
}

/// Get the application data directory
/// ~/VetCheck/ on all platforms. Falls back to the working directory when
/// no home directory can be determined.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("VetCheck")
}

/// Default location of the symptom/disease catalog database
pub fn catalog_db_path() -> PathBuf {
    app_data_dir().join("catalog.db")
}

/// Default location of the interview tuning file
pub fn interview_config_path() -> PathBuf {
    app_data_dir().join("interview.json")
}

// ═══════════════════════════════════════════
// Interview tuning
// ═══════════════════════════════════════════

/// One row of the stopping-threshold table: applies while the question count
/// is at most `max_questions` (`None` = no upper bound).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBand {
    pub max_questions: Option<u32>,
    pub threshold: f64,
}

/// Tunables for question selection and stopping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewConfig {
    /// Below this many answers the interview never stops on confidence.
    pub min_questions: u32,
    /// At or above this many answers the interview always stops.
    pub max_questions: u32,
    /// Ordered threshold table; the first band that covers the count wins.
    pub threshold_bands: Vec<ThresholdBand>,
    pub margin_min_questions: u32,
    pub margin_gap: f64,
    pub margin_top_floor: f64,
    /// Selection scores below this are pruned once `prune_after_questions` is reached.
    pub prune_score_floor: f64,
    pub prune_after_questions: u32,
    /// Disease pool sizes tried in turn when gathering candidate symptoms.
    pub candidate_pool_sizes: Vec<usize>,
    pub category_fallback_limit: usize,
    pub category_fallback_weight: f64,
    pub supplement_below: usize,
    pub supplement_limit: usize,
    pub supplement_weight: f64,
    pub category_boost: f64,
    pub required_selection_boost: f64,
    pub report_size: usize,
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            min_questions: 8,
            max_questions: 30,
            threshold_bands: vec![
                ThresholdBand {
                    max_questions: Some(8),
                    threshold: 0.90,
                },
                ThresholdBand {
                    max_questions: Some(12),
                    threshold: 0.85,
                },
                ThresholdBand {
                    max_questions: Some(16),
                    threshold: 0.75,
                },
                ThresholdBand {
                    max_questions: Some(20),
                    threshold: 0.65,
                },
                ThresholdBand {
                    max_questions: None,
                    threshold: 0.55,
                },
            ],
            margin_min_questions: 12,
            margin_gap: 0.40,
            margin_top_floor: 0.60,
            prune_score_floor: 0.01,
            prune_after_questions: 15,
            candidate_pool_sizes: vec![3, 5, 10],
            category_fallback_limit: 10,
            category_fallback_weight: 1.0,
            supplement_below: 3,
            supplement_limit: 5,
            supplement_weight: 0.8,
            category_boost: 1.5,
            required_selection_boost: 1.5,
            report_size: 5,
        }
    }
}

impl InterviewConfig {
    /// Load tuning from a JSON file. A missing file yields the defaults;
    /// omitted fields take their default values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No interview config file, using defaults");
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.display().to_string(), e.to_string()))?;
        serde_json::from_str(&json)
            .map_err(|e| ConfigError::Parse(path.display().to_string(), e.to_string()))
    }

    /// Stopping threshold for the given number of answered questions.
    pub fn threshold_for(&self, question_count: u32) -> f64 {
        self.threshold_bands
            .iter()
            .find(|band| band.max_questions.map_or(true, |max| question_count <= max))
            .or(self.threshold_bands.last())
            .map_or(1.0, |band| band.threshold)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Config read failed ({0}): {1}")]
    Read(String, String),

    #[error("Config parse failed ({0}): {1}")]
    Parse(String, String),
}
