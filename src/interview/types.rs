use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError, CatalogSnapshot};
use crate::config::InterviewConfig;
use crate::models::enums::FollowUpDimension;
use crate::models::{Disease, DiseaseId, Symptom, SymptomId};

use super::session::DiagnosticSession;

/// Upper bound on any probability reported for a disease.
pub const MAX_PROBABILITY: f64 = 0.95;

/// Diseases at or below this probability are left out of a scoring pass.
pub const MIN_REPORTED_PROBABILITY: f64 = 0.01;

/// Placeholder shown when a disease has no catalog description.
pub const NO_DESCRIPTION: &str = "no description available";

// ---------------------------------------------------------------------------
// Scoring output
// ---------------------------------------------------------------------------

/// One disease's standing after a scoring pass. Recomputed every step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseResult {
    pub disease: Disease,
    /// In (0.01, 0.95].
    pub probability: f64,
    /// Confirmed symptoms that belong to this disease's association set.
    pub supporting_symptoms: Vec<SymptomId>,
    pub recommendation: Option<String>,
}

impl DiseaseResult {
    pub fn disease_id(&self) -> DiseaseId {
        self.disease.id
    }
}

/// Advice band attached to a reported disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    VeryLikely,
    Possible,
    LowLikelihood,
    Inconclusive,
}

impl Recommendation {
    pub fn for_probability(probability: f64) -> Self {
        if probability >= 0.70 {
            Self::VeryLikely
        } else if probability >= 0.45 {
            Self::Possible
        } else if probability >= 0.20 {
            Self::LowLikelihood
        } else {
            Self::Inconclusive
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::VeryLikely => "very likely — seek veterinary care soon.",
            Self::Possible => "possible — further veterinary evaluation advised.",
            Self::LowLikelihood => "low likelihood — continue observation.",
            Self::Inconclusive => {
                "inconclusive — continue observation and consult a veterinarian if symptoms persist."
            }
        }
    }
}

/// A disease as presented in the final report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisEntry {
    pub disease_id: DiseaseId,
    pub disease_name: String,
    pub probability: f64,
    pub supporting_symptoms: Vec<String>,
    pub description: String,
    pub recommendation: String,
}

/// Outcome of one interview step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepResult {
    /// Ask the patient's owner about one more symptom.
    Continue {
        next_symptom_id: SymptomId,
        question_text: String,
    },
    /// The interview is over. `diseases` is highest probability first.
    Finished {
        diseases: Vec<DiagnosisEntry>,
        /// Warning signs reported during the follow-up questions.
        red_flags: Vec<String>,
    },
}

impl StepResult {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }

    pub fn empty_finish() -> Self {
        Self::Finished {
            diseases: Vec::new(),
            red_flags: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Strategy seams
// ---------------------------------------------------------------------------

/// Turns the session's answers into a ranked disease list.
pub trait DiseaseScorer: Send + Sync {
    /// Ranked highest probability first; every entry in (0, 0.95].
    fn score_diseases(
        &self,
        snapshot: &CatalogSnapshot,
        session: &DiagnosticSession,
    ) -> Vec<DiseaseResult>;
}

/// What a selector sees besides the session and ranking.
pub struct SelectionContext<'a> {
    pub catalog: &'a dyn Catalog,
    pub snapshot: &'a CatalogSnapshot,
    pub config: &'a InterviewConfig,
}

/// A symptom chosen to ask about next.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub symptom_id: SymptomId,
    pub score: f64,
    /// Catalog record, when the selector already looked it up.
    pub symptom: Option<Symptom>,
}

/// Picks the next symptom to ask about, or `None` when nothing is worth asking.
pub trait QuestionSelector: Send + Sync {
    /// Must never return a symptom the session has already asked.
    fn select_next(
        &self,
        ctx: &SelectionContext<'_>,
        session: &DiagnosticSession,
        ranked: &[DiseaseResult],
    ) -> Option<Selection>;
}

// ---------------------------------------------------------------------------
// InterviewError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum InterviewError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Unknown main complaint: symptom {0}")]
    UnknownComplaint(SymptomId),

    #[error("Follow-up {dimension} takes a single choice, got {count}")]
    TooManyChoices {
        dimension: &'static str,
        count: usize,
    },

    #[error("Follow-up {0:?} asked before a main complaint was chosen")]
    NoMainComplaint(FollowUpDimension),

    #[error("Follow-up {dimension} answered out of order, expected {expected}")]
    FollowUpOutOfOrder {
        dimension: &'static str,
        expected: &'static str,
    },
}
