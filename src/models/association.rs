use serde::{Deserialize, Serialize};

use super::{DiseaseId, SymptomId};

/// Weight used when a catalog row carries no explicit weight.
pub const DEFAULT_ASSOCIATION_WEIGHT: f64 = 100.0;

fn default_weight() -> f64 {
    DEFAULT_ASSOCIATION_WEIGHT
}

/// Weighted link between a disease and one of its symptoms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseSymptomAssociation {
    pub disease_id: DiseaseId,
    pub symptom_id: SymptomId,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_exclusive: bool,
}

impl DiseaseSymptomAssociation {
    /// Weight used by the ratio scorer: required symptoms count double.
    pub fn scoring_weight(&self) -> f64 {
        if self.is_required {
            self.weight * 2.0
        } else {
            self.weight
        }
    }
}
