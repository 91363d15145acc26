use serde::{Deserialize, Serialize};

use super::DiseaseId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub id: DiseaseId,
    pub name: String,
    pub organ_system: String,
    pub description: Option<String>,
}
