//! Catalog seeding from JSON reference data.
//!
//! The bundled seed is a small veterinary catalog used for first-run setup
//! and for end-to-end interview tests.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use super::repository::{insert_association, insert_disease, insert_symptom};
use super::DatabaseError;
use crate::models::{Disease, DiseaseSymptomAssociation, Symptom};

const BUNDLED_SEED: &str = include_str!("../../resources/catalog_seed.json");

/// Full catalog contents as loaded from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    pub symptoms: Vec<Symptom>,
    pub diseases: Vec<Disease>,
    #[serde(default)]
    pub associations: Vec<DiseaseSymptomAssociation>,
}

impl CatalogSeed {
    pub fn from_json(json: &str) -> Result<Self, DatabaseError> {
        serde_json::from_str(json).map_err(|e| DatabaseError::SeedParse(e.to_string()))
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self, DatabaseError> {
        Self::from_json(BUNDLED_SEED)
    }
}

/// Insert every record of `seed` in one transaction.
pub fn seed_catalog(conn: &Connection, seed: &CatalogSeed) -> Result<(), DatabaseError> {
    let tx = conn.unchecked_transaction()?;

    for symptom in &seed.symptoms {
        insert_symptom(&tx, symptom)?;
    }
    for disease in &seed.diseases {
        insert_disease(&tx, disease)?;
    }
    for assoc in &seed.associations {
        insert_association(&tx, assoc)?;
    }

    tx.commit()?;

    tracing::info!(
        symptoms = seed.symptoms.len(),
        diseases = seed.diseases.len(),
        associations = seed.associations.len(),
        "Catalog seeded"
    );
    Ok(())
}
