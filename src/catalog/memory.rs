use std::collections::HashSet;

use super::{Catalog, CatalogError};
use crate::db::CatalogSeed;
use crate::models::{Disease, DiseaseId, DiseaseSymptomAssociation, Symptom, SymptomId};

/// Vector-backed catalog for callers that pre-load reference data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    pub symptoms: Vec<Symptom>,
    pub diseases: Vec<Disease>,
    pub associations: Vec<DiseaseSymptomAssociation>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symptom(mut self, id: SymptomId, name: &str, category: Option<&str>) -> Self {
        self.symptoms.push(Symptom {
            id,
            name: name.into(),
            category: category.map(Into::into),
        });
        self
    }

    pub fn with_disease(mut self, id: DiseaseId, name: &str, organ_system: &str) -> Self {
        self.diseases.push(Disease {
            id,
            name: name.into(),
            organ_system: organ_system.into(),
            description: None,
        });
        self
    }

    pub fn with_association(mut self, assoc: DiseaseSymptomAssociation) -> Self {
        self.associations.push(assoc);
        self
    }
}

impl From<CatalogSeed> for InMemoryCatalog {
    fn from(seed: CatalogSeed) -> Self {
        Self {
            symptoms: seed.symptoms,
            diseases: seed.diseases,
            associations: seed.associations,
        }
    }
}

impl Catalog for InMemoryCatalog {
    fn find_all_diseases(&self) -> Result<Vec<Disease>, CatalogError> {
        Ok(self.diseases.clone())
    }

    fn find_all_associations(&self) -> Result<Vec<DiseaseSymptomAssociation>, CatalogError> {
        Ok(self.associations.clone())
    }

    fn find_symptom_by_id(&self, id: SymptomId) -> Result<Option<Symptom>, CatalogError> {
        Ok(self.symptoms.iter().find(|s| s.id == id).cloned())
    }

    fn find_symptoms_by_category(
        &self,
        category: &str,
        exclude: &HashSet<SymptomId>,
        limit: usize,
    ) -> Result<Vec<Symptom>, CatalogError> {
        Ok(self
            .symptoms
            .iter()
            .filter(|s| s.in_category(category) && !exclude.contains(&s.id))
            .take(limit)
            .cloned()
            .collect())
    }

    fn find_symptom_by_name(&self, name: &str) -> Result<Option<Symptom>, CatalogError> {
        let name = name.trim();
        Ok(self
            .symptoms
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .cloned())
    }
}
