use std::collections::HashMap;

use super::Catalog;
use crate::models::{Disease, DiseaseId, DiseaseSymptomAssociation, SymptomId};

/// Diseases and associations read once at the start of an interview step.
///
/// Scoring and selection are pure functions over this snapshot, so a step
/// sees one consistent view of the catalog however many times it looks.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    diseases: Vec<Disease>,
    associations: Vec<DiseaseSymptomAssociation>,
    by_disease: HashMap<DiseaseId, Vec<usize>>,
}

impl CatalogSnapshot {
    /// Read the catalog. A failed read leaves that half of the snapshot empty.
    pub fn load(catalog: &dyn Catalog) -> Self {
        let diseases = catalog.find_all_diseases().unwrap_or_else(|e| {
            tracing::warn!("Disease listing failed, scoring without diseases: {e}");
            Vec::new()
        });
        let associations = catalog.find_all_associations().unwrap_or_else(|e| {
            tracing::warn!("Association listing failed, scoring without associations: {e}");
            Vec::new()
        });
        Self::from_parts(diseases, associations)
    }

    pub fn from_parts(
        diseases: Vec<Disease>,
        associations: Vec<DiseaseSymptomAssociation>,
    ) -> Self {
        let mut by_disease: HashMap<DiseaseId, Vec<usize>> = HashMap::new();
        for (idx, assoc) in associations.iter().enumerate() {
            by_disease.entry(assoc.disease_id).or_default().push(idx);
        }
        Self {
            diseases,
            associations,
            by_disease,
        }
    }

    /// Diseases in catalog enumeration order.
    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    pub fn disease(&self, id: DiseaseId) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.id == id)
    }

    /// The association set of one disease (empty when it has none).
    pub fn associations_for(
        &self,
        disease_id: DiseaseId,
    ) -> impl Iterator<Item = &DiseaseSymptomAssociation> + '_ {
        self.by_disease
            .get(&disease_id)
            .into_iter()
            .flatten()
            .map(|&idx| &self.associations[idx])
    }

    pub fn association(
        &self,
        disease_id: DiseaseId,
        symptom_id: SymptomId,
    ) -> Option<&DiseaseSymptomAssociation> {
        self.associations_for(disease_id)
            .find(|a| a.symptom_id == symptom_id)
    }

    /// Every association that links some disease to `symptom_id`.
    pub fn associations_of_symptom(
        &self,
        symptom_id: SymptomId,
    ) -> impl Iterator<Item = &DiseaseSymptomAssociation> + '_ {
        self.associations
            .iter()
            .filter(move |a| a.symptom_id == symptom_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::FailingCatalog;
    use crate::catalog::InMemoryCatalog;

    fn assoc(disease_id: DiseaseId, symptom_id: SymptomId) -> DiseaseSymptomAssociation {
        DiseaseSymptomAssociation {
            disease_id,
            symptom_id,
            weight: 100.0,
            is_required: false,
            is_exclusive: false,
        }
    }

    #[test]
    fn groups_associations_by_disease() {
        let catalog = InMemoryCatalog::new()
            .with_disease(1, "A", "x")
            .with_disease(2, "B", "y")
            .with_association(assoc(1, 10))
            .with_association(assoc(2, 10))
            .with_association(assoc(1, 11));
        let snap = CatalogSnapshot::load(&catalog);

        let a: Vec<_> = snap.associations_for(1).map(|a| a.symptom_id).collect();
        assert_eq!(a, vec![10, 11]);
        assert_eq!(snap.associations_for(3).count(), 0);
        assert_eq!(snap.associations_of_symptom(10).count(), 2);
        assert!(snap.association(2, 11).is_none());
    }

    #[test]
    fn failing_catalog_yields_empty_snapshot() {
        let snap = CatalogSnapshot::load(&FailingCatalog);
        assert!(snap.diseases().is_empty());
        assert!(snap.disease(1).is_none());
        assert_eq!(snap.associations_of_symptom(1).count(), 0);
    }
}
