//! Read-only symptom/disease catalog consumed by the interview engine.
//!
//! `Catalog` is the provider seam. Each interview step reads it through
//! [`CatalogSnapshot::load`] and the `*_or_default` helpers, which turn a
//! failed read into an empty value plus a warning so the step always
//! completes.

pub mod memory;
pub mod snapshot;
pub mod sqlite;

use std::collections::HashSet;

use thiserror::Error;

use crate::db::DatabaseError;
use crate::models::{Disease, DiseaseSymptomAssociation, Symptom, SymptomId};

pub use memory::InMemoryCatalog;
pub use snapshot::CatalogSnapshot;
pub use sqlite::SqliteCatalog;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Read access to symptom, disease and association records.
pub trait Catalog {
    /// All diseases, in the catalog's enumeration order.
    fn find_all_diseases(&self) -> Result<Vec<Disease>, CatalogError>;

    fn find_all_associations(&self) -> Result<Vec<DiseaseSymptomAssociation>, CatalogError>;

    fn find_symptom_by_id(&self, id: SymptomId) -> Result<Option<Symptom>, CatalogError>;

    /// Up to `limit` symptoms of `category` that are not in `exclude`.
    fn find_symptoms_by_category(
        &self,
        category: &str,
        exclude: &HashSet<SymptomId>,
        limit: usize,
    ) -> Result<Vec<Symptom>, CatalogError>;

    /// Case-insensitive lookup by display name.
    fn find_symptom_by_name(&self, name: &str) -> Result<Option<Symptom>, CatalogError>;
}

/// `find_symptom_by_id`, logging and swallowing failures.
pub fn symptom_or_none(catalog: &dyn Catalog, id: SymptomId) -> Option<Symptom> {
    match catalog.find_symptom_by_id(id) {
        Ok(symptom) => symptom,
        Err(e) => {
            tracing::warn!(symptom_id = id, "Symptom lookup failed: {e}");
            None
        }
    }
}

/// `find_symptom_by_name`, logging and swallowing failures.
pub fn symptom_named_or_none(catalog: &dyn Catalog, name: &str) -> Option<Symptom> {
    match catalog.find_symptom_by_name(name) {
        Ok(symptom) => symptom,
        Err(e) => {
            tracing::warn!(name, "Symptom lookup by name failed: {e}");
            None
        }
    }
}

/// `find_symptoms_by_category`, degrading to an empty list.
pub fn category_symptoms_or_empty(
    catalog: &dyn Catalog,
    category: &str,
    exclude: &HashSet<SymptomId>,
    limit: usize,
) -> Vec<Symptom> {
    catalog
        .find_symptoms_by_category(category, exclude, limit)
        .unwrap_or_else(|e| {
            tracing::warn!(category, "Category symptom lookup failed: {e}");
            Vec::new()
        })
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Provider whose every read fails.
    pub struct FailingCatalog;

    impl Catalog for FailingCatalog {
        fn find_all_diseases(&self) -> Result<Vec<Disease>, CatalogError> {
            Err(CatalogError::Unavailable("offline".into()))
        }
        fn find_all_associations(&self) -> Result<Vec<DiseaseSymptomAssociation>, CatalogError> {
            Err(CatalogError::Unavailable("offline".into()))
        }
        fn find_symptom_by_id(&self, _id: SymptomId) -> Result<Option<Symptom>, CatalogError> {
            Err(CatalogError::Unavailable("offline".into()))
        }
        fn find_symptoms_by_category(
            &self,
            _category: &str,
            _exclude: &HashSet<SymptomId>,
            _limit: usize,
        ) -> Result<Vec<Symptom>, CatalogError> {
            Err(CatalogError::Unavailable("offline".into()))
        }
        fn find_symptom_by_name(&self, _name: &str) -> Result<Option<Symptom>, CatalogError> {
            Err(CatalogError::Unavailable("offline".into()))
        }
    }
}
