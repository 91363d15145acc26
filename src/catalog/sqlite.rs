use std::collections::HashSet;
use std::path::Path;

use rusqlite::Connection;

use super::{Catalog, CatalogError};
use crate::db::{self, DatabaseError};
use crate::models::{Disease, DiseaseSymptomAssociation, Symptom, SymptomId};

/// Catalog backed by the SQLite reference tables.
pub struct SqliteCatalog {
    conn: Connection,
}

impl SqliteCatalog {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open (and migrate) the catalog database at `path`.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        Ok(Self::new(db::open_database(path)?))
    }

    /// Open the catalog at `path`, loading the bundled seed when it holds no
    /// diseases yet.
    pub fn open_seeded(path: &Path) -> Result<Self, DatabaseError> {
        let catalog = Self::open(path)?;
        if db::get_all_diseases(&catalog.conn)?.is_empty() {
            tracing::info!(path = %path.display(), "Empty catalog, loading bundled seed");
            db::seed_catalog(&catalog.conn, &db::CatalogSeed::bundled()?)?;
        }
        Ok(catalog)
    }
}

impl Catalog for SqliteCatalog {
    fn find_all_diseases(&self) -> Result<Vec<Disease>, CatalogError> {
        Ok(db::get_all_diseases(&self.conn)?)
    }

    fn find_all_associations(&self) -> Result<Vec<DiseaseSymptomAssociation>, CatalogError> {
        Ok(db::get_all_associations(&self.conn)?)
    }

    fn find_symptom_by_id(&self, id: SymptomId) -> Result<Option<Symptom>, CatalogError> {
        Ok(db::get_symptom_by_id(&self.conn, id)?)
    }

    fn find_symptoms_by_category(
        &self,
        category: &str,
        exclude: &HashSet<SymptomId>,
        limit: usize,
    ) -> Result<Vec<Symptom>, CatalogError> {
        Ok(db::get_symptoms_by_category(&self.conn, category, exclude, limit)?)
    }

    fn find_symptom_by_name(&self, name: &str) -> Result<Option<Symptom>, CatalogError> {
        Ok(db::get_symptom_by_name(&self.conn, name)?)
    }
}
