use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::{DiseaseSymptomAssociation, DEFAULT_ASSOCIATION_WEIGHT};

pub fn insert_association(
    conn: &Connection,
    assoc: &DiseaseSymptomAssociation,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO disease_symptoms (disease_id, symptom_id, weight, is_required, is_exclusive)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            assoc.disease_id,
            assoc.symptom_id,
            assoc.weight,
            assoc.is_required as i32,
            assoc.is_exclusive as i32,
        ],
    )?;
    Ok(())
}

pub fn get_all_associations(
    conn: &Connection,
) -> Result<Vec<DiseaseSymptomAssociation>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT disease_id, symptom_id, weight, is_required, is_exclusive
         FROM disease_symptoms ORDER BY disease_id, id",
    )?;
    let rows = stmt.query_map([], row_to_association)?;
    collect_rows(rows)
}

fn row_to_association(row: &rusqlite::Row<'_>) -> rusqlite::Result<DiseaseSymptomAssociation> {
    Ok(DiseaseSymptomAssociation {
        disease_id: row.get(0)?,
        symptom_id: row.get(1)?,
        weight: row
            .get::<_, Option<f64>>(2)?
            .unwrap_or(DEFAULT_ASSOCIATION_WEIGHT),
        is_required: row.get::<_, i32>(3)? != 0,
        is_exclusive: row.get::<_, i32>(4)? != 0,
    })
}

fn collect_rows(
    rows: rusqlite::MappedRows<
        '_,
        impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<DiseaseSymptomAssociation>,
    >,
) -> Result<Vec<DiseaseSymptomAssociation>, DatabaseError> {
    let mut assocs = Vec::new();
    for row in rows {
        assocs.push(row?);
    }
    Ok(assocs)
}
