use std::collections::HashSet;

use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{Symptom, SymptomId};

pub fn insert_symptom(conn: &Connection, symptom: &Symptom) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO symptoms (id, name, category) VALUES (?1, ?2, ?3)",
        params![symptom.id, symptom.name, symptom.category],
    )?;
    Ok(())
}

fn row_to_symptom(row: &rusqlite::Row<'_>) -> rusqlite::Result<Symptom> {
    Ok(Symptom {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
    })
}

pub fn get_symptom_by_id(conn: &Connection, id: SymptomId) -> Result<Option<Symptom>, DatabaseError> {
    let symptom = conn
        .query_row(
            "SELECT id, name, category FROM symptoms WHERE id = ?1",
            params![id],
            row_to_symptom,
        )
        .optional()?;
    Ok(symptom)
}

/// Case-insensitive lookup by display name.
pub fn get_symptom_by_name(conn: &Connection, name: &str) -> Result<Option<Symptom>, DatabaseError> {
    let symptom = conn
        .query_row(
            "SELECT id, name, category FROM symptoms WHERE name = ?1 COLLATE NOCASE",
            params![name.trim()],
            row_to_symptom,
        )
        .optional()?;
    Ok(symptom)
}

/// Symptoms in `category`, skipping `exclude`, at most `limit` of them, in id order.
pub fn get_symptoms_by_category(
    conn: &Connection,
    category: &str,
    exclude: &HashSet<SymptomId>,
    limit: usize,
) -> Result<Vec<Symptom>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, category FROM symptoms
         WHERE category = ?1 COLLATE NOCASE
         ORDER BY id",
    )?;
    let rows = stmt.query_map(params![category], row_to_symptom)?;

    let mut symptoms = Vec::new();
    for row in rows {
        if symptoms.len() >= limit {
            break;
        }
        let symptom = row?;
        if !exclude.contains(&symptom.id) {
            symptoms.push(symptom);
        }
    }
    Ok(symptoms)
}
