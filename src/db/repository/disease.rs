use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Disease;

pub fn insert_disease(conn: &Connection, disease: &Disease) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO diseases (id, name, organ_system, description) VALUES (?1, ?2, ?3, ?4)",
        params![disease.id, disease.name, disease.organ_system, disease.description],
    )?;
    Ok(())
}

pub fn get_all_diseases(conn: &Connection) -> Result<Vec<Disease>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, organ_system, description FROM diseases ORDER BY id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Disease {
            id: row.get(0)?,
            name: row.get(1)?,
            organ_system: row.get(2)?,
            description: row.get(3)?,
        })
    })?;

    let mut diseases = Vec::new();
    for row in rows {
        diseases.push(row?);
    }
    Ok(diseases)
}
