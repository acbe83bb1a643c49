// src/db/models/ingredient.rs

//! Ingredient model - reference data shared by all recipes

use super::check_length;
use crate::error::{Error, Result};
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Maximum length of ingredient name and measurement unit
pub const INGREDIENT_FIELD_MAX_LEN: usize = 256;

/// An ingredient with its unit of measurement (e.g. "flour", "g")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: Option<i64>,
    pub name: String,
    pub measurement_unit: String,
}

impl Ingredient {
    /// Create a new Ingredient
    pub fn new(name: String, measurement_unit: String) -> Self {
        Self {
            id: None,
            name,
            measurement_unit,
        }
    }

    /// Check field constraints before persisting
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(
                "ingredient name must not be empty".to_string(),
            ));
        }
        check_length("ingredient name", &self.name, INGREDIENT_FIELD_MAX_LEN)?;
        check_length(
            "measurement unit",
            &self.measurement_unit,
            INGREDIENT_FIELD_MAX_LEN,
        )?;
        Ok(())
    }

    /// Insert this ingredient into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        self.validate()?;

        conn.execute(
            "INSERT INTO ingredients (name, measurement_unit) VALUES (?1, ?2)",
            params![&self.name, &self.measurement_unit],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find an ingredient by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, name, measurement_unit FROM ingredients WHERE id = ?1")?;

        let ingredient = stmt.query_row([id], Self::from_row).optional()?;
        Ok(ingredient)
    }

    /// List all ingredients in insertion order
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, name, measurement_unit FROM ingredients ORDER BY id")?;

        let ingredients = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    /// Delete an ingredient; recipes lose it through the cascade
    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        conn.execute("DELETE FROM ingredients WHERE id = ?1", [id])?;
        Ok(())
    }

    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            measurement_unit: row.get(2)?,
        })
    }
}
