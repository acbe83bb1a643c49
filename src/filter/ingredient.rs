// src/filter/ingredient.rs

//! Ingredient name search for autocomplete

use crate::db::models::Ingredient;
use crate::error::Result;
use rusqlite::Connection;
use tracing::debug;

/// Ingredients whose name starts with `query`, in insertion order
///
/// Matching ignores case for any script, so "мол" finds "Молоко". An empty
/// query returns every ingredient.
pub fn search_ingredients(conn: &Connection, query: &str) -> Result<Vec<Ingredient>> {
    let ingredients = Ingredient::list_all(conn)?;

    let prefix = query.trim().to_lowercase();
    if prefix.is_empty() {
        return Ok(ingredients);
    }

    let found: Vec<Ingredient> = ingredients
        .into_iter()
        .filter(|i| i.name.to_lowercase().starts_with(&prefix))
        .collect();
    debug!("{} ingredients match '{}'", found.len(), prefix);

    Ok(found)
}
