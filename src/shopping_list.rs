// src/shopping_list.rs

//! Shopping list aggregation
//!
//! Collects the ingredients of every recipe in a user's shopping cart and
//! sums the amounts per (ingredient name, measurement unit). Grouping on the
//! pair rather than the name alone keeps "milk, ml" and "milk, l" apart.

use crate::db::models::User;
use crate::error::{Error, Result};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One aggregated line of a shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub name: String,
    pub measurement_unit: String,
    pub amount: i64,
}

/// A user's aggregated shopping list, ordered by name then unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub username: String,
    pub items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    /// Aggregate the shopping cart of `user_id`
    ///
    /// Returns `NotFound` for an unknown user. An empty cart, or a cart whose
    /// recipes list no ingredients, gives an empty list.
    pub fn for_user(conn: &Connection, user_id: i64) -> Result<Self> {
        let user = User::find_by_id(conn, user_id)?
            .ok_or_else(|| Error::NotFound(format!("user {user_id}")))?;

        let mut stmt = conn.prepare(
            "SELECT i.name, i.measurement_unit, SUM(ir.amount)
             FROM shopping_carts sc
             JOIN ingredient_recipes ir ON ir.recipe_id = sc.recipe_id
             JOIN ingredients i ON i.id = ir.ingredient_id
             WHERE sc.user_id = ?1
             GROUP BY i.name, i.measurement_unit
             ORDER BY i.name, i.measurement_unit",
        )?;

        let items = stmt
            .query_map([user_id], |row| {
                Ok(ShoppingListItem {
                    name: row.get(0)?,
                    measurement_unit: row.get(1)?,
                    amount: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(
            "Aggregated {} shopping list items for user {}",
            items.len(),
            user_id
        );

        Ok(Self {
            username: user.username,
            items,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render in the requested export format
    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Text => Ok(self.to_string()),
            ExportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl fmt::Display for ShoppingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shopping list for {}", self.username)?;
        if self.items.is_empty() {
            return writeln!(f, "  (empty)");
        }
        for item in &self.items {
            writeln!(
                f,
                "  {} ({}) - {}",
                item.name, item.measurement_unit, item.amount
            )?;
        }
        Ok(())
    }
}

/// Shopping list export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Invalid export format: {s}")),
        }
    }
}
