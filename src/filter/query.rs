// src/filter/query.rs

//! Lazy, chainable recipe collections
//!
//! A [`RecipeQuery`] describes a set of recipes as a base plus AND-ed
//! constraints. Nothing touches the database until [`RecipeQuery::fetch`],
//! [`RecipeQuery::ids`] or [`RecipeQuery::count`] runs the single SELECT the
//! chain compiles to.

use crate::db::models::{RECIPE_COLUMNS, Recipe};
use crate::error::Result;
use rusqlite::types::Value;
use rusqlite::{Connection, params_from_iter};
use tracing::debug;

/// One SQL condition on the `recipes` table with its positional parameters
#[derive(Debug, Clone, PartialEq)]
struct Clause {
    sql: String,
    params: Vec<Value>,
}

/// A recipe collection handle; every constraint narrows it further
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeQuery {
    clauses: Vec<Clause>,
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

impl RecipeQuery {
    /// Every recipe in the store
    pub fn all() -> Self {
        Self::default()
    }

    /// Recipes whose ID is in `ids`; an empty slice yields an empty collection
    pub fn with_ids(ids: &[i64]) -> Self {
        Self::all().with_ids_in(ids)
    }

    fn push(mut self, sql: String, params: Vec<Value>) -> Self {
        self.clauses.push(Clause { sql, params });
        self
    }

    /// Restrict to recipes whose ID is in `ids`
    pub fn with_ids_in(self, ids: &[i64]) -> Self {
        if ids.is_empty() {
            return self.push("0".to_string(), Vec::new());
        }
        self.push(
            format!("recipes.id IN ({})", placeholders(ids.len())),
            ids.iter().map(|id| Value::Integer(*id)).collect(),
        )
    }

    /// Restrict to recipes written by `author_id`
    pub fn by_author(self, author_id: i64) -> Self {
        self.push(
            "recipes.author_id = ?".to_string(),
            vec![Value::Integer(author_id)],
        )
    }

    /// Restrict to recipes carrying at least one of `slugs`; no-op when empty
    pub fn with_any_tag(self, slugs: &[String]) -> Self {
        if slugs.is_empty() {
            return self;
        }
        self.push(
            format!(
                "recipes.id IN (SELECT rt.recipe_id FROM recipe_tags rt
                 JOIN tags t ON t.id = rt.tag_id WHERE t.slug IN ({}))",
                placeholders(slugs.len())
            ),
            slugs.iter().map(|s| Value::Text(s.clone())).collect(),
        )
    }

    /// Restrict to recipes `user_id` has favorited
    pub fn favorited_by(self, user_id: i64) -> Self {
        self.push(
            "recipes.id IN (SELECT recipe_id FROM favorites WHERE user_id = ?)".to_string(),
            vec![Value::Integer(user_id)],
        )
    }

    /// Restrict to recipes in `user_id`'s shopping cart
    pub fn in_cart_of(self, user_id: i64) -> Self {
        self.push(
            "recipes.id IN (SELECT recipe_id FROM shopping_carts WHERE user_id = ?)".to_string(),
            vec![Value::Integer(user_id)],
        )
    }

    /// Both collections' constraints at once (set intersection)
    pub fn intersect(mut self, other: RecipeQuery) -> Self {
        self.clauses.extend(other.clauses);
        self
    }

    /// Number of constraints in the chain
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// True when the query is unconstrained
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    fn where_sql(&self) -> (String, Vec<Value>) {
        if self.clauses.is_empty() {
            return (String::new(), Vec::new());
        }

        let sql = self
            .clauses
            .iter()
            .map(|c| format!("({})", c.sql))
            .collect::<Vec<_>>()
            .join(" AND ");
        let params = self
            .clauses
            .iter()
            .flat_map(|c| c.params.iter().cloned())
            .collect();
        (format!(" WHERE {sql}"), params)
    }

    /// Materialize the collection in default order (author, then ID)
    pub fn fetch(&self, conn: &Connection) -> Result<Vec<Recipe>> {
        let (where_sql, params) = self.where_sql();
        let sql = format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes{where_sql} ORDER BY recipes.author_id, recipes.id"
        );
        debug!("Recipe query: {} ({} params)", sql, params.len());

        let mut stmt = conn.prepare(&sql)?;
        let recipes = stmt
            .query_map(params_from_iter(params.iter()), Recipe::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// IDs of the recipes in the collection, ascending
    pub fn ids(&self, conn: &Connection) -> Result<Vec<i64>> {
        let (where_sql, params) = self.where_sql();
        let sql = format!("SELECT recipes.id FROM recipes{where_sql} ORDER BY recipes.id");

        let mut stmt = conn.prepare(&sql)?;
        let ids = stmt
            .query_map(params_from_iter(params.iter()), |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ids)
    }

    /// Size of the collection
    pub fn count(&self, conn: &Connection) -> Result<i64> {
        let (where_sql, params) = self.where_sql();
        let sql = format!("SELECT COUNT(*) FROM recipes{where_sql}");

        let count = conn.query_row(&sql, params_from_iter(params.iter()), |row| row.get(0))?;
        Ok(count)
    }
}
