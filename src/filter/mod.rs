// src/filter/mod.rs

//! Recipe filter engine
//!
//! Narrows a recipe collection for a requesting user by tag, author,
//! favorite status and shopping cart status, and searches ingredients by
//! name prefix. Everything here is read-only.
//!
//! ```no_run
//! use foodgram::filter::{RecipeFilter, RecipeQuery};
//! use foodgram::Viewer;
//!
//! # fn main() -> foodgram::Result<()> {
//! let conn = foodgram::db::open("/var/lib/foodgram/foodgram.db")?;
//! let filter = RecipeFilter::from_query_pairs(&[("tags", "breakfast"), ("is_favorited", "1")])?;
//! filter.validate_against(&conn)?;
//! let recipes = filter.apply(RecipeQuery::all(), &Viewer::User(1))?.fetch(&conn)?;
//! # let _ = recipes;
//! # Ok(())
//! # }
//! ```

mod ingredient;
mod query;
mod recipe;

pub use ingredient::search_ingredients;
pub use query::RecipeQuery;
pub use recipe::{
    PARAM_AUTHOR, PARAM_IS_FAVORITED, PARAM_IS_IN_SHOPPING_CART, PARAM_TAGS, PREDICATES,
    Predicate, RecipeFilter, parse_bool,
};

use crate::db::models::Recipe;
use crate::error::Result;
use crate::viewer::Viewer;
use rusqlite::Connection;

/// Filter every recipe in the store and materialize the result
///
/// Tag slugs and the author must exist; unknown ones are a validation error.
pub fn filter_recipes(conn: &Connection, filter: &RecipeFilter, viewer: &Viewer) -> Result<Vec<Recipe>> {
    filter.validate_against(conn)?;
    filter.apply(RecipeQuery::all(), viewer)?.fetch(conn)
}
