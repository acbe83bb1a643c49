// src/filter/recipe.rs

//! Recipe filter predicates
//!
//! A [`RecipeFilter`] is the bag of optional predicates a recipe listing
//! accepts. Each predicate is a plain function in [`PREDICATES`], keyed by
//! its query parameter name; [`RecipeFilter::apply`] folds the collection
//! through all of them, so active predicates combine with AND.

use super::query::RecipeQuery;
use crate::db::models::{Tag, User, validate_slug};
use crate::error::{Error, Result};
use crate::viewer::Viewer;
use rusqlite::Connection;
use tracing::debug;

pub const PARAM_TAGS: &str = "tags";
pub const PARAM_AUTHOR: &str = "author";
pub const PARAM_IS_FAVORITED: &str = "is_favorited";
pub const PARAM_IS_IN_SHOPPING_CART: &str = "is_in_shopping_cart";

/// Optional predicates narrowing a recipe collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Tag slugs; a recipe matches if it carries any of them
    pub tags: Vec<String>,
    /// Exact author
    pub author: Option<i64>,
    /// `Some(true)` keeps only the viewer's favorites; `Some(false)` does nothing
    pub is_favorited: Option<bool>,
    /// `Some(true)` keeps only recipes in the viewer's cart; `Some(false)` does nothing
    pub is_in_shopping_cart: Option<bool>,
}

/// A predicate: narrows the collection using its own field of the filter
pub type Predicate = fn(RecipeQuery, &Viewer, &RecipeFilter) -> Result<RecipeQuery>;

/// Every predicate a recipe listing understands, by query parameter name
pub const PREDICATES: &[(&str, Predicate)] = &[
    (PARAM_TAGS, filter_tags),
    (PARAM_AUTHOR, filter_author),
    (PARAM_IS_FAVORITED, filter_is_favorited),
    (PARAM_IS_IN_SHOPPING_CART, filter_is_in_shopping_cart),
];

fn filter_tags(query: RecipeQuery, _viewer: &Viewer, filter: &RecipeFilter) -> Result<RecipeQuery> {
    Ok(query.with_any_tag(&filter.tags))
}

fn filter_author(query: RecipeQuery, _viewer: &Viewer, filter: &RecipeFilter) -> Result<RecipeQuery> {
    Ok(match filter.author {
        Some(author_id) => query.by_author(author_id),
        None => query,
    })
}

fn filter_is_favorited(
    query: RecipeQuery,
    viewer: &Viewer,
    filter: &RecipeFilter,
) -> Result<RecipeQuery> {
    if filter.is_favorited != Some(true) {
        return Ok(query);
    }
    let user_id = viewer.require_user("filtering by is_favorited")?;
    Ok(query.favorited_by(user_id))
}

fn filter_is_in_shopping_cart(
    query: RecipeQuery,
    viewer: &Viewer,
    filter: &RecipeFilter,
) -> Result<RecipeQuery> {
    if filter.is_in_shopping_cart != Some(true) {
        return Ok(query);
    }
    let user_id = viewer.require_user("filtering by is_in_shopping_cart")?;
    Ok(query.in_cart_of(user_id))
}

/// Parse a query-string boolean (`true`/`false`/`1`/`0`, any case)
pub fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(Error::Validation(format!(
            "{name} must be a boolean, got '{value}'"
        ))),
    }
}

impl RecipeFilter {
    /// Build a filter from raw query parameters
    ///
    /// Repeated `tags` keys accumulate. Empty values count as absent and
    /// unknown keys are ignored.
    pub fn from_query_pairs<K, V>(pairs: &[(K, V)]) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = RecipeFilter::default();

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            if value.is_empty() {
                continue;
            }

            match key {
                PARAM_TAGS => {
                    validate_slug(value)?;
                    if !filter.tags.iter().any(|t| t == value) {
                        filter.tags.push(value.to_string());
                    }
                }
                PARAM_AUTHOR => {
                    let author = value.parse::<i64>().map_err(|_| {
                        Error::Validation(format!("author must be a user id, got '{value}'"))
                    })?;
                    filter.author = Some(author);
                }
                PARAM_IS_FAVORITED => filter.is_favorited = Some(parse_bool(key, value)?),
                PARAM_IS_IN_SHOPPING_CART => {
                    filter.is_in_shopping_cart = Some(parse_bool(key, value)?)
                }
                _ => debug!("Ignoring unknown recipe filter parameter '{}'", key),
            }
        }

        Ok(filter)
    }

    /// Check tag slugs, for filters built directly rather than parsed
    pub fn validate(&self) -> Result<()> {
        for slug in &self.tags {
            validate_slug(slug)?;
        }
        Ok(())
    }

    /// Check that every tag slug and the author refer to stored rows
    pub fn validate_against(&self, conn: &Connection) -> Result<()> {
        self.validate()?;
        for slug in &self.tags {
            if Tag::find_by_slug(conn, slug)?.is_none() {
                return Err(Error::Validation(format!("unknown tag '{slug}'")));
            }
        }
        if let Some(author) = self.author
            && !User::exists(conn, author)?
        {
            return Err(Error::Validation(format!("unknown author {author}")));
        }
        Ok(())
    }

    /// Narrow `query` by every active predicate, on behalf of `viewer`
    pub fn apply(&self, query: RecipeQuery, viewer: &Viewer) -> Result<RecipeQuery> {
        self.validate()?;
        PREDICATES
            .iter()
            .try_fold(query, |query, (_, predicate)| predicate(query, viewer, self))
    }
}
