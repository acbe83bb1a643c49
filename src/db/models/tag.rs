// src/db/models/tag.rs

//! Tag model - labeled categories attachable to recipes, identified by slug

use super::check_length;
use crate::error::{Error, Result};
use regex::Regex;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::sync::LazyLock;

/// Maximum length of tag name and slug
pub const TAG_FIELD_MAX_LEN: usize = 200;
/// Color given to tags created without one
pub const DEFAULT_TAG_COLOR: &str = "#ffffff";

static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").unwrap());
static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Check that `slug` only contains `[-a-zA-Z0-9_]` and fits the column
pub fn validate_slug(slug: &str) -> Result<()> {
    check_length("tag slug", slug, TAG_FIELD_MAX_LEN)?;
    if !SLUG_RE.is_match(slug) {
        return Err(Error::Validation(format!(
            "tag slug '{slug}' may only contain letters, digits, '-' and '_'"
        )));
    }
    Ok(())
}

/// A recipe tag (e.g. "breakfast")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub color: Option<String>,
    pub slug: Option<String>,
}

impl Tag {
    /// Create a new Tag with the default color
    pub fn new(name: Option<String>, slug: Option<String>) -> Self {
        Self {
            id: None,
            name,
            color: Some(DEFAULT_TAG_COLOR.to_string()),
            slug,
        }
    }

    /// Set the tag color (`#RRGGBB`)
    pub fn with_color(mut self, color: String) -> Self {
        self.color = Some(color);
        self
    }

    /// Check field constraints before persisting
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            check_length("tag name", name, TAG_FIELD_MAX_LEN)?;
        }
        if let Some(color) = &self.color
            && !COLOR_RE.is_match(color)
        {
            return Err(Error::Validation(format!(
                "tag color '{color}' is not a #RRGGBB hex color"
            )));
        }
        if let Some(slug) = &self.slug {
            validate_slug(slug)?;
        }
        Ok(())
    }

    /// Insert this tag into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        self.validate()?;

        conn.execute(
            "INSERT INTO tags (name, color, slug) VALUES (?1, ?2, ?3)",
            params![&self.name, &self.color, &self.slug],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find a tag by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare("SELECT id, name, color, slug FROM tags WHERE id = ?1")?;

        let tag = stmt.query_row([id], Self::from_row).optional()?;
        Ok(tag)
    }

    /// Find the first tag with the given slug
    pub fn find_by_slug(conn: &Connection, slug: &str) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, color, slug FROM tags WHERE slug = ?1 ORDER BY id LIMIT 1",
        )?;

        let tag = stmt.query_row([slug], Self::from_row).optional()?;
        Ok(tag)
    }

    /// List all tags
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT id, name, color, slug FROM tags ORDER BY id")?;

        let tags = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(tags)
    }

    /// Tags attached to a recipe
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT t.id, t.name, t.color, t.slug
             FROM tags t
             JOIN recipe_tags rt ON rt.tag_id = t.id
             WHERE rt.recipe_id = ?1
             ORDER BY t.id",
        )?;

        let tags = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(tags)
    }

    /// Delete a tag; it is detached from every recipe through the cascade
    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        conn.execute("DELETE FROM tags WHERE id = ?1", [id])?;
        Ok(())
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            color: row.get(2)?,
            slug: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn test_default_color() {
        let conn = db::open_in_memory().unwrap();

        let mut tag = Tag::new(Some("Breakfast".to_string()), Some("breakfast".to_string()));
        let id = tag.insert(&conn).unwrap();

        let found = Tag::find_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(found.color.as_deref(), Some(DEFAULT_TAG_COLOR));
        assert_eq!(
            Tag::find_by_slug(&conn, "breakfast").unwrap().and_then(|t| t.id),
            Some(id)
        );
    }

    #[test]
    fn test_slug_with_space_rejected_before_insert() {
        let conn = db::open_in_memory().unwrap();

        let mut tag = Tag::new(None, Some("late dinner".to_string()));
        assert!(matches!(tag.insert(&conn), Err(Error::Validation(_))));

        let mut tag = Tag::new(None, Some("dinner!".to_string()));
        assert!(matches!(tag.insert(&conn), Err(Error::Validation(_))));

        assert!(Tag::list_all(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_valid_slugs() {
        for slug in ["breakfast", "late-dinner", "snack_2", "A-Z_09"] {
            assert!(validate_slug(slug).is_ok(), "{slug} should be valid");
        }
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn test_delete_detaches_from_recipes() {
        use crate::db::models::{Recipe, User};

        let conn = db::open_in_memory().unwrap();
        let author = User::new("chef".to_string(), "chef@example.com".to_string())
            .insert(&conn)
            .unwrap();
        let recipe = Recipe::new(author, "Toast".to_string(), "Toast it".to_string())
            .insert(&conn)
            .unwrap();
        let tag = Tag::new(None, Some("snack".to_string())).insert(&conn).unwrap();
        Recipe::add_tag(&conn, recipe, tag).unwrap();

        Tag::delete(&conn, tag).unwrap();
        assert!(Tag::find_by_id(&conn, tag).unwrap().is_none());
        assert!(Tag::find_by_recipe(&conn, recipe).unwrap().is_empty());
        assert!(Recipe::find_by_id(&conn, recipe).unwrap().is_some());
    }

    #[test]
    fn test_invalid_color_rejected() {
        let tag = Tag::new(None, Some("lunch".to_string())).with_color("red".to_string());
        assert!(matches!(tag.validate(), Err(Error::Validation(_))));
    }
}
