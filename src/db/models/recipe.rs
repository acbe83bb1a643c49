// src/db/models/recipe.rs

//! Recipe model - a dish owned by its author, with tags and quantified ingredients

use super::check_length;
use crate::error::{Error, Result};
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Maximum recipe name length
pub const RECIPE_NAME_MAX_LEN: usize = 200;

/// Column list matching [`Recipe::from_row`]
pub(crate) const RECIPE_COLUMNS: &str =
    "recipes.id, recipes.name, recipes.text, recipes.image, recipes.cooking_time, recipes.author_id";

/// A recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: Option<i64>,
    pub name: String,
    pub text: String,
    /// Reference to the stored image, if any
    pub image: Option<String>,
    /// Cooking time in minutes
    pub cooking_time: Option<u16>,
    pub author_id: i64,
}

impl Recipe {
    /// Create a new Recipe
    pub fn new(author_id: i64, name: String, text: String) -> Self {
        Self {
            id: None,
            name,
            text,
            image: None,
            cooking_time: None,
            author_id,
        }
    }

    /// Set the cooking time in minutes
    pub fn with_cooking_time(mut self, minutes: u16) -> Self {
        self.cooking_time = Some(minutes);
        self
    }

    /// Set the image reference
    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }

    /// Check field constraints before persisting
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("recipe name must not be empty".to_string()));
        }
        check_length("recipe name", &self.name, RECIPE_NAME_MAX_LEN)?;
        if self.cooking_time == Some(0) {
            return Err(Error::Validation(
                "cooking time must be at least one minute".to_string(),
            ));
        }
        Ok(())
    }

    /// Insert this recipe into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        self.validate()?;

        conn.execute(
            "INSERT INTO recipes (name, text, image, cooking_time, author_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                &self.name,
                &self.text,
                &self.image,
                &self.cooking_time,
                &self.author_id,
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find a recipe by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE recipes.id = ?1"
        ))?;

        let recipe = stmt.query_row([id], Self::from_row).optional()?;
        Ok(recipe)
    }

    /// Fetch a recipe by ID, failing with `NotFound` when absent
    pub fn get(conn: &Connection, id: i64) -> Result<Self> {
        Self::find_by_id(conn, id)?.ok_or_else(|| Error::NotFound(format!("recipe {id}")))
    }

    /// Recipes written by an author
    pub fn find_by_author(conn: &Connection, author_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE recipes.author_id = ?1 ORDER BY recipes.id"
        ))?;

        let recipes = stmt
            .query_map([author_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// List all recipes in default order (by author)
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY recipes.author_id, recipes.id"
        ))?;

        let recipes = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Attach a tag to a recipe
    pub fn add_tag(conn: &Connection, recipe_id: i64, tag_id: i64) -> Result<()> {
        conn.execute(
            "INSERT INTO recipe_tags (recipe_id, tag_id) VALUES (?1, ?2)",
            params![recipe_id, tag_id],
        )?;
        Ok(())
    }

    /// Detach a tag from a recipe
    pub fn remove_tag(conn: &Connection, recipe_id: i64, tag_id: i64) -> Result<()> {
        conn.execute(
            "DELETE FROM recipe_tags WHERE recipe_id = ?1 AND tag_id = ?2",
            params![recipe_id, tag_id],
        )?;
        Ok(())
    }

    /// Delete a recipe; favorites, cart entries, tags and ingredient rows cascade
    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
        Ok(())
    }

    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            text: row.get(2)?,
            image: row.get(3)?,
            cooking_time: row.get(4)?,
            author_id: row.get(5)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::db::models::{Tag, User};

    fn setup() -> (Connection, i64) {
        let conn = db::open_in_memory().unwrap();
        let author = User::new("chef".to_string(), "chef@example.com".to_string())
            .insert(&conn)
            .unwrap();
        (conn, author)
    }

    #[test]
    fn test_recipe_crud() {
        let (conn, author) = setup();

        let mut recipe = Recipe::new(author, "Omelette".to_string(), "Beat the eggs".to_string())
            .with_cooking_time(10)
            .with_image("collect/omelette.png".to_string());
        let id = recipe.insert(&conn).unwrap();

        let found = Recipe::get(&conn, id).unwrap();
        assert_eq!(found, recipe);
        assert_eq!(Recipe::find_by_author(&conn, author).unwrap().len(), 1);

        Recipe::delete(&conn, id).unwrap();
        assert!(Recipe::find_by_id(&conn, id).unwrap().is_none());
    }

    #[test]
    fn test_list_all_orders_by_author() {
        let conn = db::open_in_memory().unwrap();
        let first = User::new("a".to_string(), "a@example.com".to_string())
            .insert(&conn)
            .unwrap();
        let second = User::new("b".to_string(), "b@example.com".to_string())
            .insert(&conn)
            .unwrap();

        Recipe::new(second, "Soup".to_string(), "Boil".to_string())
            .insert(&conn)
            .unwrap();
        Recipe::new(first, "Salad".to_string(), "Chop".to_string())
            .insert(&conn)
            .unwrap();

        let names: Vec<String> = Recipe::list_all(&conn)
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Salad", "Soup"]);
    }

    #[test]
    fn test_zero_cooking_time_rejected() {
        let (conn, author) = setup();

        let mut recipe =
            Recipe::new(author, "Toast".to_string(), "Toast it".to_string()).with_cooking_time(0);
        assert!(matches!(recipe.insert(&conn), Err(Error::Validation(_))));
    }

    #[test]
    fn test_deleting_author_deletes_recipes() {
        let (conn, author) = setup();

        let id = Recipe::new(author, "Omelette".to_string(), "Beat".to_string())
            .insert(&conn)
            .unwrap();
        User::delete(&conn, author).unwrap();

        assert!(Recipe::find_by_id(&conn, id).unwrap().is_none());
    }

    #[test]
    fn test_tags_attach_once() {
        let (conn, author) = setup();

        let recipe = Recipe::new(author, "Porridge".to_string(), "Stir".to_string())
            .insert(&conn)
            .unwrap();
        let tag = Tag::new(None, Some("breakfast".to_string()))
            .insert(&conn)
            .unwrap();

        Recipe::add_tag(&conn, recipe, tag).unwrap();
        assert!(matches!(
            Recipe::add_tag(&conn, recipe, tag),
            Err(Error::IntegrityViolation(_))
        ));
        assert_eq!(Tag::find_by_recipe(&conn, recipe).unwrap().len(), 1);

        Recipe::remove_tag(&conn, recipe, tag).unwrap();
        assert!(Tag::find_by_recipe(&conn, recipe).unwrap().is_empty());
    }
}
