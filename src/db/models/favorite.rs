// src/db/models/favorite.rs

//! Favorite model - a user's bookmark of a recipe

use crate::error::Result;
use rusqlite::{Connection, Row, params};

/// A favorited recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: Option<i64>,
    pub user_id: i64,
    pub recipe_id: i64,
}

impl Favorite {
    /// Create a new Favorite
    pub fn new(user_id: i64, recipe_id: i64) -> Self {
        Self {
            id: None,
            user_id,
            recipe_id,
        }
    }

    /// Insert this favorite; a second one for the same pair is an integrity violation
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO favorites (user_id, recipe_id) VALUES (?1, ?2)",
            params![&self.user_id, &self.recipe_id],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Check if a user has favorited a recipe
    pub fn exists(conn: &Connection, user_id: i64, recipe_id: i64) -> Result<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM favorites WHERE user_id = ?1 AND recipe_id = ?2",
            params![user_id, recipe_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Remove a favorite, returning whether one existed
    pub fn remove(conn: &Connection, user_id: i64, recipe_id: i64) -> Result<bool> {
        let removed = conn.execute(
            "DELETE FROM favorites WHERE user_id = ?1 AND recipe_id = ?2",
            params![user_id, recipe_id],
        )?;
        Ok(removed > 0)
    }

    /// All favorites of a user
    pub fn find_by_user(conn: &Connection, user_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, user_id, recipe_id FROM favorites WHERE user_id = ?1 ORDER BY id",
        )?;

        let favorites = stmt
            .query_map([user_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(favorites)
    }

    /// How many users have favorited a recipe
    pub fn count_for_recipe(conn: &Connection, recipe_id: i64) -> Result<i64> {
        let count = conn.query_row(
            "SELECT COUNT(*) FROM favorites WHERE recipe_id = ?1",
            [recipe_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            user_id: row.get(1)?,
            recipe_id: row.get(2)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::db::models::{Recipe, User};
    use crate::error::Error;

    fn setup() -> (Connection, i64, i64) {
        let conn = db::open_in_memory().unwrap();
        let user = User::new("chef".to_string(), "chef@example.com".to_string())
            .insert(&conn)
            .unwrap();
        let recipe = Recipe::new(user, "Omelette".to_string(), "Beat".to_string())
            .insert(&conn)
            .unwrap();
        (conn, user, recipe)
    }

    #[test]
    fn test_favorite_toggle() {
        let (conn, user, recipe) = setup();

        Favorite::new(user, recipe).insert(&conn).unwrap();
        assert!(Favorite::exists(&conn, user, recipe).unwrap());
        assert_eq!(Favorite::count_for_recipe(&conn, recipe).unwrap(), 1);

        assert!(Favorite::remove(&conn, user, recipe).unwrap());
        assert!(!Favorite::remove(&conn, user, recipe).unwrap());
        assert!(!Favorite::exists(&conn, user, recipe).unwrap());
    }

    #[test]
    fn test_duplicate_favorite_is_integrity_violation() {
        let (conn, user, recipe) = setup();

        Favorite::new(user, recipe).insert(&conn).unwrap();
        let result = Favorite::new(user, recipe).insert(&conn);
        assert!(matches!(result, Err(Error::IntegrityViolation(_))));
        assert_eq!(Favorite::find_by_user(&conn, user).unwrap().len(), 1);
    }

    #[test]
    fn test_recipe_deletion_cascades() {
        let (conn, user, recipe) = setup();

        Favorite::new(user, recipe).insert(&conn).unwrap();
        Recipe::delete(&conn, recipe).unwrap();
        assert!(Favorite::find_by_user(&conn, user).unwrap().is_empty());
    }
}
