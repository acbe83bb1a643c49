// src/db/models/shopping_cart.rs

//! ShoppingCart model - recipes a user intends to shop for

use crate::error::Result;
use rusqlite::{Connection, Row, params};

/// One recipe in a user's shopping cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingCart {
    pub id: Option<i64>,
    pub user_id: i64,
    pub recipe_id: i64,
}

impl ShoppingCart {
    /// Create a new cart entry
    pub fn new(user_id: i64, recipe_id: i64) -> Self {
        Self {
            id: None,
            user_id,
            recipe_id,
        }
    }

    /// Insert this cart entry; adding the same recipe twice is an integrity violation
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO shopping_carts (user_id, recipe_id) VALUES (?1, ?2)",
            params![&self.user_id, &self.recipe_id],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Check if a recipe is in a user's cart
    pub fn contains(conn: &Connection, user_id: i64, recipe_id: i64) -> Result<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM shopping_carts WHERE user_id = ?1 AND recipe_id = ?2",
            params![user_id, recipe_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Remove a recipe from a user's cart, returning whether it was there
    pub fn remove(conn: &Connection, user_id: i64, recipe_id: i64) -> Result<bool> {
        let removed = conn.execute(
            "DELETE FROM shopping_carts WHERE user_id = ?1 AND recipe_id = ?2",
            params![user_id, recipe_id],
        )?;
        Ok(removed > 0)
    }

    /// All cart entries of a user
    pub fn find_by_user(conn: &Connection, user_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, user_id, recipe_id FROM shopping_carts WHERE user_id = ?1 ORDER BY id",
        )?;

        let entries = stmt
            .query_map([user_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Empty a user's cart
    pub fn clear(conn: &Connection, user_id: i64) -> Result<usize> {
        let removed = conn.execute("DELETE FROM shopping_carts WHERE user_id = ?1", [user_id])?;
        Ok(removed)
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

    #[test]
    fn test_cart_add_remove() {
        let conn = db::open_in_memory().unwrap();
        let user = User::new("chef".to_string(), "chef@example.com".to_string())
            .insert(&conn)
            .unwrap();
        let recipe = Recipe::new(user, "Omelette".to_string(), "Beat".to_string())
            .insert(&conn)
            .unwrap();

        ShoppingCart::new(user, recipe).insert(&conn).unwrap();
        assert!(ShoppingCart::contains(&conn, user, recipe).unwrap());
        assert!(matches!(
            ShoppingCart::new(user, recipe).insert(&conn),
            Err(Error::IntegrityViolation(_))
        ));

        assert!(ShoppingCart::remove(&conn, user, recipe).unwrap());
        assert!(ShoppingCart::find_by_user(&conn, user).unwrap().is_empty());
    }

    #[test]
    fn test_clear() {
        let conn = db::open_in_memory().unwrap();
        let user = User::new("chef".to_string(), "chef@example.com".to_string())
            .insert(&conn)
            .unwrap();
        for name in ["Soup", "Salad"] {
            let recipe = Recipe::new(user, name.to_string(), "Cook".to_string())
                .insert(&conn)
                .unwrap();
            ShoppingCart::new(user, recipe).insert(&conn).unwrap();
        }

        assert_eq!(ShoppingCart::clear(&conn, user).unwrap(), 2);
        assert!(ShoppingCart::find_by_user(&conn, user).unwrap().is_empty());
    }
}
