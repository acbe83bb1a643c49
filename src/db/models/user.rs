// src/db/models/user.rs

//! User model - recipe authors, followers and shoppers
//!
//! Authentication lives outside this crate; a user row only carries the
//! identity the other tables point at.

use super::check_length;
use crate::error::{Error, Result};
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Maximum username length
pub const USERNAME_MAX_LEN: usize = 150;
/// Maximum email length
pub const EMAIL_MAX_LEN: usize = 254;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Create a new User
    pub fn new(username: String, email: String) -> Self {
        Self {
            id: None,
            username,
            email,
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    /// Set first and last name
    pub fn with_names(mut self, first_name: String, last_name: String) -> Self {
        self.first_name = first_name;
        self.last_name = last_name;
        self
    }

    /// Check field constraints before persisting
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::Validation("username must not be empty".to_string()));
        }
        check_length("username", &self.username, USERNAME_MAX_LEN)?;
        check_length("email", &self.email, EMAIL_MAX_LEN)?;
        if !self.email.contains('@') {
            return Err(Error::Validation(format!(
                "email '{}' is not a valid address",
                self.email
            )));
        }
        Ok(())
    }

    /// Insert this user into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        self.validate()?;

        conn.execute(
            "INSERT INTO users (username, email, first_name, last_name) VALUES (?1, ?2, ?3, ?4)",
            params![&self.username, &self.email, &self.first_name, &self.last_name],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find a user by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, username, email, first_name, last_name FROM users WHERE id = ?1",
        )?;

        let user = stmt.query_row([id], Self::from_row).optional()?;
        Ok(user)
    }

    /// Find a user by username
    pub fn find_by_username(conn: &Connection, username: &str) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, username, email, first_name, last_name FROM users WHERE username = ?1",
        )?;

        let user = stmt.query_row([username], Self::from_row).optional()?;
        Ok(user)
    }

    /// Fetch a user by ID, failing with `NotFound` when absent
    pub fn get(conn: &Connection, id: i64) -> Result<Self> {
        Self::find_by_id(conn, id)?.ok_or_else(|| Error::NotFound(format!("user {id}")))
    }

    /// Check whether a user exists
    pub fn exists(conn: &Connection, id: i64) -> Result<bool> {
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM users WHERE id = ?1", [id], |row| {
                row.get(0)
            })?;
        Ok(count > 0)
    }

    /// List all users
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, username, email, first_name, last_name FROM users ORDER BY id",
        )?;

        let users = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(users)
    }

    /// Delete a user; their recipes, follows, favorites and cart go with them
    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        conn.execute("DELETE FROM users WHERE id = ?1", [id])?;
        Ok(())
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            username: row.get(1)?,
            email: row.get(2)?,
            first_name: row.get(3)?,
            last_name: row.get(4)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn test_user_crud() {
        let conn = db::open_in_memory().unwrap();

        let mut user = User::new("chef".to_string(), "chef@example.com".to_string())
            .with_names("Gordon".to_string(), "Ramsay".to_string());
        let id = user.insert(&conn).unwrap();

        let found = User::find_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(found.username, "chef");
        assert_eq!(found.last_name, "Ramsay");
        assert!(User::exists(&conn, id).unwrap());

        let by_name = User::find_by_username(&conn, "chef").unwrap();
        assert_eq!(by_name.and_then(|u| u.id), Some(id));

        User::delete(&conn, id).unwrap();
        assert!(matches!(User::get(&conn, id), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let conn = db::open_in_memory().unwrap();

        User::new("chef".to_string(), "a@example.com".to_string())
            .insert(&conn)
            .unwrap();
        let result = User::new("chef".to_string(), "b@example.com".to_string()).insert(&conn);
        assert!(matches!(result, Err(Error::IntegrityViolation(_))));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let conn = db::open_in_memory().unwrap();

        let result = User::new("chef".to_string(), "not-an-email".to_string()).insert(&conn);
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
