// src/db/models/follow.rs

//! Follow model - a subscription from one user to a recipe author

use super::User;
use crate::error::Result;
use rusqlite::{Connection, Row, params};

/// A user following an author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub id: Option<i64>,
    /// The follower
    pub user_id: i64,
    /// The followed author
    pub author_id: i64,
}

/// An author a user follows, with how many recipes they have published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowedAuthor {
    pub author: User,
    pub recipe_count: i64,
}

impl Follow {
    /// Create a new Follow
    pub fn new(user_id: i64, author_id: i64) -> Self {
        Self {
            id: None,
            user_id,
            author_id,
        }
    }

    /// Insert this follow; following the same author twice is an integrity violation
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO follows (user_id, author_id) VALUES (?1, ?2)",
            params![&self.user_id, &self.author_id],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Check if a user follows an author
    pub fn exists(conn: &Connection, user_id: i64, author_id: i64) -> Result<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM follows WHERE user_id = ?1 AND author_id = ?2",
            params![user_id, author_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Unfollow, returning whether the subscription existed
    pub fn remove(conn: &Connection, user_id: i64, author_id: i64) -> Result<bool> {
        let removed = conn.execute(
            "DELETE FROM follows WHERE user_id = ?1 AND author_id = ?2",
            params![user_id, author_id],
        )?;
        Ok(removed > 0)
    }

    /// All follows made by a user
    pub fn find_by_user(conn: &Connection, user_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, user_id, author_id FROM follows WHERE user_id = ?1 ORDER BY id",
        )?;

        let follows = stmt
            .query_map([user_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(follows)
    }

    /// Authors a user follows, each with their recipe count
    pub fn find_authors_for_user(conn: &Connection, user_id: i64) -> Result<Vec<FollowedAuthor>> {
        let mut stmt = conn.prepare(
            "SELECT u.id, u.username, u.email, u.first_name, u.last_name,
                    (SELECT COUNT(*) FROM recipes r WHERE r.author_id = u.id)
             FROM follows f
             JOIN users u ON u.id = f.author_id
             WHERE f.user_id = ?1
             ORDER BY f.id",
        )?;

        let authors = stmt
            .query_map([user_id], |row| {
                Ok(FollowedAuthor {
                    author: User {
                        id: Some(row.get(0)?),
                        username: row.get(1)?,
                        email: row.get(2)?,
                        first_name: row.get(3)?,
                        last_name: row.get(4)?,
                    },
                    recipe_count: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(authors)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            user_id: row.get(1)?,
            author_id: row.get(2)?,
        })
    }
}
