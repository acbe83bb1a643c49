// src/lib.rs

//! Foodgram
//!
//! Recipe sharing backend: users publish recipes, tag them, favorite them,
//! follow authors and collect recipes into a shopping cart whose ingredients
//! are aggregated into a single shopping list.
//!
//! # Architecture
//!
//! - Database-first: all state in SQLite, relations cascade at the store level
//! - [`filter`]: narrows recipe collections by tag, author, favorite and cart status
//! - [`shopping_list`]: sums cart ingredient amounts per (name, unit)
//! - [`Viewer`]: the requesting user is always an explicit argument

pub mod config;
pub mod db;
mod error;
pub mod filter;
pub mod shopping_list;
mod viewer;

pub use config::{FoodgramConfig, load_config};
pub use error::{Error, Result};
pub use filter::{RecipeFilter, RecipeQuery, search_ingredients};
pub use shopping_list::{ExportFormat, ShoppingList, ShoppingListItem};
pub use viewer::Viewer;
