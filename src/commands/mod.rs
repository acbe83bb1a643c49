// src/commands/mod.rs
//! Command handlers for the Foodgram CLI

mod catalog;
mod recipe;
mod relation;

pub use catalog::{
    cmd_ingredient_add, cmd_ingredient_search, cmd_tag_add, cmd_tag_delete, cmd_tag_list,
    cmd_user_add, cmd_user_delete, cmd_user_list,
};
pub use recipe::{
    ListArgs, NewRecipe, cmd_recipe_add, cmd_recipe_delete, cmd_recipe_list, cmd_recipe_show,
};
pub use relation::{
    cmd_cart_add, cmd_cart_download, cmd_cart_remove, cmd_favorite_add, cmd_favorite_remove,
    cmd_follow_add, cmd_follow_list, cmd_follow_remove,
};

use anyhow::Result;
use tracing::info;

/// Create and migrate the database
pub fn cmd_init(db_path: &str) -> Result<()> {
    info!("Initializing Foodgram database at: {}", db_path);
    foodgram::db::init(db_path)?;
    println!("Database initialized successfully at: {}", db_path);
    Ok(())
}
