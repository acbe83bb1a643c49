// src/db/models/mod.rs

//! Data models for Foodgram database entities
//!
//! This module defines Rust structs that correspond to database tables
//! and provides methods for creating, reading and deleting records.
//! Field validation runs in each model's `validate()` before any write.

mod favorite;
mod follow;
mod ingredient;
mod ingredient_recipe;
mod recipe;
mod shopping_cart;
mod tag;
mod user;

pub use favorite::Favorite;
pub use follow::{Follow, FollowedAuthor};
pub use ingredient::{INGREDIENT_FIELD_MAX_LEN, Ingredient};
pub use ingredient_recipe::{IngredientRecipe, RecipeIngredient};
pub use recipe::{RECIPE_NAME_MAX_LEN, Recipe};
pub(crate) use recipe::RECIPE_COLUMNS;
pub use shopping_cart::ShoppingCart;
pub use tag::{DEFAULT_TAG_COLOR, TAG_FIELD_MAX_LEN, Tag, validate_slug};
pub use user::User;

use crate::error::{Error, Result};

/// Reject `value` when it is longer than `max` characters
pub(crate) fn check_length(field: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(Error::Validation(format!(
            "{field} is {len} characters long, the limit is {max}"
        )));
    }
    Ok(())
}
