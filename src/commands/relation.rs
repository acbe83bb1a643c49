// src/commands/relation.rs
//! Favorite, cart and follow commands

use anyhow::Result;
use foodgram::db::models::{Favorite, Follow, Recipe, ShoppingCart, User};
use foodgram::{ExportFormat, ShoppingList};
use tracing::info;

/// Add a recipe to favorites
pub fn cmd_favorite_add(user: i64, recipe: i64, db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;
    let found = Recipe::get(&conn, recipe)?;

    Favorite::new(user, recipe).insert(&conn)?;
    println!("Added {} to favorites", found.name);
    Ok(())
}

/// Remove a recipe from favorites
pub fn cmd_favorite_remove(user: i64, recipe: i64, db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;

    if !Favorite::remove(&conn, user, recipe)? {
        return Err(anyhow::anyhow!(
            "Recipe {} is not in the favorites of user {}",
            recipe,
            user
        ));
    }
    println!("Removed recipe {} from favorites", recipe);
    Ok(())
}

/// Put a recipe in the shopping cart
pub fn cmd_cart_add(user: i64, recipe: i64, db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;
    let found = Recipe::get(&conn, recipe)?;

    ShoppingCart::new(user, recipe).insert(&conn)?;
    println!("Added {} to the shopping cart", found.name);
    Ok(())
}

/// Take a recipe out of the shopping cart
pub fn cmd_cart_remove(user: i64, recipe: i64, db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;

    if !ShoppingCart::remove(&conn, user, recipe)? {
        return Err(anyhow::anyhow!(
            "Recipe {} is not in the shopping cart of user {}",
            recipe,
            user
        ));
    }
    println!("Removed recipe {} from the shopping cart", recipe);
    Ok(())
}

/// Export the aggregated shopping list
pub fn cmd_cart_download(
    user: i64,
    format: &str,
    output: Option<&str>,
    db_path: &str,
) -> Result<()> {
    let format: ExportFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let conn = foodgram::db::open(db_path)?;

    let list = ShoppingList::for_user(&conn, user)?;
    let rendered = list.render(format)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!(
                "Wrote {} shopping list items for {} to {}",
                list.items.len(),
                list.username,
                path
            );
            println!("Shopping list written to {} ({})", path, format.as_str());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Follow an author
pub fn cmd_follow_add(user: i64, author: i64, db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;
    let followed = User::get(&conn, author)?;

    Follow::new(user, author).insert(&conn)?;
    println!("Now following {}", followed.username);
    Ok(())
}

/// Stop following an author
pub fn cmd_follow_remove(user: i64, author: i64, db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;

    if !Follow::remove(&conn, user, author)? {
        return Err(anyhow::anyhow!(
            "User {} does not follow user {}",
            user,
            author
        ));
    }
    println!("Unfollowed user {}", author);
    Ok(())
}

/// List followed authors
pub fn cmd_follow_list(user: i64, db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;
    User::get(&conn, user)?;

    let authors = Follow::find_authors_for_user(&conn, user)?;
    if authors.is_empty() {
        println!("Not following anyone.");
        return Ok(());
    }

    for followed in &authors {
        println!(
            "  [{}] {} ({} recipe(s))",
            followed.author.id.unwrap_or_default(),
            followed.author.username,
            followed.recipe_count
        );
    }
    Ok(())
}
