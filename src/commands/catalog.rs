// src/commands/catalog.rs
//! User, ingredient and tag commands

use anyhow::Result;
use foodgram::db::models::{Ingredient, Tag, User};
use tracing::info;

/// Register a user
pub fn cmd_user_add(
    username: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
    db_path: &str,
) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;

    let mut user = User::new(username.to_string(), email.to_string())
        .with_names(first_name.to_string(), last_name.to_string());
    let id = user.insert(&conn)?;

    info!("Created user {} ({})", username, id);
    println!("Created user {} (id {})", username, id);
    Ok(())
}

/// List users
pub fn cmd_user_list(db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;
    let users = User::list_all(&conn)?;

    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    for user in &users {
        print!("  [{}] {} <{}>", user.id.unwrap_or_default(), user.username, user.email);
        let full_name = format!("{} {}", user.first_name, user.last_name);
        if !full_name.trim().is_empty() {
            print!(" - {}", full_name.trim());
        }
        println!();
    }
    println!("\nTotal: {} user(s)", users.len());
    Ok(())
}

/// Delete a user
pub fn cmd_user_delete(id: i64, db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;
    let user = User::get(&conn, id)?;

    User::delete(&conn, id)?;
    info!("Deleted user {} ({})", user.username, id);
    println!("Deleted user {} and everything they owned", user.username);
    Ok(())
}

/// Add an ingredient
pub fn cmd_ingredient_add(name: &str, measurement_unit: &str, db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;

    let mut ingredient = Ingredient::new(name.to_string(), measurement_unit.to_string());
    let id = ingredient.insert(&conn)?;

    println!("Created ingredient {} ({}) (id {})", name, measurement_unit, id);
    Ok(())
}

/// Search ingredients by name prefix
pub fn cmd_ingredient_search(query: &str, db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;
    let ingredients = foodgram::search_ingredients(&conn, query)?;

    if ingredients.is_empty() {
        println!("No ingredients match '{}'.", query);
        return Ok(());
    }

    for ingredient in &ingredients {
        println!(
            "  [{}] {} ({})",
            ingredient.id.unwrap_or_default(),
            ingredient.name,
            ingredient.measurement_unit
        );
    }
    Ok(())
}

/// Add a tag
pub fn cmd_tag_add(
    slug: &str,
    name: Option<&str>,
    color: Option<&str>,
    db_path: &str,
) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;

    let mut tag = Tag::new(name.map(str::to_string), Some(slug.to_string()));
    if let Some(color) = color {
        tag = tag.with_color(color.to_string());
    }
    let id = tag.insert(&conn)?;

    println!("Created tag {} (id {})", slug, id);
    Ok(())
}

/// Delete a tag
pub fn cmd_tag_delete(id: i64, db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;
    let tag = Tag::find_by_id(&conn, id)?
        .ok_or_else(|| anyhow::anyhow!("Tag {} not found", id))?;

    Tag::delete(&conn, id)?;
    let slug = tag.slug.as_deref().unwrap_or("-");
    info!("Deleted tag {} ({})", slug, id);
    println!("Deleted tag {}", slug);
    Ok(())
}

/// List tags
pub fn cmd_tag_list(db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;
    let tags = Tag::list_all(&conn)?;

    if tags.is_empty() {
        println!("No tags found.");
        return Ok(());
    }

    for tag in &tags {
        println!(
            "  [{}] {} {} {}",
            tag.id.unwrap_or_default(),
            tag.slug.as_deref().unwrap_or("-"),
            tag.name.as_deref().unwrap_or(""),
            tag.color.as_deref().unwrap_or("")
        );
    }
    Ok(())
}
