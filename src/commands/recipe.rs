// src/commands/recipe.rs
//! Recipe commands

use anyhow::Result;
use foodgram::db::models::{Favorite, IngredientRecipe, Recipe, ShoppingCart, Tag, User};
use foodgram::filter::{
    PARAM_AUTHOR, PARAM_IS_FAVORITED, PARAM_IS_IN_SHOPPING_CART, PARAM_TAGS, RecipeFilter,
    filter_recipes,
};
use foodgram::Viewer;
use tracing::info;

/// Fields of a recipe to create
pub struct NewRecipe<'a> {
    pub author: i64,
    pub name: &'a str,
    pub text: &'a str,
    pub cooking_time: Option<u16>,
    pub image: Option<&'a str>,
    pub ingredients: &'a [(i64, u16)],
    pub tags: &'a [String],
}

/// Create a recipe with its ingredients and tags in one transaction
pub fn cmd_recipe_add(new: NewRecipe<'_>, db_path: &str) -> Result<()> {
    let mut conn = foodgram::db::open(db_path)?;
    User::get(&conn, new.author)?;

    let recipe_id = foodgram::db::transaction(&mut conn, |tx| {
        let mut recipe = Recipe::new(new.author, new.name.to_string(), new.text.to_string());
        recipe.cooking_time = new.cooking_time;
        recipe.image = new.image.map(str::to_string);
        let recipe_id = recipe.insert(tx)?;

        for (ingredient_id, amount) in new.ingredients {
            IngredientRecipe::new(*ingredient_id, recipe_id, *amount).insert(tx)?;
        }

        for slug in new.tags {
            let tag = Tag::find_by_slug(tx, slug)?
                .ok_or_else(|| foodgram::Error::NotFound(format!("tag '{slug}'")))?;
            if let Some(tag_id) = tag.id {
                Recipe::add_tag(tx, recipe_id, tag_id)?;
            }
        }

        Ok(recipe_id)
    })?;

    info!("Created recipe {} ({})", new.name, recipe_id);
    println!("Created recipe {} (id {})", new.name, recipe_id);
    Ok(())
}

/// Show a recipe
pub fn cmd_recipe_show(id: i64, as_user: Option<i64>, db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;
    let recipe = Recipe::get(&conn, id)?;
    let author = User::get(&conn, recipe.author_id)?;

    println!("Recipe: {} (id {})", recipe.name, id);
    println!("Author: {}", author.username);
    if let Some(minutes) = recipe.cooking_time {
        println!("Cooking time: {} min", minutes);
    }
    if let Some(image) = &recipe.image {
        println!("Image: {}", image);
    }

    let tags = Tag::find_by_recipe(&conn, id)?;
    if !tags.is_empty() {
        let slugs: Vec<&str> = tags.iter().filter_map(|t| t.slug.as_deref()).collect();
        println!("Tags: {}", slugs.join(", "));
    }

    println!("Favorited by: {} user(s)", Favorite::count_for_recipe(&conn, id)?);

    if let Viewer::User(user_id) = Viewer::from_user_id(as_user) {
        println!("In your favorites: {}", Favorite::exists(&conn, user_id, id)?);
        println!("In your cart: {}", ShoppingCart::contains(&conn, user_id, id)?);
    }

    let ingredients = IngredientRecipe::find_ingredients(&conn, id)?;
    println!("\nIngredients ({}):", ingredients.len());
    for item in &ingredients {
        println!(
            "  {} ({}) - {}",
            item.ingredient.name, item.ingredient.measurement_unit, item.amount
        );
    }

    println!("\n{}", recipe.text);
    Ok(())
}

/// Delete a recipe
pub fn cmd_recipe_delete(id: i64, db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;
    let recipe = Recipe::get(&conn, id)?;

    Recipe::delete(&conn, id)?;
    info!("Deleted recipe {} ({})", recipe.name, id);
    println!("Deleted recipe {}", recipe.name);
    Ok(())
}

/// Filter arguments of `recipe list`, as given on the command line
pub struct ListArgs<'a> {
    pub as_user: Option<i64>,
    pub tags: &'a [String],
    pub author: Option<&'a str>,
    pub is_favorited: Option<&'a str>,
    pub is_in_shopping_cart: Option<&'a str>,
}

impl ListArgs<'_> {
    /// The arguments as query parameter pairs
    fn query_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> =
            self.tags.iter().map(|t| (PARAM_TAGS, t.as_str())).collect();
        if let Some(author) = self.author {
            pairs.push((PARAM_AUTHOR, author));
        }
        if let Some(value) = self.is_favorited {
            pairs.push((PARAM_IS_FAVORITED, value));
        }
        if let Some(value) = self.is_in_shopping_cart {
            pairs.push((PARAM_IS_IN_SHOPPING_CART, value));
        }
        pairs
    }
}

/// List recipes matching the filter
pub fn cmd_recipe_list(args: ListArgs<'_>, db_path: &str) -> Result<()> {
    let conn = foodgram::db::open(db_path)?;

    let viewer = Viewer::from_user_id(args.as_user);
    if let Some(user_id) = viewer.user_id() {
        User::get(&conn, user_id)?;
    }

    let filter = RecipeFilter::from_query_pairs(&args.query_pairs())?;
    let recipes = filter_recipes(&conn, &filter, &viewer)?;

    if recipes.is_empty() {
        println!("No recipes found.");
        return Ok(());
    }

    for recipe in &recipes {
        print!("  [{}] {}", recipe.id.unwrap_or_default(), recipe.name);
        if let Some(minutes) = recipe.cooking_time {
            print!(" ({} min)", minutes);
        }
        println!(" by user {}", recipe.author_id);
    }
    println!("\nTotal: {} recipe(s)", recipes.len());
    Ok(())
}
