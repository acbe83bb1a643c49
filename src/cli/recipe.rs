// src/cli/recipe.rs
//! Recipe commands

use clap::Subcommand;

/// Parse an `INGREDIENT_ID:AMOUNT` pair
pub fn parse_ingredient_amount(s: &str) -> Result<(i64, u16), String> {
    let (id, amount) = s
        .split_once(':')
        .ok_or_else(|| format!("expected INGREDIENT_ID:AMOUNT, got '{s}'"))?;
    let id = id
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("invalid ingredient id '{id}'"))?;
    let amount = amount
        .trim()
        .parse::<u16>()
        .map_err(|_| format!("invalid amount '{amount}'"))?;
    Ok((id, amount))
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Create a recipe
    Add {
        /// Author user ID
        author: i64,

        /// Recipe name
        name: String,

        /// Description and instructions
        #[arg(long)]
        text: String,

        /// Cooking time in minutes
        #[arg(long)]
        cooking_time: Option<u16>,

        /// Image reference
        #[arg(long)]
        image: Option<String>,

        /// Ingredient with amount, as INGREDIENT_ID:AMOUNT (repeatable)
        #[arg(long = "ingredient", value_parser = parse_ingredient_amount)]
        ingredients: Vec<(i64, u16)>,

        /// Tag slug (repeatable or comma-separated)
        #[arg(long = "tag", value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Show a recipe with its ingredients and tags
    Show {
        /// Recipe ID
        id: i64,

        /// Show favorite/cart status for this user
        #[arg(long)]
        as_user: Option<i64>,
    },

    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: i64,
    },

    /// List recipes, optionally filtered
    List {
        /// Requesting user; anonymous when omitted
        #[arg(long)]
        as_user: Option<i64>,

        /// Keep recipes carrying any of these tag slugs
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Keep recipes by this author
        #[arg(long)]
        author: Option<String>,

        /// true: keep only the requesting user's favorites
        #[arg(long)]
        is_favorited: Option<String>,

        /// true: keep only recipes in the requesting user's cart
        #[arg(long)]
        is_in_shopping_cart: Option<String>,
    },
}
