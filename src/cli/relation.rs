// src/cli/relation.rs
//! Favorites, shopping cart and follows

use clap::Subcommand;

#[derive(Subcommand)]
pub enum FavoriteCommands {
    /// Add a recipe to a user's favorites
    Add { user: i64, recipe: i64 },

    /// Remove a recipe from a user's favorites
    Remove { user: i64, recipe: i64 },
}

#[derive(Subcommand)]
pub enum CartCommands {
    /// Put a recipe in a user's shopping cart
    Add { user: i64, recipe: i64 },

    /// Take a recipe out of a user's shopping cart
    Remove { user: i64, recipe: i64 },

    /// Print the aggregated shopping list
    Download {
        user: i64,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum FollowCommands {
    /// Follow an author
    Add { user: i64, author: i64 },

    /// Stop following an author
    Remove { user: i64, author: i64 },

    /// List authors a user follows
    List { user: i64 },
}
