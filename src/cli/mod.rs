// src/cli/mod.rs
//! CLI definitions for Foodgram
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! - `init` - create and migrate the database
//! - `user`, `ingredient`, `tag` - manage reference data
//! - `recipe` - create, show, delete and filter recipes
//! - `favorite`, `cart`, `follow` - per-user relations
//! - `cart download` - export the aggregated shopping list

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

mod catalog;
mod recipe;
mod relation;

pub use catalog::{IngredientCommands, TagCommands, UserCommands};
pub use recipe::RecipeCommands;
pub use relation::{CartCommands, FavoriteCommands, FollowCommands};

#[derive(Parser)]
#[command(name = "foodgram")]
#[command(author = "Foodgram Contributors")]
#[command(version)]
#[command(about = "Recipe sharing backend with favorites, follows and shopping lists", long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the database file (overrides the configuration)
    #[arg(short, long, global = true)]
    pub db_path: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the Foodgram database
    Init,

    /// Manage users
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Manage ingredients
    Ingredient {
        #[command(subcommand)]
        command: IngredientCommands,
    },

    /// Manage tags
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },

    /// Create, inspect and filter recipes
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },

    /// Favorite recipes
    Favorite {
        #[command(subcommand)]
        command: FavoriteCommands,
    },

    /// Shopping cart and shopping list export
    Cart {
        #[command(subcommand)]
        command: CartCommands,
    },

    /// Follow recipe authors
    Follow {
        #[command(subcommand)]
        command: FollowCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
