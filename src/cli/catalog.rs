// src/cli/catalog.rs
//! Users, ingredients and tags

use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a user
    Add {
        username: String,

        email: String,

        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,
    },

    /// List users
    List,

    /// Delete a user together with their recipes and relations
    Delete {
        /// User ID
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum IngredientCommands {
    /// Add an ingredient
    Add {
        /// Ingredient name
        name: String,

        /// Unit of measurement (g, ml, pcs, ...)
        measurement_unit: String,
    },

    /// Search ingredients by name prefix
    Search {
        /// Name prefix; lists everything when omitted
        #[arg(default_value = "")]
        name: String,
    },
}

#[derive(Subcommand)]
pub enum TagCommands {
    /// Add a tag
    Add {
        /// Slug (letters, digits, '-' and '_')
        slug: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Hex color (#RRGGBB)
        #[arg(long)]
        color: Option<String>,
    },

    /// List tags
    List,

    /// Delete a tag, detaching it from every recipe
    Delete {
        /// Tag ID
        id: i64,
    },
}
