// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{
    CartCommands, Cli, Commands, FavoriteCommands, FollowCommands, IngredientCommands,
    RecipeCommands, TagCommands, UserCommands,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = foodgram::load_config(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let db_path = cli.db_path.unwrap_or(config.database.path);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Init => commands::cmd_init(&db_path),

        Commands::User { command } => match command {
            UserCommands::Add {
                username,
                email,
                first_name,
                last_name,
            } => commands::cmd_user_add(&username, &email, &first_name, &last_name, &db_path),
            UserCommands::List => commands::cmd_user_list(&db_path),
            UserCommands::Delete { id } => commands::cmd_user_delete(id, &db_path),
        },

        Commands::Ingredient { command } => match command {
            IngredientCommands::Add {
                name,
                measurement_unit,
            } => commands::cmd_ingredient_add(&name, &measurement_unit, &db_path),
            IngredientCommands::Search { name } => {
                commands::cmd_ingredient_search(&name, &db_path)
            }
        },

        Commands::Tag { command } => match command {
            TagCommands::Add { slug, name, color } => {
                commands::cmd_tag_add(&slug, name.as_deref(), color.as_deref(), &db_path)
            }
            TagCommands::List => commands::cmd_tag_list(&db_path),
            TagCommands::Delete { id } => commands::cmd_tag_delete(id, &db_path),
        },

        Commands::Recipe { command } => match command {
            RecipeCommands::Add {
                author,
                name,
                text,
                cooking_time,
                image,
                ingredients,
                tags,
            } => commands::cmd_recipe_add(
                commands::NewRecipe {
                    author,
                    name: &name,
                    text: &text,
                    cooking_time,
                    image: image.as_deref(),
                    ingredients: &ingredients,
                    tags: &tags,
                },
                &db_path,
            ),
            RecipeCommands::Show { id, as_user } => {
                commands::cmd_recipe_show(id, as_user, &db_path)
            }
            RecipeCommands::Delete { id } => commands::cmd_recipe_delete(id, &db_path),
            RecipeCommands::List {
                as_user,
                tags,
                author,
                is_favorited,
                is_in_shopping_cart,
            } => commands::cmd_recipe_list(
                commands::ListArgs {
                    as_user,
                    tags: &tags,
                    author: author.as_deref(),
                    is_favorited: is_favorited.as_deref(),
                    is_in_shopping_cart: is_in_shopping_cart.as_deref(),
                },
                &db_path,
            ),
        },

        Commands::Favorite { command } => match command {
            FavoriteCommands::Add { user, recipe } => {
                commands::cmd_favorite_add(user, recipe, &db_path)
            }
            FavoriteCommands::Remove { user, recipe } => {
                commands::cmd_favorite_remove(user, recipe, &db_path)
            }
        },

        Commands::Cart { command } => match command {
            CartCommands::Add { user, recipe } => commands::cmd_cart_add(user, recipe, &db_path),
            CartCommands::Remove { user, recipe } => {
                commands::cmd_cart_remove(user, recipe, &db_path)
            }
            CartCommands::Download {
                user,
                format,
                output,
            } => commands::cmd_cart_download(user, &format, output.as_deref(), &db_path),
        },

        Commands::Follow { command } => match command {
            FollowCommands::Add { user, author } => {
                commands::cmd_follow_add(user, author, &db_path)
            }
            FollowCommands::Remove { user, author } => {
                commands::cmd_follow_remove(user, author, &db_path)
            }
            FollowCommands::List { user } => commands::cmd_follow_list(user, &db_path),
        },

        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "foodgram",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
