// src/cli/man_tree.rs
//
// Builder-API copy of the CLI, rendered into the man page by build.rs.
// Argument ids are the derive field names; `cli::tests` checks that both
// trees stay in step.

/// Common argument: database path
fn db_path_arg() -> clap::Arg {
    clap::Arg::new("db_path")
        .short('d')
        .long("db-path")
        .value_name("PATH")
        .global(true)
        .help("Path to the database file (overrides the configuration)")
}

/// Common argument: configuration file
fn config_arg() -> clap::Arg {
    clap::Arg::new("config")
        .long("config")
        .value_name("PATH")
        .global(true)
        .help("Path to the configuration file (default: /etc/foodgram/foodgram.toml)")
}

fn positional(id: &'static str, help: &'static str) -> clap::Arg {
    clap::Arg::new(id).required(true).help(help)
}

fn option(id: &'static str, long: &'static str, help: &'static str) -> clap::Arg {
    clap::Arg::new(id).long(long).help(help)
}

fn pair(
    name: &'static str,
    about: &'static str,
    second: &'static str,
    second_help: &'static str,
) -> clap::Command {
    clap::Command::new(name)
        .about(about)
        .arg(positional("user", "User ID"))
        .arg(positional(second, second_help))
}

fn build_cli() -> clap::Command {
    use clap::{Arg, ArgAction, Command};

    Command::new("foodgram")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Foodgram Contributors")
        .about("Recipe sharing backend with favorites, follows and shopping lists")
        .arg(config_arg())
        .arg(db_path_arg())
        .subcommand(Command::new("init").about("Initialize the Foodgram database"))
        .subcommand(
            Command::new("user")
                .about("Manage users")
                .subcommand(
                    Command::new("add")
                        .about("Register a user")
                        .arg(positional("username", "Username"))
                        .arg(positional("email", "Email address"))
                        .arg(option("first_name", "first-name", "First name"))
                        .arg(option("last_name", "last-name", "Last name")),
                )
                .subcommand(Command::new("list").about("List users"))
                .subcommand(
                    Command::new("delete")
                        .about("Delete a user together with their recipes and relations")
                        .arg(positional("id", "User ID")),
                ),
        )
        .subcommand(
            Command::new("ingredient")
                .about("Manage ingredients")
                .subcommand(
                    Command::new("add")
                        .about("Add an ingredient")
                        .arg(positional("name", "Ingredient name"))
                        .arg(positional(
                            "measurement_unit",
                            "Unit of measurement (g, ml, pcs, ...)",
                        )),
                )
                .subcommand(
                    Command::new("search")
                        .about("Search ingredients by name prefix")
                        .arg(Arg::new("name").help("Name prefix; lists everything when omitted")),
                ),
        )
        .subcommand(
            Command::new("tag")
                .about("Manage tags")
                .subcommand(
                    Command::new("add")
                        .about("Add a tag")
                        .arg(positional("slug", "Slug (letters, digits, '-' and '_')"))
                        .arg(option("name", "name", "Display name"))
                        .arg(option("color", "color", "Hex color (#RRGGBB)")),
                )
                .subcommand(Command::new("list").about("List tags"))
                .subcommand(
                    Command::new("delete")
                        .about("Delete a tag, detaching it from every recipe")
                        .arg(positional("id", "Tag ID")),
                ),
        )
        .subcommand(
            Command::new("recipe")
                .about("Create, inspect and filter recipes")
                .subcommand(
                    Command::new("add")
                        .about("Create a recipe")
                        .arg(positional("author", "Author user ID"))
                        .arg(positional("name", "Recipe name"))
                        .arg(option("text", "text", "Description and instructions").required(true))
                        .arg(option("cooking_time", "cooking-time", "Cooking time in minutes"))
                        .arg(option("image", "image", "Image reference"))
                        .arg(
                            option(
                                "ingredients",
                                "ingredient",
                                "Ingredient with amount, as INGREDIENT_ID:AMOUNT (repeatable)",
                            )
                            .action(ArgAction::Append),
                        )
                        .arg(
                            option("tags", "tag", "Tag slug (repeatable or comma-separated)")
                                .action(ArgAction::Append)
                                .value_delimiter(','),
                        ),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show a recipe with its ingredients and tags")
                        .arg(positional("id", "Recipe ID"))
                        .arg(option("as_user", "as-user", "Show favorite/cart status for this user")),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a recipe")
                        .arg(positional("id", "Recipe ID")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List recipes, optionally filtered")
                        .arg(option("as_user", "as-user", "Requesting user; anonymous when omitted"))
                        .arg(
                            option("tags", "tags", "Keep recipes carrying any of these tag slugs")
                                .action(ArgAction::Append)
                                .value_delimiter(','),
                        )
                        .arg(option("author", "author", "Keep recipes by this author"))
                        .arg(option(
                            "is_favorited",
                            "is-favorited",
                            "true: keep only the requesting user's favorites",
                        ))
                        .arg(option(
                            "is_in_shopping_cart",
                            "is-in-shopping-cart",
                            "true: keep only recipes in the requesting user's cart",
                        )),
                ),
        )
        .subcommand(
            Command::new("favorite")
                .about("Favorite recipes")
                .subcommand(pair("add", "Add a recipe to a user's favorites", "recipe", "Recipe ID"))
                .subcommand(pair(
                    "remove",
                    "Remove a recipe from a user's favorites",
                    "recipe",
                    "Recipe ID",
                )),
        )
        .subcommand(
            Command::new("cart")
                .about("Shopping cart and shopping list export")
                .subcommand(pair(
                    "add",
                    "Put a recipe in a user's shopping cart",
                    "recipe",
                    "Recipe ID",
                ))
                .subcommand(pair(
                    "remove",
                    "Take a recipe out of a user's shopping cart",
                    "recipe",
                    "Recipe ID",
                ))
                .subcommand(
                    Command::new("download")
                        .about("Print the aggregated shopping list")
                        .arg(positional("user", "User ID"))
                        .arg(
                            option("format", "format", "Output format: text or json")
                                .default_value("text"),
                        )
                        .arg(
                            option("output", "output", "Write to this file instead of stdout")
                                .short('o'),
                        ),
                ),
        )
        .subcommand(
            Command::new("follow")
                .about("Follow recipe authors")
                .subcommand(pair("add", "Follow an author", "author", "Author user ID"))
                .subcommand(pair("remove", "Stop following an author", "author", "Author user ID"))
                .subcommand(
                    Command::new("list")
                        .about("List authors a user follows")
                        .arg(positional("user", "User ID")),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    positional("shell", "Shell to generate completions for")
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"]),
                ),
        )
}
