// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use foodgram::db;
use foodgram::db::models::{
    Favorite, Ingredient, IngredientRecipe, Recipe, ShoppingCart, Tag, User,
};
use rusqlite::Connection;
use tempfile::TempDir;

/// IDs of everything [`setup_kitchen_db`] creates
pub struct Kitchen {
    pub alice: i64,
    pub bob: i64,
    pub carol: i64,
    /// alice, tags: breakfast; egg 2, milk 100ml
    pub omelette: i64,
    /// alice, tags: breakfast, sweet; egg 3, milk 300ml, flour 200g
    pub pancakes: i64,
    /// bob, tags: lunch; no ingredients
    pub salad: i64,
    /// bob, tags: sweet; egg 4, flour 250g
    pub cake: i64,
    /// carol, no tags; milk 1l
    pub porridge: i64,
}

/// Create a test database with three users and five recipes.
///
/// bob has favorited omelette and cake and has pancakes and cake in his cart.
/// Returns (TempDir, db_path, Kitchen) - keep the TempDir alive to prevent cleanup.
pub fn setup_kitchen_db() -> (TempDir, String, Kitchen) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_str()
        .unwrap()
        .to_string();

    db::init(&db_path).unwrap();
    let mut conn = db::open(&db_path).unwrap();

    let kitchen = db::transaction(&mut conn, |tx| {
        let alice = User::new("alice".to_string(), "alice@example.com".to_string()).insert(tx)?;
        let bob = User::new("bob".to_string(), "bob@example.com".to_string()).insert(tx)?;
        let carol = User::new("carol".to_string(), "carol@example.com".to_string()).insert(tx)?;

        let egg = Ingredient::new("egg".to_string(), "pcs".to_string()).insert(tx)?;
        let milk = Ingredient::new("milk".to_string(), "ml".to_string()).insert(tx)?;
        let milk_l = Ingredient::new("milk".to_string(), "l".to_string()).insert(tx)?;
        let flour = Ingredient::new("flour".to_string(), "g".to_string()).insert(tx)?;

        let breakfast = Tag::new(Some("Breakfast".to_string()), Some("breakfast".to_string()))
            .insert(tx)?;
        let lunch = Tag::new(Some("Lunch".to_string()), Some("lunch".to_string())).insert(tx)?;
        let sweet = Tag::new(Some("Sweet".to_string()), Some("sweet".to_string()))
            .with_color("#ff00aa".to_string())
            .insert(tx)?;

        let recipe = |author: i64, name: &str, tags: &[i64], items: &[(i64, u16)]| {
            let id = Recipe::new(author, name.to_string(), format!("How to make {name}"))
                .with_cooking_time(15)
                .insert(tx)?;
            for tag in tags {
                Recipe::add_tag(tx, id, *tag)?;
            }
            for (ingredient, amount) in items {
                IngredientRecipe::new(*ingredient, id, *amount).insert(tx)?;
            }
            Ok::<i64, foodgram::Error>(id)
        };

        let omelette = recipe(alice, "Omelette", &[breakfast], &[(egg, 2), (milk, 100)])?;
        let pancakes = recipe(
            alice,
            "Pancakes",
            &[breakfast, sweet],
            &[(egg, 3), (milk, 300), (flour, 200)],
        )?;
        let salad = recipe(bob, "Salad", &[lunch], &[])?;
        let cake = recipe(bob, "Cake", &[sweet], &[(egg, 4), (flour, 250)])?;
        let porridge = recipe(carol, "Porridge", &[], &[(milk_l, 1)])?;

        Favorite::new(bob, omelette).insert(tx)?;
        Favorite::new(bob, cake).insert(tx)?;
        ShoppingCart::new(bob, pancakes).insert(tx)?;
        ShoppingCart::new(bob, cake).insert(tx)?;

        Ok(Kitchen {
            alice,
            bob,
            carol,
            omelette,
            pancakes,
            salad,
            cake,
            porridge,
        })
    })
    .unwrap();

    (temp_dir, db_path, kitchen)
}

/// Open the database created by [`setup_kitchen_db`]
pub fn open(db_path: &str) -> Connection {
    db::open(db_path).unwrap()
}

/// Sorted copy of a list of IDs
pub fn sorted(mut ids: Vec<i64>) -> Vec<i64> {
    ids.sort_unstable();
    ids
}
