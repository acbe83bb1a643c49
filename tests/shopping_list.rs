// tests/shopping_list.rs

//! Shopping list aggregation and the store constraints it relies on.

mod common;

use common::{open, setup_kitchen_db};
use foodgram::db::models::{
    Favorite, Follow, Ingredient, IngredientRecipe, Recipe, ShoppingCart, Tag, User,
};
use foodgram::{Error, ExportFormat, ShoppingList};

fn lines(list: &ShoppingList) -> Vec<(String, String, i64)> {
    list.items
        .iter()
        .map(|i| (i.name.clone(), i.measurement_unit.clone(), i.amount))
        .collect()
}

#[test]
fn test_cart_is_aggregated_per_name_and_unit() {
    let (_temp, db_path, k) = setup_kitchen_db();
    let conn = open(&db_path);

    // bob's cart: pancakes (egg 3, milk 300ml, flour 200g) + cake (egg 4, flour 250g)
    let list = ShoppingList::for_user(&conn, k.bob).unwrap();
    assert_eq!(list.username, "bob");
    assert_eq!(
        lines(&list),
        vec![
            ("egg".to_string(), "pcs".to_string(), 7),
            ("flour".to_string(), "g".to_string(), 450),
            ("milk".to_string(), "ml".to_string(), 300),
        ]
    );
}

#[test]
fn test_units_are_not_mixed() {
    let (_temp, db_path, k) = setup_kitchen_db();
    let conn = open(&db_path);

    ShoppingCart::new(k.carol, k.porridge).insert(&conn).unwrap();
    ShoppingCart::new(k.carol, k.omelette).insert(&conn).unwrap();

    let list = ShoppingList::for_user(&conn, k.carol).unwrap();
    assert_eq!(
        lines(&list),
        vec![
            ("egg".to_string(), "pcs".to_string(), 2),
            ("milk".to_string(), "l".to_string(), 1),
            ("milk".to_string(), "ml".to_string(), 100),
        ]
    );
}

#[test]
fn test_empty_results() {
    let (_temp, db_path, k) = setup_kitchen_db();
    let conn = open(&db_path);

    assert!(ShoppingList::for_user(&conn, k.alice).unwrap().is_empty());

    ShoppingCart::new(k.alice, k.salad).insert(&conn).unwrap();
    assert!(ShoppingList::for_user(&conn, k.alice).unwrap().is_empty());
}

#[test]
fn test_unknown_user() {
    let (_temp, db_path, _k) = setup_kitchen_db();
    let conn = open(&db_path);

    assert!(matches!(
        ShoppingList::for_user(&conn, 9999),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_recipe_deletion_updates_the_list() {
    let (_temp, db_path, k) = setup_kitchen_db();
    let conn = open(&db_path);

    Recipe::delete(&conn, k.cake).unwrap();

    let list = ShoppingList::for_user(&conn, k.bob).unwrap();
    assert_eq!(
        lines(&list),
        vec![
            ("egg".to_string(), "pcs".to_string(), 3),
            ("flour".to_string(), "g".to_string(), 200),
            ("milk".to_string(), "ml".to_string(), 300),
        ]
    );
    assert!(!Favorite::exists(&conn, k.bob, k.cake).unwrap());
}

#[test]
fn test_duplicate_relations_are_integrity_violations() {
    let (_temp, db_path, k) = setup_kitchen_db();
    let conn = open(&db_path);

    assert!(matches!(
        Favorite::new(k.bob, k.omelette).insert(&conn),
        Err(Error::IntegrityViolation(_))
    ));
    assert!(matches!(
        ShoppingCart::new(k.bob, k.cake).insert(&conn),
        Err(Error::IntegrityViolation(_))
    ));

    Follow::new(k.bob, k.alice).insert(&conn).unwrap();
    assert!(matches!(
        Follow::new(k.bob, k.alice).insert(&conn),
        Err(Error::IntegrityViolation(_))
    ));

    let egg = foodgram::search_ingredients(&conn, "egg").unwrap()[0]
        .id
        .unwrap();
    assert!(matches!(
        IngredientRecipe::new(egg, k.omelette, 1).insert(&conn),
        Err(Error::IntegrityViolation(_))
    ));

    // The rejected rows did not change the aggregate
    let list = ShoppingList::for_user(&conn, k.bob).unwrap();
    assert_eq!(list.items[0].amount, 7);
}

#[test]
fn test_validation_happens_before_persistence() {
    let (_temp, db_path, k) = setup_kitchen_db();
    let conn = open(&db_path);
    let tags_before = Tag::list_all(&conn).unwrap().len();

    let result = Tag::new(None, Some("brunch time".to_string())).insert(&conn);
    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(Tag::list_all(&conn).unwrap().len(), tags_before);

    let mut salt = Ingredient::new("salt".to_string(), "g".to_string());
    let salt_id = salt.insert(&conn).unwrap();
    let result = IngredientRecipe::new(salt_id, k.salad, 0).insert(&conn);
    assert!(matches!(result, Err(Error::Validation(_))));
    assert!(IngredientRecipe::find_by_recipe(&conn, k.salad).unwrap().is_empty());
}

#[test]
fn test_deleting_user_cascades_everywhere() {
    let (_temp, db_path, k) = setup_kitchen_db();
    let conn = open(&db_path);

    User::delete(&conn, k.bob).unwrap();

    assert!(Recipe::find_by_id(&conn, k.cake).unwrap().is_none());
    assert!(Favorite::find_by_user(&conn, k.bob).unwrap().is_empty());
    assert!(ShoppingCart::find_by_user(&conn, k.bob).unwrap().is_empty());
    assert!(matches!(
        ShoppingList::for_user(&conn, k.bob),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_json_export() {
    let (_temp, db_path, k) = setup_kitchen_db();
    let conn = open(&db_path);

    let json = ShoppingList::for_user(&conn, k.bob)
        .unwrap()
        .render(ExportFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["username"], "bob");
    assert_eq!(value["items"][0]["name"], "egg");
    assert_eq!(value["items"][0]["measurement_unit"], "pcs");
    assert_eq!(value["items"][0]["amount"], 7);
}
