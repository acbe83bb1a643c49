// src/db/models/ingredient_recipe.rs

//! IngredientRecipe model - the quantified link between an ingredient and a recipe
//!
//! A recipe lists each ingredient at most once; the UNIQUE(ingredient_id,
//! recipe_id) constraint is what keeps the shopping list from double counting.

use super::Ingredient;
use crate::error::{Error, Result};
use rusqlite::{Connection, Row, params};

/// One ingredient of one recipe, with its amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRecipe {
    pub id: Option<i64>,
    pub ingredient_id: i64,
    pub recipe_id: i64,
    pub amount: u16,
}

/// An ingredient row joined with the amount a recipe needs of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeIngredient {
    pub ingredient: Ingredient,
    pub amount: u16,
}

impl IngredientRecipe {
    /// Create a new IngredientRecipe
    pub fn new(ingredient_id: i64, recipe_id: i64, amount: u16) -> Self {
        Self {
            id: None,
            ingredient_id,
            recipe_id,
            amount,
        }
    }

    /// Check field constraints before persisting
    pub fn validate(&self) -> Result<()> {
        if self.amount == 0 {
            return Err(Error::Validation(
                "ingredient amount must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Insert this row into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        self.validate()?;

        conn.execute(
            "INSERT INTO ingredient_recipes (ingredient_id, recipe_id, amount) VALUES (?1, ?2, ?3)",
            params![&self.ingredient_id, &self.recipe_id, &self.amount],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// All ingredient rows of a recipe
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, ingredient_id, recipe_id, amount FROM ingredient_recipes
             WHERE recipe_id = ?1 ORDER BY id",
        )?;

        let rows = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Ingredients of a recipe with their amounts, in the order they were added
    pub fn find_ingredients(conn: &Connection, recipe_id: i64) -> Result<Vec<RecipeIngredient>> {
        let mut stmt = conn.prepare(
            "SELECT i.id, i.name, i.measurement_unit, ir.amount
             FROM ingredient_recipes ir
             JOIN ingredients i ON i.id = ir.ingredient_id
             WHERE ir.recipe_id = ?1
             ORDER BY ir.id",
        )?;

        let rows = stmt
            .query_map([recipe_id], |row| {
                Ok(RecipeIngredient {
                    ingredient: Ingredient::from_row(row)?,
                    amount: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Remove one ingredient from a recipe
    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        conn.execute("DELETE FROM ingredient_recipes WHERE id = ?1", [id])?;
        Ok(())
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            ingredient_id: row.get(1)?,
            recipe_id: row.get(2)?,
            amount: row.get(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::db::models::{Recipe, User};

    fn setup() -> (Connection, i64, i64) {
        let conn = db::open_in_memory().unwrap();
        let author = User::new("chef".to_string(), "chef@example.com".to_string())
            .insert(&conn)
            .unwrap();
        let recipe = Recipe::new(author, "Omelette".to_string(), "Beat".to_string())
            .insert(&conn)
            .unwrap();
        let egg = Ingredient::new("egg".to_string(), "pcs".to_string())
            .insert(&conn)
            .unwrap();
        (conn, recipe, egg)
    }

    #[test]
    fn test_find_ingredients() {
        let (conn, recipe, egg) = setup();

        IngredientRecipe::new(egg, recipe, 3).insert(&conn).unwrap();

        let ingredients = IngredientRecipe::find_ingredients(&conn, recipe).unwrap();
        assert_eq!(ingredients.len(), 1);
        assert_eq!(ingredients[0].ingredient.name, "egg");
        assert_eq!(ingredients[0].amount, 3);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let (conn, recipe, egg) = setup();

        let result = IngredientRecipe::new(egg, recipe, 0).insert(&conn);
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(IngredientRecipe::find_by_recipe(&conn, recipe).unwrap().is_empty());
    }

    #[test]
    fn test_same_ingredient_twice_rejected() {
        let (conn, recipe, egg) = setup();

        IngredientRecipe::new(egg, recipe, 2).insert(&conn).unwrap();
        let result = IngredientRecipe::new(egg, recipe, 1).insert(&conn);
        assert!(matches!(result, Err(Error::IntegrityViolation(_))));
    }

    #[test]
    fn test_delete_single_row() {
        let (conn, recipe, egg) = setup();
        let milk = Ingredient::new("milk".to_string(), "ml".to_string())
            .insert(&conn)
            .unwrap();

        let egg_row = IngredientRecipe::new(egg, recipe, 2).insert(&conn).unwrap();
        IngredientRecipe::new(milk, recipe, 100).insert(&conn).unwrap();

        IngredientRecipe::delete(&conn, egg_row).unwrap();
        let left = IngredientRecipe::find_ingredients(&conn, recipe).unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].ingredient.name, "milk");
        assert!(Ingredient::find_by_id(&conn, egg).unwrap().is_some());
    }

    #[test]
    fn test_deleting_ingredient_cascades() {
        let (conn, recipe, egg) = setup();

        IngredientRecipe::new(egg, recipe, 2).insert(&conn).unwrap();
        Ingredient::delete(&conn, egg).unwrap();

        assert!(IngredientRecipe::find_by_recipe(&conn, recipe).unwrap().is_empty());
    }
}
