use crate::meals::model::{Ingredient, Meal};
use crate::pantry::availability::PantryIndex;

/// A meal is feasible when every ingredient resolves to `Available`. A meal
/// with no ingredients is vacuously cookable.
pub fn can_cook(meal: &Meal, index: &PantryIndex<'_>) -> bool {
    meal.ingredients
        .iter()
        .all(|ingredient| index.resolve(ingredient).is_available())
}

/// The shortfall list backing "missing ingredients" messaging: every
/// requirement that resolved to `Missing` or `Insufficient`, in insertion
/// order.
pub fn missing_or_insufficient<'m>(meal: &'m Meal, index: &PantryIndex<'_>) -> Vec<&'m Ingredient> {
    meal.ingredients
        .iter()
        .filter(|ingredient| !index.resolve(ingredient).is_available())
        .collect()
}
