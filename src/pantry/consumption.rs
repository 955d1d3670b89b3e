use serde::Serialize;
use uuid::Uuid;

use crate::meals::model::Meal;
use crate::pantry::availability::PantryIndex;

/// One staged pantry write produced by completing a meal. The batch is a set of
/// independent writes: applying one never depends on another, and the clamp at
/// zero makes a single write safe to re-apply but NOT exactly-once — replaying
/// the whole batch double-subtracts. The caller must apply it at most once per
/// meal (guarded by the `completed` flag).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    pub item_id: Uuid,
    pub new_quantity: f64,
}

/// Stages the quantity deltas for a completed meal. Ingredients with no pantry
/// match are skipped silently: the meal was only conditionally markable as
/// done, and a missing item has nothing to subtract from.
pub fn stage_consumption(meal: &Meal, index: &PantryIndex<'_>) -> Vec<StockUpdate> {
    meal.ingredients
        .iter()
        .filter_map(|ingredient| {
            index.lookup(&ingredient.name).map(|item| StockUpdate {
                item_id: item.id,
                new_quantity: (item.quantity - ingredient.quantity).max(0.0),
            })
        })
        .collect()
}
