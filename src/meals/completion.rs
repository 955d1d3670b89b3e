use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::meals::model::Meal;
use crate::meals::repo::MealStore;
use crate::pantry::availability::PantryIndex;
use crate::pantry::consumption::{stage_consumption, StockUpdate};
use crate::pantry::model::PantryItem;
use crate::pantry::repo::PantryStore;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("meal {0} is already completed")]
    AlreadyCompleted(Uuid),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Marks a meal as done and consumes its ingredients from the pantry.
///
/// This is an explicit two-phase operation with no cross-write atomicity: the
/// pantry batch is applied first and the `completed` flag is written last, so
/// a partial failure leaves the meal still pending rather than completed with
/// stale stock. The window is narrowed, not eliminated — if the final flag
/// write fails, stock has already been consumed; that divergence is logged and
/// the error propagates. The `completed` guard makes the batch at-most-once
/// per meal; a retry after success is rejected instead of double-subtracting.
///
/// The pantry snapshot must be freshly fetched by the caller. Two completions
/// computed from the same snapshot race on shared items: last write wins.
pub async fn complete_meal(
    meal: &Meal,
    pantry: &[PantryItem],
    meals: &MealStore,
    stock: &PantryStore,
) -> Result<Vec<StockUpdate>, CompletionError> {
    if meal.completed {
        return Err(CompletionError::AlreadyCompleted(meal.id));
    }

    let index = PantryIndex::build(pantry);
    let updates = stage_consumption(meal, &index);

    if !updates.is_empty() {
        stock.apply_updates(&updates).await?;
    }

    if let Err(e) = meals.mark_completed(meal.id).await {
        error!(
            error = %e,
            meal_id = %meal.id,
            consumed = updates.len(),
            "stock consumed but completion flag write failed; meal stays pending"
        );
        return Err(e.into());
    }

    info!(meal_id = %meal.id, consumed = updates.len(), "meal completed");
    Ok(updates)
}
