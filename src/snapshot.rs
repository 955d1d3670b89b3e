use crate::meals::model::Meal;
use crate::meals::repo::MealStore;
use crate::pantry::model::PantryItem;
use crate::pantry::repo::PantryStore;
use crate::shopping::model::ShoppingItem;
use crate::shopping::repo::ShoppingStore;
use crate::store::StoreError;

/// A point-in-time copy of the three collections. The engine only ever
/// computes against one of these; after any mutation the caller re-fetches a
/// fresh one.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub meals: Vec<Meal>,
    pub pantry: Vec<PantryItem>,
    pub shopping: Vec<ShoppingItem>,
}

impl Snapshot {
    /// Loads all three collections in one fan-out of independent fetches. Any
    /// single failure fails the whole load; there is no partial snapshot.
    pub async fn load(
        meals: &MealStore,
        pantry: &PantryStore,
        shopping: &ShoppingStore,
    ) -> Result<Self, StoreError> {
        let (meals, pantry, shopping) =
            tokio::join!(meals.fetch_all(), pantry.fetch_all(), shopping.fetch_all());
        Ok(Self {
            meals: meals?,
            pantry: pantry?,
            shopping: shopping?,
        })
    }
}
