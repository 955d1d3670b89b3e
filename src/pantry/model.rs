use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

fn default_min_quantity() -> f64 {
    1.0
}

fn default_category() -> String {
    "Other".to_string()
}

/// A stock record in the pantry collection. Ingredients reference these by
/// display name, not by id; `min_quantity` only drives low-stock flagging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default = "default_min_quantity")]
    pub min_quantity: f64,
    #[serde(default = "default_category")]
    pub category: String,
}

impl PantryItem {
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }
}

/// Payload for adding a pantry item; validated before it ever reaches the store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPantryItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub min_quantity: f64,
    pub category: String,
}

impl NewPantryItem {
    pub fn new(name: &str, quantity: f64, unit: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if quantity < 0.0 {
            return Err(ValidationError::NegativeQuantity);
        }
        Ok(Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            min_quantity: default_min_quantity(),
            category: default_category(),
        })
    }

    pub fn with_min_quantity(mut self, min_quantity: f64) -> Result<Self, ValidationError> {
        if min_quantity < 0.0 {
            return Err(ValidationError::NegativeQuantity);
        }
        self.min_quantity = min_quantity;
        Ok(self)
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_trims_name_and_defaults() {
        let item = NewPantryItem::new("  Tomato ", 2.0, "kg").expect("valid item");
        assert_eq!(item.name, "Tomato");
        assert_eq!(item.min_quantity, 1.0);
        assert_eq!(item.category, "Other");
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            NewPantryItem::new("   ", 1.0, "kg").unwrap_err(),
            ValidationError::EmptyName
        );
    }

    #[test]
    fn negative_quantity_is_rejected() {
        assert_eq!(
            NewPantryItem::new("Rice", -1.0, "kg").unwrap_err(),
            ValidationError::NegativeQuantity
        );
        let err = NewPantryItem::new("Rice", 1.0, "kg")
            .expect("valid item")
            .with_min_quantity(-0.5)
            .unwrap_err();
        assert_eq!(err, ValidationError::NegativeQuantity);
    }

    #[test]
    fn zero_quantity_is_allowed_and_low_stock() {
        let item: PantryItem = serde_json::from_value(serde_json::json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "name": "Salt",
            "quantity": 0.0,
            "unit": "g"
        }))
        .expect("deserialize with defaults");
        assert_eq!(item.min_quantity, 1.0);
        assert!(item.is_low_stock());
    }
}
