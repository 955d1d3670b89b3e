use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::ValidationError;

/// An entry on the shopping list. `purchased` is one-way, like a meal's
/// `completed` flag; `purchased_quantity` records what was actually bought.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub purchased: bool,
    #[serde(default)]
    pub purchased_quantity: Option<f64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub purchased_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShoppingItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl NewShoppingItem {
    pub fn new(name: &str, quantity: f64, unit: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if quantity <= 0.0 {
            return Err(ValidationError::NonPositiveQuantity);
        }
        Ok(Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shopping_entries_need_a_name_and_positive_quantity() {
        assert_eq!(
            NewShoppingItem::new("", 1.0, "l").unwrap_err(),
            ValidationError::EmptyName
        );
        assert_eq!(
            NewShoppingItem::new("Milk", 0.0, "l").unwrap_err(),
            ValidationError::NonPositiveQuantity
        );
        let item = NewShoppingItem::new(" Milk ", 2.0, "l").expect("valid entry");
        assert_eq!(item.name, "Milk");
    }
}
