use std::collections::HashMap;

use serde::Serialize;

use crate::meals::model::Ingredient;
use crate::pantry::model::PantryItem;

/// Tri-state outcome of matching one ingredient requirement against stock.
/// `Insufficient` and `Missing` are distinguished for display only; both block
/// cooking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Availability {
    Available { available: f64 },
    Insufficient { available: f64 },
    Missing,
}

impl Availability {
    /// Matched pantry quantity; zero when nothing matched.
    pub fn available(&self) -> f64 {
        match self {
            Availability::Available { available } | Availability::Insufficient { available } => {
                *available
            }
            Availability::Missing => 0.0,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available { .. })
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Name-keyed lookup over a pantry snapshot. Ingredients join pantry items by
/// normalized display name, not by id; built once per snapshot and reused for
/// every resolver call. Duplicate names resolve last-write-wins.
pub struct PantryIndex<'a> {
    by_name: HashMap<String, &'a PantryItem>,
}

impl<'a> PantryIndex<'a> {
    pub fn build(items: &'a [PantryItem]) -> Self {
        let mut by_name = HashMap::with_capacity(items.len());
        for item in items {
            by_name.insert(normalize(&item.name), item);
        }
        Self { by_name }
    }

    pub fn lookup(&self, name: &str) -> Option<&'a PantryItem> {
        self.by_name.get(&normalize(name)).copied()
    }

    /// Pure availability check. Units are never compared or converted; matching
    /// is by name alone. A "kg" requirement against a "g" stock record counts
    /// as the same item (inherited simplification, kept on purpose).
    pub fn resolve(&self, ingredient: &Ingredient) -> Availability {
        match self.lookup(&ingredient.name) {
            None => Availability::Missing,
            Some(item) if item.quantity >= ingredient.quantity => Availability::Available {
                available: item.quantity,
            },
            Some(item) => Availability::Insufficient {
                available: item.quantity,
            },
        }
    }
}
