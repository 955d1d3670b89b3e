use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::error::ValidationError;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Meal-type tags. The variants carry display strings; the grid renders them
/// in `MealType::ALL` order but nothing else treats them as ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display-only difficulty scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    #[default]
    Easy,
    Medium,
    Hard,
    #[serde(rename = "Very Hard")]
    VeryHard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::VeryEasy => "Very Easy",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very Hard",
        };
        f.write_str(label)
    }
}

/// An ingredient requirement owned by exactly one meal. The name is the join
/// key to the pantry; the unit is a label, never converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// A planned meal as stored in the `meals` collection. `completed` flips to
/// true exactly once; nothing in the engine ever flips it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub meal_type: MealType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    pub preparation_time: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
}

/// Payload for planning a new meal. Ingredient rows are validated as they are
/// added: an empty name or non-positive quantity is rejected and the list is
/// left untouched.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeal {
    pub name: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub meal_type: MealType,
    pub description: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub preparation_time: u32,
    pub difficulty: Difficulty,
}

impl NewMeal {
    pub fn new(name: &str, date: Date, meal_type: MealType) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            date,
            meal_type,
            description: None,
            ingredients: Vec::new(),
            preparation_time: 30,
            difficulty: Difficulty::default(),
        })
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_preparation_time(mut self, minutes: u32) -> Result<Self, ValidationError> {
        if minutes == 0 {
            return Err(ValidationError::ZeroPreparationTime);
        }
        self.preparation_time = minutes;
        Ok(self)
    }

    /// Appends an ingredient requirement, preserving insertion order.
    pub fn add_ingredient(
        &mut self,
        name: &str,
        quantity: f64,
        unit: &str,
    ) -> Result<(), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if quantity <= 0.0 {
            return Err(ValidationError::NonPositiveQuantity);
        }
        self.ingredients.push(Ingredient {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        });
        Ok(())
    }
}
