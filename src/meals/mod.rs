pub mod completion;
pub mod feasibility;
pub mod model;
pub mod repo;

pub use completion::{complete_meal, CompletionError};
pub use feasibility::{can_cook, missing_or_insufficient};
pub use model::{Difficulty, Ingredient, Meal, MealType, NewMeal};
pub use repo::MealStore;
