pub mod availability;
pub mod consumption;
pub mod model;
pub mod repo;

pub use availability::{Availability, PantryIndex};
pub use consumption::{stage_consumption, StockUpdate};
pub use model::{NewPantryItem, PantryItem};
pub use repo::PantryStore;
