pub mod model;
pub mod repo;

pub use model::{NewShoppingItem, ShoppingItem};
pub use repo::ShoppingStore;
