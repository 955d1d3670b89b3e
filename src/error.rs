use thiserror::Error;

/// Boundary validation failures. The engine treats these as simple rejections:
/// the offending operation is a no-op, nothing panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("quantity must be greater than zero")]
    NonPositiveQuantity,
    #[error("quantity must not be negative")]
    NegativeQuantity,
    #[error("preparation time must be at least one minute")]
    ZeroPreparationTime,
}
