//! Error types for board operations.

use crate::entity::EntityId;
use thiserror::Error;

/// Board errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// An operation was invoked outside the state it is valid in.
    #[error("Invalid state: {0}")]
    InvalidState(String),
    /// An entity id that the registry never handed out.
    #[error("Unknown entity: {0}")]
    UnknownEntity(EntityId),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BoardError::InvalidState("path already created".to_string());
        assert_eq!(err.to_string(), "Invalid state: path already created");

        let id = EntityId::new();
        let err = BoardError::UnknownEntity(id);
        assert_eq!(err.to_string(), format!("Unknown entity: {}", id));
    }
}
