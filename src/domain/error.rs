use thiserror::Error;

/// Terminal, user-facing failures of the booking core.
///
/// None of these are retried internally; a store failure surfaces as
/// [`DomainError::Database`] and propagates to the caller unchanged.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Unknown state: {0}")]
    UnknownState(String),

    #[error("Invalid booking range: {0}")]
    InvalidRange(String),

    #[error("User id={user_id} is the owner of item id={item_id}")]
    OwnerConflict { user_id: i64, item_id: i64 },

    #[error("Item id={0} is not available for booking")]
    ItemUnavailable(i64),

    #[error("Booking id={id} has status={status}, transition rejected")]
    InvalidStatus { id: i64, status: String },

    #[error("User id={user_id} is not the owner of item id={item_id}")]
    UserConflict { user_id: i64, item_id: i64 },

    #[error("User id={user_id} has no elapsed booking of item id={item_id}")]
    CommentForbidden { user_id: i64, item_id: i64 },

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
