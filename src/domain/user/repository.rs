//! User repository interface

use async_trait::async_trait;

use super::model::User;
use crate::domain::DomainResult;

/// Identity resolution consumed from the identity collaborator.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Resolve a user by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;

    /// Insert a user; the returned copy carries the assigned id.
    /// Profile management lives outside the booking core; this exists so
    /// the service can be exercised end-to-end.
    async fn save(&self, user: User) -> DomainResult<User>;
}
