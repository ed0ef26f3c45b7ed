//! Item repository interface

use async_trait::async_trait;

use super::model::Item;
use crate::domain::DomainResult;

/// Item resolution consumed from the item collaborator.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Resolve an item by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Item>>;

    /// All items listed by a user (per-owner booking summaries)
    async fn find_all_by_owner(&self, owner_id: i64) -> DomainResult<Vec<Item>>;

    /// Insert an item; the returned copy carries the assigned id.
    /// Listing management itself lives outside the booking core; this
    /// exists so the service can be exercised end-to-end.
    async fn save(&self, item: Item) -> DomainResult<Item>;
}
