//! In-memory repository provider for development and testing

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::domain::booking::{matches, Booking, BookingRepository, BookingState};
use crate::domain::item::{Item, ItemRepository};
use crate::domain::user::{User, UserRepository};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::shared::Pagination;

/// In-memory booking store. Filtering and ordering mirror the SQL-backed
/// store: state filters evaluate against the caller's `now`, listings are
/// sorted by `start` descending, then offset/limit applied.
///
/// Holds a handle to the item map so owner-scoped listings can resolve
/// ownership the way the SQL store joins the items table.
pub struct InMemoryBookingRepository {
    bookings: DashMap<i64, Booking>,
    items: Arc<DashMap<i64, Item>>,
    counter: AtomicI64,
}

impl InMemoryBookingRepository {
    fn new(items: Arc<DashMap<i64, Item>>) -> Self {
        Self {
            bookings: DashMap::new(),
            items,
            counter: AtomicI64::new(1),
        }
    }

    fn listing<F>(
        &self,
        belongs: F,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> Vec<Booking>
    where
        F: Fn(&Booking) -> bool,
    {
        let mut found: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|b| belongs(b.value()) && matches(b.value(), state, now))
            .map(|b| b.value().clone())
            .collect();
        found.sort_by(|a, b| b.start.cmp(&a.start));
        found
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Booking>> {
        Ok(self.bookings.get(&id).map(|b| b.clone()))
    }

    async fn find_all_by_booker(
        &self,
        booker_id: i64,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> DomainResult<Vec<Booking>> {
        Ok(self.listing(|b| b.booker_id == booker_id, state, now, page))
    }

    async fn find_all_by_item_owner(
        &self,
        owner_id: i64,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> DomainResult<Vec<Booking>> {
        let belongs = |b: &Booking| {
            self.items
                .get(&b.item_id)
                .map(|i| i.owner_id == owner_id)
                .unwrap_or(false)
        };
        Ok(self.listing(belongs, state, now, page))
    }

    async fn find_all_by_item(&self, item_id: i64) -> DomainResult<Vec<Booking>> {
        Ok(self
            .bookings
            .iter()
            .filter(|b| b.item_id == item_id)
            .map(|b| b.clone())
            .collect())
    }

    async fn save(&self, mut booking: Booking) -> DomainResult<Booking> {
        booking.id = self.counter.fetch_add(1, Ordering::SeqCst);
        self.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> DomainResult<Booking> {
        if !self.bookings.contains_key(&booking.id) {
            return Err(DomainError::not_found("Booking", "id", booking.id));
        }
        self.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        self.bookings
            .remove(&id)
            .ok_or_else(|| DomainError::not_found("Booking", "id", id))?;
        Ok(())
    }
}

pub struct InMemoryItemRepository {
    items: Arc<DashMap<i64, Item>>,
    counter: AtomicI64,
}

impl InMemoryItemRepository {
    fn new(items: Arc<DashMap<i64, Item>>) -> Self {
        Self {
            items,
            counter: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Item>> {
        Ok(self.items.get(&id).map(|i| i.clone()))
    }

    async fn find_all_by_owner(&self, owner_id: i64) -> DomainResult<Vec<Item>> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .filter(|i| i.owner_id == owner_id)
            .map(|i| i.clone())
            .collect();
        items.sort_by_key(|i| i.id);
        Ok(items)
    }

    async fn save(&self, mut item: Item) -> DomainResult<Item> {
        item.id = self.counter.fetch_add(1, Ordering::SeqCst);
        self.items.insert(item.id, item.clone());
        Ok(item)
    }
}

pub struct InMemoryUserRepository {
    users: DashMap<i64, User>,
    counter: AtomicI64,
}

impl InMemoryUserRepository {
    fn new() -> Self {
        Self {
            users: DashMap::new(),
            counter: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn save(&self, mut user: User) -> DomainResult<User> {
        user.id = self.counter.fetch_add(1, Ordering::SeqCst);
        self.users.insert(user.id, user.clone());
        Ok(user)
    }
}

/// In-memory provider tying the three stores together.
pub struct InMemoryRepositoryProvider {
    bookings: InMemoryBookingRepository,
    items: InMemoryItemRepository,
    users: InMemoryUserRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        let item_map: Arc<DashMap<i64, Item>> = Arc::new(DashMap::new());
        Self {
            bookings: InMemoryBookingRepository::new(item_map.clone()),
            items: InMemoryItemRepository::new(item_map),
            users: InMemoryUserRepository::new(),
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn items(&self) -> &dyn ItemRepository {
        &self.items
    }

    fn users(&self) -> &dyn UserRepository {
        &self.users
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    async fn seed(provider: &InMemoryRepositoryProvider, item_id: i64, start_h: i64) -> Booking {
        let now = Utc::now();
        let b = Booking::new(
            now + Duration::hours(start_h),
            now + Duration::hours(start_h + 2),
            item_id,
            7,
        );
        provider.bookings().save(b).await.unwrap()
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let p = InMemoryRepositoryProvider::new();
        let a = seed(&p, 1, 1).await;
        let b = seed(&p, 1, 2).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn update_of_missing_booking_fails() {
        let p = InMemoryRepositoryProvider::new();
        let mut b = seed(&p, 1, 1).await;
        p.bookings().delete_by_id(b.id).await.unwrap();
        b.status = crate::domain::BookingStatus::Approved;
        let err = p.bookings().update(b).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn booker_listing_orders_and_paginates() {
        let p = InMemoryRepositoryProvider::new();
        let early = seed(&p, 1, 1).await;
        let late = seed(&p, 1, 10).await;
        let mid = seed(&p, 2, 5).await;

        let now = Utc::now();
        let all = p
            .bookings()
            .find_all_by_booker(7, BookingState::All, now, Pagination::default())
            .await
            .unwrap();
        let ids: Vec<i64> = all.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![late.id, mid.id, early.id]);

        let second_page = p
            .bookings()
            .find_all_by_booker(7, BookingState::All, now, Pagination::new(2, 2))
            .await
            .unwrap();
        assert_eq!(second_page.len(), 1);
        assert_eq!(second_page[0].id, early.id);
    }

    #[tokio::test]
    async fn owner_listing_scopes_by_item_ownership() {
        let p = InMemoryRepositoryProvider::new();
        let mine = p
            .items()
            .save(Item {
                id: 0,
                owner_id: 42,
                name: "drill".to_string(),
                description: None,
                available: true,
            })
            .await
            .unwrap();
        let theirs = p
            .items()
            .save(Item {
                id: 0,
                owner_id: 43,
                name: "saw".to_string(),
                description: None,
                available: true,
            })
            .await
            .unwrap();

        let visible = seed(&p, mine.id, 1).await;
        seed(&p, theirs.id, 2).await;

        let listed = p
            .bookings()
            .find_all_by_item_owner(42, BookingState::All, Utc::now(), Pagination::default())
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, visible.id);
    }
}
