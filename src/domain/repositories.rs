//! Repository provider interface

use crate::domain::booking::BookingRepository;
use crate::domain::item::ItemRepository;
use crate::domain::user::UserRepository;

/// Unified accessor for the per-aggregate repositories.
///
/// The service layer depends on this seam only; implementations exist for
/// SeaORM (SQLite) and an in-memory store.
pub trait RepositoryProvider: Send + Sync {
    fn bookings(&self) -> &dyn BookingRepository;

    fn items(&self) -> &dyn ItemRepository;

    fn users(&self) -> &dyn UserRepository;
}
