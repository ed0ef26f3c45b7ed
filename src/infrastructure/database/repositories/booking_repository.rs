//! SeaORM implementation of BookingRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait,
    NotSet, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::domain::booking::{Booking, BookingRepository, BookingState, BookingStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{booking, item};
use crate::shared::Pagination;

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn owned_item_ids(&self, owner_id: i64) -> DomainResult<Vec<i64>> {
        let items = item::Entity::find()
            .filter(item::Column::OwnerId.eq(owner_id))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(items.into_iter().map(|i| i.id).collect())
    }

    async fn listing(
        &self,
        scope: Condition,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(scope)
            .filter(state_condition(state, now))
            .order_by_desc(booking::Column::StartDate)
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: booking::Model) -> DomainResult<Booking> {
    let status = BookingStatus::parse(&m.status)
        .ok_or_else(|| DomainError::Database(format!("unknown booking status: {}", m.status)))?;
    Ok(Booking {
        id: m.id,
        start: m.start_date,
        end: m.end_date,
        status,
        item_id: m.item_id,
        booker_id: m.booker_id,
        created_at: m.created_at,
    })
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

/// SQL predicate behind each listing token, evaluated against the
/// caller-supplied `now` so a whole request sees one clock reading.
fn state_condition(state: BookingState, now: DateTime<Utc>) -> Condition {
    match state {
        BookingState::All => Condition::all(),
        BookingState::Current => Condition::all()
            .add(booking::Column::StartDate.lte(now))
            .add(booking::Column::EndDate.gt(now)),
        BookingState::Past => Condition::all().add(booking::Column::EndDate.lte(now)),
        BookingState::Future => Condition::all().add(booking::Column::StartDate.gt(now)),
        BookingState::Waiting => {
            Condition::all().add(booking::Column::Status.eq(BookingStatus::Waiting.as_str()))
        }
        BookingState::Rejected => {
            Condition::all().add(booking::Column::Status.eq(BookingStatus::Rejected.as_str()))
        }
    }
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Booking>> {
        let model = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_all_by_booker(
        &self,
        booker_id: i64,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> DomainResult<Vec<Booking>> {
        let scope = Condition::all().add(booking::Column::BookerId.eq(booker_id));
        self.listing(scope, state, now, page).await
    }

    async fn find_all_by_item_owner(
        &self,
        owner_id: i64,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> DomainResult<Vec<Booking>> {
        let item_ids = self.owned_item_ids(owner_id).await?;
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }
        let scope = Condition::all().add(booking::Column::ItemId.is_in(item_ids));
        self.listing(scope, state, now, page).await
    }

    async fn find_all_by_item(&self, item_id: i64) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(booking::Column::ItemId.eq(item_id))
            .order_by_desc(booking::Column::StartDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn save(&self, b: Booking) -> DomainResult<Booking> {
        debug!("Saving booking for item {}", b.item_id);

        let model = booking::ActiveModel {
            id: NotSet,
            start_date: Set(b.start),
            end_date: Set(b.end),
            status: Set(b.status.as_str().to_string()),
            item_id: Set(b.item_id),
            booker_id: Set(b.booker_id),
            created_at: Set(b.created_at),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        model_to_domain(inserted)
    }

    async fn update(&self, b: Booking) -> DomainResult<Booking> {
        debug!("Updating booking: {}", b.id);

        let existing = booking::Entity::find_by_id(b.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::not_found("Booking", "id", b.id));
        }

        let model = booking::ActiveModel {
            id: Set(b.id),
            start_date: Set(b.start),
            end_date: Set(b.end),
            status: Set(b.status.as_str().to_string()),
            item_id: Set(b.item_id),
            booker_id: Set(b.booker_id),
            created_at: Set(b.created_at),
        };
        let updated = model.update(&self.db).await.map_err(db_err)?;
        model_to_domain(updated)
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        debug!("Deleting booking: {}", id);

        let existing = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Booking", "id", id));
        };

        existing.delete(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
