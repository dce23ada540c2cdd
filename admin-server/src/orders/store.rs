//! Entity store contract for the order-update core

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use shared::models::{DeliveryPartner, OrderChangeSet, OrderDetail, StatusHistoryRecord};

use crate::db;

/// Store-level failure
///
/// Wraps the underlying driver error as text so test doubles can construct
/// it without a live database.
#[derive(Debug, Clone, Error)]
#[error("store error: {0}")]
pub struct StoreError(pub String);

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError(e.to_string())
    }
}

/// Narrow persistence contract consumed by the order-update core
///
/// The hosted database owns everything else (constraints, cascade deletes,
/// row-level security); the core only depends on these four operations and
/// their success/failure signals.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Joined snapshot: order + customer profile + items with product info
    async fn find_detailed(&self, order_id: &str) -> Result<Option<OrderDetail>, StoreError>;

    /// Persist a normalized changeset against one order
    async fn update_order(
        &self,
        order_id: &str,
        changes: &OrderChangeSet,
    ) -> Result<(), StoreError>;

    /// Append one audit row
    async fn insert_status_history(&self, record: &StatusHistoryRecord)
    -> Result<(), StoreError>;

    /// Contact lookup for partner notifications
    async fn find_delivery_partner(&self, id: &str)
    -> Result<Option<DeliveryPartner>, StoreError>;
}

/// Production store over the PostgreSQL pool
#[derive(Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn find_detailed(&self, order_id: &str) -> Result<Option<OrderDetail>, StoreError> {
        db::orders::find_detailed(&self.pool, order_id)
            .await
            .map_err(Into::into)
    }

    async fn update_order(
        &self,
        order_id: &str,
        changes: &OrderChangeSet,
    ) -> Result<(), StoreError> {
        db::orders::update(&self.pool, order_id, changes)
            .await
            .map_err(Into::into)
    }

    async fn insert_status_history(
        &self,
        record: &StatusHistoryRecord,
    ) -> Result<(), StoreError> {
        db::status_history::insert(&self.pool, record)
            .await
            .map_err(Into::into)
    }

    async fn find_delivery_partner(
        &self,
        id: &str,
    ) -> Result<Option<DeliveryPartner>, StoreError> {
        db::delivery_partners::find_by_id(&self.pool, id)
            .await
            .map_err(Into::into)
    }
}
