mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgMemoStore;

use crate::error::Result;
use crate::validate::MemoFields;

#[async_trait::async_trait]
pub trait MemoStore: Send + Sync {
    /// Persists a new row with `created = updated = now` and a fresh identifier.
    async fn insert(&self, fields: &MemoFields, now: chrono::DateTime<chrono::Utc>)
        -> Result<common::Memo>;

    async fn fetch(&self, id: i64) -> Result<Option<common::Memo>>;

    async fn contains(&self, id: i64) -> Result<bool>;

    /// Overwrites the fields and `updated`; returns whether a row was affected.
    async fn update(
        &self,
        id: i64,
        fields: &MemoFields,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<bool>;

    /// Returns whether a row was affected.
    async fn delete(&self, id: i64) -> Result<bool>;

    async fn count(&self) -> Result<i64>;

    /// Up to `limit` rows starting at `offset`, ordered by identifier.
    async fn fetch_range(&self, offset: i64, limit: i64) -> Result<Vec<common::Memo>>;
}
