use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{MemoError, Result};
use crate::validate::MemoFields;

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, common::Memo>,
}

/// Process-local store. Identifiers increase monotonically and are never
/// handed out twice, even after deletion.
#[derive(Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> Result<MutexGuard<'_, Table>> {
        self.table
            .lock()
            .map_err(|_| MemoError::Storage("memory store lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl super::MemoStore for MemoryStore {
    async fn insert(
        &self,
        fields: &MemoFields,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<common::Memo> {
        let mut table = self.table()?;
        table.last_id += 1;
        let memo = common::Memo {
            title: fields.title.clone(),
            author: fields.author.clone(),
            text: fields.text.clone(),
            id: table.last_id,
            created: now,
            updated: now,
        };
        table.rows.insert(memo.id, memo.clone());
        Ok(memo)
    }

    async fn fetch(&self, id: i64) -> Result<Option<common::Memo>> {
        Ok(self.table()?.rows.get(&id).cloned())
    }

    async fn contains(&self, id: i64) -> Result<bool> {
        Ok(self.table()?.rows.contains_key(&id))
    }

    async fn update(
        &self,
        id: i64,
        fields: &MemoFields,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<bool> {
        let mut table = self.table()?;
        match table.rows.get_mut(&id) {
            Some(memo) => {
                memo.title = fields.title.clone();
                memo.author = fields.author.clone();
                memo.text = fields.text.clone();
                memo.updated = now;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.table()?.rows.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.table()?.rows.len() as i64)
    }

    async fn fetch_range(&self, offset: i64, limit: i64) -> Result<Vec<common::Memo>> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self
            .table()?
            .rows
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}
