use std::sync::Arc;

use chrono::SubsecRound;

use crate::error::{MemoError, Result};
use crate::page::{self, PageResult};
use crate::store::MemoStore;
use crate::validate::MemoFields;

/// Wall clock truncated to what the wire format can carry.
fn now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now().trunc_subsecs(3)
}

#[derive(Clone)]
pub struct MemoManager {
    store: Arc<dyn MemoStore>,
}

impl MemoManager {
    pub fn new(store: Arc<dyn MemoStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, fields: &MemoFields) -> Result<common::Memo> {
        let memo = self.store.insert(fields, now()).await.map_err(|err| {
            log::error!("failed to create memo: {}", err);
            err
        })?;
        log::info!("created memo {}", memo.id);
        Ok(memo)
    }

    pub async fn get(&self, id: i64) -> Result<common::Memo> {
        match self.store.fetch(id).await? {
            Some(memo) => Ok(memo),
            None => {
                log::debug!("memo {} not found", id);
                Err(MemoError::NotFound(format!(
                    "Memo with Id : {} does not exists.",
                    id
                )))
            }
        }
    }

    /// Storage failures read as "absent".
    pub async fn exists(&self, id: i64) -> bool {
        match self.store.contains(id).await {
            Ok(found) => found,
            Err(err) => {
                log::warn!("existence check for memo {} failed: {}", id, err);
                false
            }
        }
    }

    /// `created` is left untouched.
    pub async fn update(&self, id: i64, fields: &MemoFields) -> Result<()> {
        if !self.store.contains(id).await? {
            return Err(MemoError::NotFound(format!(
                "Memo {} does not exists for update.",
                fields.title
            )));
        }
        if !self.store.update(id, fields, now()).await? {
            return Err(MemoError::NotFound(format!(
                "Updated Memo {} does not exists.",
                fields.title
            )));
        }
        log::info!("updated memo {}", id);
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.store.delete(id).await? {
            log::debug!("memo {} not found for delete", id);
            return Err(MemoError::NotFound(format!(
                "Memo with Id : {} does not exists.",
                id
            )));
        }
        log::info!("deleted memo {}", id);
        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        self.store.count().await
    }

    pub async fn list_page(&self, page: i64, limit: i64) -> Result<PageResult> {
        page::fetch_page(self.store.as_ref(), page, limit).await
    }
}
