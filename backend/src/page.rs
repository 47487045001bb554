//! Pagination over the memo table.
//!
//! Pages are 1-based. A page that selects no rows is reported as
//! [`MemoError::NotFound`] rather than an empty success, whether the table is
//! empty or the page lies past the last record.

use crate::error::{MemoError, Result};
use crate::store::MemoStore;
use crate::validate::validate_page_params;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// One page of memos plus neighbouring page numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageResult {
    pub memos: Vec<common::Memo>,
    pub total_records: i64,
    pub total_pages: i64,
    pub prev: Option<i64>,
    pub next: Option<i64>,
}

pub fn compute_offset(page: i64, limit: i64) -> Result<i64> {
    validate_page_params(page, limit)?;
    (page - 1).checked_mul(limit).ok_or_else(|| {
        MemoError::InvalidArgument(format!(
            "Page {} with limit {} is out of range",
            page, limit
        ))
    })
}

pub fn derive_prev_next(page: i64, total_records: i64, limit: i64) -> (Option<i64>, Option<i64>) {
    let prev = (page > 1).then(|| page - 1);
    let next = match page.checked_mul(limit) {
        Some(seen) if seen < total_records => Some(page + 1),
        _ => None,
    };
    (prev, next)
}

pub fn total_pages(total_records: i64, limit: i64) -> i64 {
    if limit < 1 || total_records <= 0 {
        return 0;
    }
    total_records / limit + i64::from(total_records % limit != 0)
}

pub async fn fetch_page(store: &dyn MemoStore, page: i64, limit: i64) -> Result<PageResult> {
    let offset = compute_offset(page, limit)?;
    let memos = store.fetch_range(offset, limit).await?;
    if memos.is_empty() {
        return Err(MemoError::NotFound(
            "No memos found for requested page parameters.".to_string(),
        ));
    }

    let total_records = store.count().await?;
    let (prev, next) = derive_prev_next(page, total_records, limit);
    Ok(PageResult {
        memos,
        total_records,
        total_pages: total_pages(total_records, limit),
        prev,
        next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::MemoryStore;
    use crate::validate::MemoFields;

    async fn seeded(n: usize) -> MemoryStore {
        let store = MemoryStore::new();
        for i in 0..n {
            let fields = MemoFields {
                title: format!("title{}", i + 1),
                author: "author".to_string(),
                text: "text".to_string(),
            };
            store.insert(&fields, chrono::Utc::now()).await.unwrap();
        }
        store
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(compute_offset(1, 10).unwrap(), 0);
        assert_eq!(compute_offset(3, 7).unwrap(), 14);
        assert_eq!(compute_offset(0, 10).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(compute_offset(1, 0).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            compute_offset(i64::MAX, 2).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn neighbours_at_the_edges() {
        assert_eq!(derive_prev_next(1, 20, 10), (None, Some(2)));
        assert_eq!(derive_prev_next(2, 20, 10), (Some(1), None));
        assert_eq!(derive_prev_next(2, 21, 10), (Some(1), Some(3)));
        assert_eq!(derive_prev_next(1, 0, 10), (None, None));
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(2, i64::MAX), 1);
        assert_eq!(total_pages(i64::MAX, i64::MAX), 1);
    }

    #[actix_web::test]
    async fn fetches_middle_page() {
        let store = seeded(25).await;
        let page = fetch_page(&store, 2, 10).await.unwrap();
        assert_eq!(page.memos.len(), 10);
        assert_eq!(page.memos[0].title, "title11");
        assert_eq!(page.total_records, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!((page.prev, page.next), (Some(1), Some(3)));
    }

    #[actix_web::test]
    async fn last_page_is_partial() {
        let store = seeded(25).await;
        let page = fetch_page(&store, 3, 10).await.unwrap();
        assert_eq!(page.memos.len(), 5);
        assert_eq!((page.prev, page.next), (Some(2), None));
    }

    #[actix_web::test]
    async fn huge_limit_fits_everything_on_one_page() {
        let store = seeded(2).await;
        let page = fetch_page(&store, 1, i64::MAX).await.unwrap();
        assert_eq!(page.memos.len(), 2);
        assert_eq!(page.total_pages, 1);
        assert_eq!((page.prev, page.next), (None, None));
    }

    #[actix_web::test]
    async fn beyond_last_page_is_not_found() {
        let store = seeded(20).await;
        let err = fetch_page(&store, 5, 10).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[actix_web::test]
    async fn empty_store_is_not_found() {
        let store = MemoryStore::new();
        let err = fetch_page(&store, 1, 10).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
