use crate::error::{MemoError, Result};
use crate::validate::MemoFields;

/// PostgreSQL store. Identifiers come from the `memos.id` sequence.
#[derive(Clone)]
pub struct PgMemoStore {
    pool: sqlx::Pool<sqlx::Postgres>,
}

impl PgMemoStore {
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Applies the bundled schema migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| MemoError::Storage(e.to_string()))
    }
}

#[async_trait::async_trait]
impl super::MemoStore for PgMemoStore {
    async fn insert(
        &self,
        fields: &MemoFields,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<common::Memo> {
        let created = sqlx::query_as::<_, common::Memo>(
            r#"
        INSERT INTO memos
            (title, author, text, created, updated)
        VALUES ($1, $2, $3, $4, $4)
        RETURNING id, title, author, text, created, updated
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.text)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        created.ok_or_else(|| MemoError::Storage("Memo did not get created.".to_string()))
    }

    async fn fetch(&self, id: i64) -> Result<Option<common::Memo>> {
        let memo = sqlx::query_as::<_, common::Memo>(
            r#"
        SELECT
            id, title, author, text, created, updated
        FROM memos
        WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(memo)
    }

    async fn contains(&self, id: i64) -> Result<bool> {
        let found = sqlx::query_scalar::<_, bool>(
            r#"
        SELECT EXISTS(SELECT 1 FROM memos WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(found)
    }

    async fn update(
        &self,
        id: i64,
        fields: &MemoFields,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
        UPDATE memos
        SET title = $2, author = $3, text = $4, updated = $5
        WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.text)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
        DELETE FROM memos
        WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM memos")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn fetch_range(&self, offset: i64, limit: i64) -> Result<Vec<common::Memo>> {
        let memos = sqlx::query_as::<_, common::Memo>(
            r#"
        SELECT
            id, title, author, text, created, updated
        FROM memos
        ORDER BY id
        LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(memos)
    }
}
