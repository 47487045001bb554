/// A persisted memo. Timestamps travel as epoch milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Memo {
    pub title: String,
    pub author: String,
    pub text: String,
    pub id: i64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created: chrono::DateTime<chrono::Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated: chrono::DateTime<chrono::Utc>,
}

/// Request body for create and update.
///
/// Every field is optional on the wire so that a missing field is reported by
/// name instead of as a generic deserialization failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct MemoPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_records: i64,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ErrorResponse {
    /// Transport status, e.g. `"404"`.
    pub code: String,
    pub title: String,
    pub link: String,
    pub detail: String,
}

/// Uniform response envelope: carries a result or an error, never both.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ServiceResponse<R> {
    result: Option<R>,
    pagination: Option<Pagination>,
    errors: Option<ErrorResponse>,
}

impl<R> ServiceResponse<R> {
    pub fn single(result: R) -> Self {
        Self {
            result: Some(result),
            pagination: None,
            errors: None,
        }
    }

    pub fn page(result: R, pagination: Pagination) -> Self {
        Self {
            result: Some(result),
            pagination: Some(pagination),
            errors: None,
        }
    }

    pub fn error(error: ErrorResponse) -> Self {
        Self {
            result: None,
            pagination: None,
            errors: Some(error),
        }
    }

    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn errors(&self) -> Option<&ErrorResponse> {
        self.errors.as_ref()
    }
}
