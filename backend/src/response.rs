use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

use crate::error::{ErrorKind, MemoError};
use crate::page::PageResult;

const STORAGE_DETAIL: &str = "Unknown Exception. Please try again later.";

/// Absolute URL of the request without its query string.
pub fn request_url(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}{}", info.scheme(), info.host(), req.path())
}

fn page_link(base: &str, page: i64, limit: i64) -> String {
    format!("{}?page={}&limit={}", base, page, limit)
}

pub fn pagination(base: &str, page: &PageResult, limit: i64) -> common::Pagination {
    common::Pagination {
        total_records: page.total_records,
        prev: page.prev.map(|p| page_link(base, p, limit)),
        next: page.next.map(|n| page_link(base, n, limit)),
    }
}

fn status_and_title(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation | ErrorKind::InvalidArgument => {
            (StatusCode::BAD_REQUEST, "Invalid Request Data. Please verify.")
        }
        ErrorKind::Conflict => (StatusCode::BAD_REQUEST, "Invalid Data."),
        ErrorKind::NotFound => (
            StatusCode::NOT_FOUND,
            "No entry exists for that given request.",
        ),
        ErrorKind::Storage => (StatusCode::INTERNAL_SERVER_ERROR, "Unexpected Exception."),
    }
}

/// A domain error bound to the request it failed.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    error: MemoError,
    link: String,
}

impl ApiError {
    pub fn new(error: MemoError, req: &HttpRequest) -> Self {
        Self {
            error,
            link: request_url(req),
        }
    }

    pub fn at(req: &HttpRequest) -> impl FnOnce(MemoError) -> ApiError + '_ {
        move |error| ApiError::new(error, req)
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    pub fn envelope(&self) -> common::ErrorResponse {
        let (status, title) = status_and_title(self.error.kind());
        let detail = match self.error.kind() {
            ErrorKind::Storage => STORAGE_DETAIL.to_string(),
            _ => self.error.to_string(),
        };
        common::ErrorResponse {
            code: status.as_u16().to_string(),
            title: title.to_string(),
            link: self.link.clone(),
            detail,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_and_title(self.error.kind()).0
    }

    fn error_response(&self) -> HttpResponse {
        if self.kind() == ErrorKind::Storage {
            log::error!("{} failed: {}", self.link, self.error);
        }
        HttpResponse::build(self.status_code())
            .json(common::ServiceResponse::<()>::error(self.envelope()))
    }
}
