use crate::page::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::response::{self, ApiError};
use crate::validate;

#[derive(Debug, serde::Deserialize)]
pub(crate) struct PageQuery {
    page: Option<i64>,
    limit: Option<i64>,
}

pub(crate) async fn index(
    app_state: actix_web::web::Data<crate::AppState>,
    query: actix_web::web::Query<PageQuery>,
    req: actix_web::HttpRequest,
) -> Result<actix_web::HttpResponse, ApiError> {
    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    validate::validate_page_params(page, limit).map_err(ApiError::at(&req))?;

    let result = app_state
        .manager
        .list_page(page, limit)
        .await
        .map_err(ApiError::at(&req))?;
    let pagination = response::pagination(&response::request_url(&req), &result, limit);
    Ok(actix_web::HttpResponse::Ok().json(common::ServiceResponse::page(result.memos, pagination)))
}

pub(crate) async fn get(
    app_state: actix_web::web::Data<crate::AppState>,
    id: actix_web::web::Path<i64>,
    req: actix_web::HttpRequest,
) -> Result<actix_web::HttpResponse, ApiError> {
    let memo = app_state
        .manager
        .get(id.into_inner())
        .await
        .map_err(ApiError::at(&req))?;
    Ok(actix_web::HttpResponse::Ok().json(common::ServiceResponse::single(memo)))
}

pub(crate) async fn create(
    app_state: actix_web::web::Data<crate::AppState>,
    payload: actix_web::web::Json<common::MemoPayload>,
    req: actix_web::HttpRequest,
) -> Result<actix_web::HttpResponse, ApiError> {
    let fields = validate::validate_payload(&payload).map_err(ApiError::at(&req))?;
    let memo = app_state
        .manager
        .create(&fields)
        .await
        .map_err(ApiError::at(&req))?;
    let location = format!("{}/{}", response::request_url(&req), memo.id);
    Ok(actix_web::HttpResponse::Created()
        .insert_header((actix_web::http::header::LOCATION, location))
        .json(common::ServiceResponse::single(memo)))
}

pub(crate) async fn update(
    app_state: actix_web::web::Data<crate::AppState>,
    id: actix_web::web::Path<i64>,
    payload: actix_web::web::Json<common::MemoPayload>,
    req: actix_web::HttpRequest,
) -> Result<actix_web::HttpResponse, ApiError> {
    let id = id.into_inner();
    let payload = payload.into_inner();
    let fields = validate::validate_payload(&payload).map_err(ApiError::at(&req))?;
    validate::check_identity(id, &payload).map_err(ApiError::at(&req))?;

    app_state
        .manager
        .update(id, &fields)
        .await
        .map_err(ApiError::at(&req))?;
    Ok(actix_web::HttpResponse::NoContent().finish())
}

pub(crate) async fn delete(
    app_state: actix_web::web::Data<crate::AppState>,
    id: actix_web::web::Path<i64>,
    req: actix_web::HttpRequest,
) -> Result<actix_web::HttpResponse, ApiError> {
    app_state
        .manager
        .delete(id.into_inner())
        .await
        .map_err(ApiError::at(&req))?;
    Ok(actix_web::HttpResponse::NoContent().finish())
}

pub(crate) async fn hello() -> &'static str {
    "Hello World!"
}
