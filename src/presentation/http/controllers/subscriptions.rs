// src/presentation/http/controllers/subscriptions.rs
use super::PageParams;
use crate::application::{
    commands::subscriptions::SubscribeCommand,
    dto::{CategoryDto, Page},
    queries::categories::ListCategoriesQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, FormBody, QueryParams};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, response::Redirect};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubscribeForm {
    /// Category to subscribe to.
    pub id_cat: i64,
}

#[utoipa::path(
    get,
    path = "/subscriptions",
    params(PageParams),
    responses(
        (status = 200, description = "Categories by name, four per page.", body = Page<CategoryDto>),
        (status = 400, description = "Invalid page number.", body = ErrorResponse),
        (status = 404, description = "Page out of range.", body = ErrorResponse)
    ),
    tag = "Subscriptions"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<PageParams>,
) -> HttpResult<Json<Page<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories(ListCategoriesQuery { page: params.page })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/subscriptions",
    request_body(content = SubscribeForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Subscribed; redirects to the category list."),
        (status = 400, description = "Missing or non-numeric id_cat.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "No such category.", body = ErrorResponse)
    ),
    tag = "Subscriptions"
)]
pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    FormBody(form): FormBody<SubscribeForm>,
) -> HttpResult<Redirect> {
    state
        .services
        .subscription_commands
        .subscribe(&user, SubscribeCommand { category_id: form.id_cat })
        .await
        .into_http()?;

    Ok(Redirect::to("/subscriptions"))
}
