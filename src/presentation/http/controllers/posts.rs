// src/presentation/http/controllers/posts.rs
use super::{PageParams, default_page};
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{PostDto, PostListingDto},
    queries::posts::{GetPostByIdQuery, ListPostsQuery, SearchPostsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{
    Authenticated, JsonBody, MaybeAuthenticated, PathParam, QueryParams,
};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, response::Redirect};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    #[serde(default = "default_page")]
    pub page: u32,
    /// Case-insensitive substring of the header.
    pub header: Option<String>,
    /// Author id.
    pub author: Option<String>,
    /// `YYYY-MM-DD`; posts created on or after that day (UTC).
    pub created_after: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub header: String,
    pub text: String,
    #[serde(default)]
    pub categories: Vec<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub header: Option<String>,
    pub text: Option<String>,
    /// Replaces the post's categories when present.
    pub categories: Option<Vec<i64>>,
}

#[utoipa::path(
    get,
    path = "/news",
    params(PageParams),
    responses(
        (status = 200, description = "Newest posts first, four per page.", body = PostListingDto),
        (status = 400, description = "Invalid page number.", body = ErrorResponse),
        (status = 404, description = "Page out of range.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    QueryParams(params): QueryParams<PageParams>,
) -> HttpResult<Json<PostListingDto>> {
    state
        .services
        .post_queries
        .list_posts(actor.0.as_ref(), ListPostsQuery { page: params.page })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/news/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Filtered listing with the applied filter echoed.", body = PostListingDto),
        (status = 400, description = "Malformed filter value.", body = ErrorResponse),
        (status = 404, description = "Page out of range.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn search_posts(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    QueryParams(params): QueryParams<SearchParams>,
) -> HttpResult<Json<PostListingDto>> {
    let query = SearchPostsQuery {
        page: params.page,
        header: params.header,
        author: params.author,
        created_after: params.created_after,
    };

    state
        .services
        .post_queries
        .search_posts(actor.0.as_ref(), query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/news/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post.", body = PostDto),
        (status = 400, description = "Id is not an integer.", body = ErrorResponse),
        (status = 404, description = "No such post.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_id(GetPostByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/news",
    request_body = CreatePostRequest,
    responses(
        (status = 303, description = "Created; redirects to the listing."),
        (status = 400, description = "Malformed body or invalid header or text.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Missing posts:add or posts:change.", body = ErrorResponse),
        (status = 404, description = "Unknown category or no author profile.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<CreatePostRequest>,
) -> HttpResult<Redirect> {
    let command = CreatePostCommand {
        header: payload.header,
        text: payload.text,
        categories: payload.categories,
    };

    state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()?;

    Ok(Redirect::to("/news"))
}

#[utoipa::path(
    put,
    path = "/news/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 303, description = "Updated; redirects to the post."),
        (status = 400, description = "Malformed body or invalid header or text.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Missing posts:change.", body = ErrorResponse),
        (status = 404, description = "No such post or category.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<UpdatePostRequest>,
) -> HttpResult<Redirect> {
    let command = UpdatePostCommand {
        id,
        header: payload.header,
        text: payload.text,
        categories: payload.categories,
    };

    let post = state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()?;

    Ok(Redirect::to(&format!("/news/{}", post.id)))
}

#[utoipa::path(
    delete,
    path = "/news/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 303, description = "Deleted; redirects to the listing."),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Missing posts:delete.", body = ErrorResponse),
        (status = 404, description = "No such post.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Redirect> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Redirect::to("/news"))
}
