// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{MediaItemDto, MediaPayload, PostDto, PostListDto},
    queries::posts::{GetPostByIdQuery, GetPostBySlugQuery, ListPostsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery, Authenticated};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Deserializer};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListPostsParams {
    /// Only posts written by this user.
    pub user_id: Option<i64>,
    pub category: Option<String>,
    pub slug: Option<String>,
    pub post_id: Option<i64>,
    /// Case-insensitive match against title and content.
    pub search_term: Option<String>,
    /// `asc` or `desc` by last update; defaults to `desc`.
    pub order: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub start_index: u32,
    /// Page size; 0, absent or unparsable means 8, capped at 100.
    #[serde(default, deserialize_with = "lenient_u32")]
    pub limit: u32,
}

/// Paging numbers are read leniently: leading digits count and anything
/// else yields 0, which the query layer treats as "use the default".
fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map_or(0, leading_u32))
}

fn leading_u32(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub category: Option<String>,
    /// Typed media list; takes precedence over `images`/`video`.
    pub media: Option<Vec<MediaItemDto>>,
    pub images: Option<Vec<String>>,
    pub video: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub media: Option<Vec<MediaItemDto>>,
    pub images: Option<Vec<String>>,
    pub video: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(ListPostsParams),
    responses(
        (status = 200, description = "Filtered page of posts with totals.", body = PostListDto),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ListPostsParams>,
) -> HttpResult<Json<PostListDto>> {
    let query = ListPostsQuery {
        user_id: params.user_id,
        category: params.category,
        slug: params.slug,
        post_id: params.post_id,
        search_term: params.search_term,
        order: params.order,
        start_index: params.start_index,
        limit: params.limit,
    };

    state
        .services
        .post_queries
        .list_posts(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/by-slug/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post found.", body = PostDto),
        (status = 404, description = "No post with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Posts"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post found.", body = PostDto),
        (status = 400, description = "Id is not an integer.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No post with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
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
    path = "/api/v1/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created with a freshly allocated slug.", body = PostDto),
        (status = 400, description = "Malformed body or invalid field value.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller may not create posts.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Title already used, or no free slug after retries.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiJson(payload): ApiJson<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
        category: payload.category,
        media: MediaPayload::from_request(payload.media, payload.images, payload.video),
    };

    let post = state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated.", body = PostDto),
        (status = 400, description = "Malformed body or invalid field value.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller may not edit this post.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Title already used, or no free slug after retries.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        content: payload.content,
        category: payload.category,
        media: MediaPayload::from_request(payload.media, payload.images, payload.video),
    };

    state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post deleted.", body = StatusResponse),
        (status = 400, description = "Id is not an integer.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller may not delete this post.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
