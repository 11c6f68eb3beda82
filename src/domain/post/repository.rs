// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{PostCategory, PostId, PostSlug};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Criteria for listing posts, ordered by `updated_at`.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub author_id: Option<UserId>,
    pub category: Option<PostCategory>,
    pub slug: Option<PostSlug>,
    pub post_id: Option<PostId>,
    pub search_term: Option<String>,
    pub direction: SortDirection,
    pub offset: u32,
    pub limit: u32,
}

/// Write side of the post store.
///
/// `insert` and `update` must report a slug unique-index violation as
/// `DomainError::DuplicateSlug` so callers can re-allocate and retry.
#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    /// Whether a post other than `excluding` already owns `slug`.
    async fn exists_by_slug(&self, slug: &PostSlug, excluding: Option<PostId>)
    -> DomainResult<bool>;
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;
    async fn list(&self, filter: &PostFilter) -> DomainResult<Vec<Post>>;
    async fn count_all(&self) -> DomainResult<u64>;
    async fn count_created_since(&self, since: DateTime<Utc>) -> DomainResult<u64>;
}
