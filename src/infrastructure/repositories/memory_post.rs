// src/infrastructure/repositories/memory_post.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostFilter, PostId, PostReadRepository, PostSlug, PostUpdate,
    PostWriteRepository, SortDirection,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local post store with the same unique constraints as the
/// Postgres schema (title and slug). Backs `STORAGE_BACKEND=memory` and tests.
#[derive(Default)]
pub struct InMemoryPostRepository {
    inner: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    posts: BTreeMap<i64, Post>,
}

impl MemoryState {
    fn check_unique(&self, title: &str, slug: &str, excluding: Option<i64>) -> DomainResult<()> {
        let others = self
            .posts
            .values()
            .filter(|post| Some(i64::from(post.id)) != excluding);
        for post in others {
            if post.slug.as_str() == slug {
                return Err(DomainError::DuplicateSlug("slug already exists".into()));
            }
            if post.title.as_str() == title {
                return Err(DomainError::Conflict(
                    "a post with this title already exists".into(),
                ));
            }
        }
        Ok(())
    }
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_filter(post: &Post, filter: &PostFilter) -> bool {
    if filter.author_id.is_some_and(|id| id != post.author_id) {
        return false;
    }
    if filter.post_id.is_some_and(|id| id != post.id) {
        return false;
    }
    if filter
        .category
        .as_ref()
        .is_some_and(|category| category != &post.category)
    {
        return false;
    }
    if filter.slug.as_ref().is_some_and(|slug| slug != &post.slug) {
        return false;
    }
    if let Some(term) = &filter.search_term {
        let term = term.to_lowercase();
        return post.title.as_str().to_lowercase().contains(&term)
            || post.content.as_str().to_lowercase().contains(&term);
    }
    true
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.inner.write().await;
        state.check_unique(post.title.as_str(), post.slug.as_str(), None)?;

        state.last_id += 1;
        let last_id = state.last_id;
        let id = PostId::new(last_id)?;
        let created = Post::from_new(id, post);
        state.posts.insert(last_id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut state = self.inner.write().await;
        let key = i64::from(update.id);
        let current = state
            .posts
            .get(&key)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        let mut next = current;
        next.apply(update);
        state.check_unique(next.title.as_str(), next.slug.as_str(), Some(key))?;

        state.posts.insert(key, next.clone());
        Ok(next)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut state = self.inner.write().await;
        state
            .posts
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepository {
    async fn exists_by_slug(
        &self,
        slug: &PostSlug,
        excluding: Option<PostId>,
    ) -> DomainResult<bool> {
        let state = self.inner.read().await;
        Ok(state
            .posts
            .values()
            .any(|post| &post.slug == slug && Some(post.id) != excluding))
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let state = self.inner.read().await;
        Ok(state.posts.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let state = self.inner.read().await;
        Ok(state.posts.values().find(|post| &post.slug == slug).cloned())
    }

    async fn list(&self, filter: &PostFilter) -> DomainResult<Vec<Post>> {
        let state = self.inner.read().await;
        let mut posts: Vec<Post> = state
            .posts
            .values()
            .filter(|post| matches_filter(post, filter))
            .cloned()
            .collect();

        posts.sort_by_key(|post| (post.updated_at, post.id));
        if filter.direction == SortDirection::Desc {
            posts.reverse();
        }

        Ok(posts
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn count_all(&self) -> DomainResult<u64> {
        let state = self.inner.read().await;
        Ok(state.posts.len() as u64)
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> DomainResult<u64> {
        let state = self.inner.read().await;
        Ok(state
            .posts
            .values()
            .filter(|post| post.created_at >= since)
            .count() as u64)
    }
}
