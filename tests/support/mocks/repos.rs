// tests/support/mocks/repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scribe_core::domain::errors::{DomainError, DomainResult};
use scribe_core::domain::post::{
    NewPost, Post, PostFilter, PostId, PostReadRepository, PostSlug, PostTitle, PostUpdate,
    PostWriteRepository,
};
use scribe_core::infrastructure::repositories::InMemoryPostRepository;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Wraps the in-memory store and, before selected inserts or updates, lets a
/// "concurrent writer" grab the slug that was just allocated. The real
/// write then fails on the unique slug, as it would against Postgres.
pub struct RacingPostStore {
    inner: Arc<InMemoryPostRepository>,
    competitors: Mutex<VecDeque<String>>,
    update_competitors: Mutex<VecDeque<String>>,
    insert_attempts: AtomicUsize,
    update_attempts: AtomicUsize,
}

impl RacingPostStore {
    pub fn new(inner: Arc<InMemoryPostRepository>) -> Self {
        Self {
            inner,
            competitors: Mutex::new(VecDeque::new()),
            update_competitors: Mutex::new(VecDeque::new()),
            insert_attempts: AtomicUsize::new(0),
            update_attempts: AtomicUsize::new(0),
        }
    }

    /// Queue a competing post title; one competitor wins per insert attempt.
    pub fn race_with(&self, title: &str) {
        self.competitors
            .lock()
            .expect("competitor queue poisoned")
            .push_back(title.to_string());
    }

    /// Same as [`race_with`](Self::race_with), but the competitor steals the
    /// slug of the next re-slugging update instead.
    pub fn race_update_with(&self, title: &str) {
        self.update_competitors
            .lock()
            .expect("competitor queue poisoned")
            .push_back(title.to_string());
    }

    pub fn insert_attempts(&self) -> usize {
        self.insert_attempts.load(Ordering::SeqCst)
    }

    pub fn update_attempts(&self) -> usize {
        self.update_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostWriteRepository for RacingPostStore {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        let competitor = self
            .competitors
            .lock()
            .expect("competitor queue poisoned")
            .pop_front();
        if let Some(title) = competitor {
            let rival = NewPost {
                title: PostTitle::new(title)?,
                ..post.clone()
            };
            self.inner.insert(rival).await?;
        }
        self.inner.insert(post).await
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        self.update_attempts.fetch_add(1, Ordering::SeqCst);
        let competitor = match &update.slug {
            Some(_) => self
                .update_competitors
                .lock()
                .expect("competitor queue poisoned")
                .pop_front(),
            None => None,
        };
        if let (Some(title), Some(slug)) = (competitor, update.slug.clone()) {
            let current = self
                .inner
                .find_by_id(update.id)
                .await?
                .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
            let rival = NewPost {
                title: PostTitle::new(title)?,
                slug,
                content: current.content,
                category: current.category,
                media: current.media,
                author_id: current.author_id,
                created_at: current.created_at,
                updated_at: current.updated_at,
            };
            self.inner.insert(rival).await?;
        }
        self.inner.update(update).await
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}

#[async_trait]
impl PostReadRepository for RacingPostStore {
    async fn exists_by_slug(&self, slug: &PostSlug, excluding: Option<PostId>) -> DomainResult<bool> {
        self.inner.exists_by_slug(slug, excluding).await
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        self.inner.find_by_slug(slug).await
    }

    async fn list(&self, filter: &PostFilter) -> DomainResult<Vec<Post>> {
        self.inner.list(filter).await
    }

    async fn count_all(&self) -> DomainResult<u64> {
        self.inner.count_all().await
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> DomainResult<u64> {
        self.inner.count_created_since(since).await
    }
}

/// Write side that rejects every slug, to exhaust the retry budget.
#[derive(Default)]
pub struct AlwaysTakenStore {
    attempts: AtomicUsize,
}

impl AlwaysTakenStore {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn reject(&self) -> DomainError {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        DomainError::DuplicateSlug("slug already exists".into())
    }
}

#[async_trait]
impl PostWriteRepository for AlwaysTakenStore {
    async fn insert(&self, _post: NewPost) -> DomainResult<Post> {
        Err(self.reject())
    }

    async fn update(&self, _update: PostUpdate) -> DomainResult<Post> {
        Err(self.reject())
    }

    async fn delete(&self, _id: PostId) -> DomainResult<()> {
        Err(DomainError::NotFound("post not found".into()))
    }
}
