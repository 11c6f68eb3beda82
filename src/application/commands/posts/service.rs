// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        errors::DomainError,
        post::{Post, PostDraft, PostId, PostReadRepository, PostUpdate, PostWriteRepository, SlugAllocator},
    },
};

/// Extra write attempts after the store rejects a freshly allocated slug.
pub const DEFAULT_SLUG_WRITE_RETRIES: u32 = 3;

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) slug_allocator: Arc<SlugAllocator>,
    pub(super) clock: Arc<dyn Clock>,
    slug_write_retries: u32,
}

/// A write that carries a slug allocated just before it is attempted.
pub(super) enum SlugWrite {
    Insert(PostDraft),
    Update(PostUpdate),
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        slug_allocator: Arc<SlugAllocator>,
        clock: Arc<dyn Clock>,
        slug_write_retries: u32,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_allocator,
            clock,
            slug_write_retries,
        }
    }

    /// Allocate a slug for `title` and perform `write` with it. When the store
    /// reports the slug as taken (a concurrent writer won the race), allocate
    /// again and retry, at most `slug_write_retries` more times.
    pub(super) async fn write_with_fresh_slug(
        &self,
        title: &str,
        ignore: Option<PostId>,
        write: SlugWrite,
    ) -> ApplicationResult<Post> {
        let mut attempt = 0u32;

        loop {
            let slug = self.slug_allocator.allocate(Some(title), ignore).await?;

            let result = match &write {
                SlugWrite::Insert(draft) => {
                    self.write_repo
                        .insert(draft.clone().with_slug(slug.clone()))
                        .await
                }
                SlugWrite::Update(update) => {
                    self.write_repo
                        .update(update.clone().with_slug(slug.clone()))
                        .await
                }
            };

            match result {
                Ok(post) => return Ok(post),
                Err(DomainError::DuplicateSlug(_)) if attempt < self.slug_write_retries => {
                    attempt += 1;
                    tracing::warn!(
                        slug = %slug,
                        attempt,
                        "slug taken by a concurrent write, allocating again"
                    );
                }
                Err(DomainError::DuplicateSlug(_)) => {
                    return Err(ApplicationError::conflict(format!(
                        "could not allocate a unique slug after {} attempts",
                        attempt + 1
                    )));
                }
                Err(other) => return Err(other.into()),
            }
        }
    }
}
