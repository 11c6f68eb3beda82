// src/domain/post/services/mod.rs
mod normalize;

use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{PostId, PostSlug};

pub use normalize::slug_base;

/// Domain service producing unique slugs for posts.
///
/// Candidates are checked one at a time in ascending counter order, so for a
/// fixed store state the same title always yields the same slug. The check and
/// the eventual write are not atomic; the store's unique index on `slug` is
/// what finally rejects a racing writer.
pub struct SlugAllocator {
    read_repo: Arc<dyn PostReadRepository>,
    clock: Arc<dyn Clock>,
}

impl SlugAllocator {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { read_repo, clock }
    }

    /// Allocate a slug for `title`. A post whose id equals `ignore` does not
    /// count as a collision, which lets an edited post keep its own slug.
    pub async fn allocate(
        &self,
        title: Option<&str>,
        ignore: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        let base = title
            .and_then(slug_base)
            .unwrap_or_else(|| self.fallback_base());

        let mut candidate = base.clone();
        let mut counter = 1u64;

        loop {
            let slug = PostSlug::new(candidate)?;
            if !self.read_repo.exists_by_slug(&slug, ignore).await? {
                return Ok(slug);
            }
            tracing::debug!(slug = %slug, "slug taken, probing next candidate");
            candidate = format!("{base}-{counter}");
            counter += 1;
        }
    }

    // Same-millisecond collisions are left to the counter loop.
    fn fallback_base(&self) -> String {
        format!("post-{}", self.clock.now().timestamp_millis())
    }
}
