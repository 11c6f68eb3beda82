// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::posts::PostCommandService,
        ports::{security::TokenManager, time::Clock},
        queries::posts::PostQueryService,
    },
    domain::post::{PostReadRepository, PostWriteRepository, SlugAllocator},
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slug_write_retries: u32,
    ) -> Self {
        let slug_allocator = Arc::new(SlugAllocator::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&clock),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&slug_allocator),
            Arc::clone(&clock),
            slug_write_retries,
        ));

        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&clock),
        ));

        Self {
            post_commands,
            post_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
