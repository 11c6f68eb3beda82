use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::post::PostReadRepository};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostQueryService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { read_repo, clock }
    }
}
