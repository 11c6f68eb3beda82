use super::PostQueryService;
use crate::{
    application::{
        dto::{PostDto, PostListDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        post::{PostCategory, PostFilter, PostId, PostSlug, SortDirection},
        user::UserId,
    },
};
use chrono::{DateTime, Months, Utc};

pub const DEFAULT_LIMIT: u32 = 8;
pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Default)]
pub struct ListPostsQuery {
    pub user_id: Option<i64>,
    pub category: Option<String>,
    pub slug: Option<String>,
    pub post_id: Option<i64>,
    pub search_term: Option<String>,
    /// `"asc"` sorts oldest first; anything else newest first.
    pub order: Option<String>,
    pub start_index: u32,
    pub limit: u32,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<PostListDto> {
        let filter = Self::build_filter(query)?;

        let posts = self.read_repo.list(&filter).await?;
        let total_posts = self.read_repo.count_all().await?;
        let since = one_month_before(self.clock.now())?;
        let last_month_posts = self.read_repo.count_created_since(since).await?;

        Ok(PostListDto {
            posts: posts.into_iter().map(PostDto::from).collect(),
            total_posts,
            last_month_posts,
        })
    }

    fn build_filter(query: ListPostsQuery) -> ApplicationResult<PostFilter> {
        let limit = if query.limit == 0 {
            DEFAULT_LIMIT
        } else {
            query.limit.min(MAX_LIMIT)
        };
        let direction = match query.order.as_deref() {
            Some("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        };

        Ok(PostFilter {
            author_id: query.user_id.map(UserId::new).transpose()?,
            category: query.category.map(PostCategory::new).transpose()?,
            slug: query.slug.map(PostSlug::new).transpose()?,
            post_id: query.post_id.map(PostId::new).transpose()?,
            search_term: query
                .search_term
                .map(|term| term.trim().to_string())
                .filter(|term| !term.is_empty()),
            direction,
            offset: query.start_index,
            limit,
        })
    }
}

/// Midnight of the same calendar day one month earlier.
fn one_month_before(now: DateTime<Utc>) -> ApplicationResult<DateTime<Utc>> {
    now.date_naive()
        .checked_sub_months(Months::new(1))
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| ApplicationError::validation("date out of range"))
}
