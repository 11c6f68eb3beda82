// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostCategory, PostContent, PostFilter, PostId, PostMedia, PostReadRepository,
    PostSlug, PostTitle, PostUpdate, PostWriteRepository, SortDirection,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str =
    "id, title, slug, content, category, images, video, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    category: String,
    images: Vec<String>,
    video: Option<String>,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            content: PostContent::new(row.content)?,
            category: PostCategory::new(row.category)?,
            media: PostMedia::from_legacy(row.images, row.video)?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Split media into the `images` / `video` columns.
fn media_columns(media: &PostMedia) -> (Vec<String>, Option<String>) {
    let images = media.images().map(|url| url.as_str().to_string()).collect();
    let video = media.video().map(|url| url.as_str().to_string());
    (images, video)
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            category,
            media,
            author_id,
            created_at,
            updated_at,
        } = post;
        let (images, video) = media_columns(&media);

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, slug, content, category, images, video, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(category.as_str())
        .bind(images)
        .bind(video)
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            content,
            category,
            media,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }

        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category.into_inner());
        }

        if let Some(media) = media {
            let (images, video) = media_columns(&media);
            builder.push(", images = ");
            builder.push_bind(images);
            builder.push(", video = ");
            builder.push_bind(video);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside ILIKE.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

impl PostgresPostReadRepository {
    fn apply_conditions<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a PostFilter) {
        let mut separated = " WHERE ";
        let mut next = |builder: &mut QueryBuilder<'a, Postgres>| {
            builder.push(separated);
            separated = " AND ";
        };

        if let Some(author_id) = filter.author_id {
            next(builder);
            builder.push("author_id = ");
            builder.push_bind(i64::from(author_id));
        }
        if let Some(category) = &filter.category {
            next(builder);
            builder.push("category = ");
            builder.push_bind(category.as_str());
        }
        if let Some(slug) = &filter.slug {
            next(builder);
            builder.push("slug = ");
            builder.push_bind(slug.as_str());
        }
        if let Some(post_id) = filter.post_id {
            next(builder);
            builder.push("id = ");
            builder.push_bind(i64::from(post_id));
        }
        if let Some(term) = &filter.search_term {
            let pattern = like_pattern(term);
            next(builder);
            builder.push("(title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR content ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn exists_by_slug(
        &self,
        slug: &PostSlug,
        excluding: Option<PostId>,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM posts WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(slug.as_str())
        .bind(excluding.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self, filter: &PostFilter) -> DomainResult<Vec<Post>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(POST_COLUMNS);
        builder.push(" FROM posts");
        Self::apply_conditions(&mut builder, filter);

        builder.push(match filter.direction {
            SortDirection::Asc => " ORDER BY updated_at ASC, id ASC",
            SortDirection::Desc => " ORDER BY updated_at DESC, id DESC",
        });
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(filter.offset));
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(filter.limit));

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn count_all(&self) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> DomainResult<u64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE created_at >= $1")
                .bind(since)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("rust"), "%rust%");
    }

    #[test]
    fn media_columns_split_images_and_video() {
        let media = PostMedia::from_legacy(
            vec!["https://i/1.png", "https://i/2.png"],
            Some("https://v/1.mp4".into()),
        )
        .unwrap();
        let (images, video) = media_columns(&media);
        assert_eq!(images, vec!["https://i/1.png", "https://i/2.png"]);
        assert_eq!(video.as_deref(), Some("https://v/1.mp4"));
    }
}
