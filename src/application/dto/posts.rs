use crate::domain::post::{MediaItem, Post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MediaItemDto {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
}

impl From<&MediaItem> for MediaItemDto {
    fn from(item: &MediaItem) -> Self {
        let kind = match item {
            MediaItem::Image(_) => MediaKind::Image,
            MediaItem::Video(_) => MediaKind::Video,
        };
        Self {
            kind,
            url: item.url().as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category: String,
    pub media: Vec<MediaItemDto>,
    /// Legacy flat view of `media`, kept for older clients.
    pub images: Vec<String>,
    pub video: Option<String>,
    pub featured_image: Option<String>,
    pub has_media: bool,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        let media = post.media.items().iter().map(MediaItemDto::from).collect();
        let images = post
            .media
            .images()
            .map(|url| url.as_str().to_string())
            .collect();
        let video = post.media.video().map(|url| url.as_str().to_string());
        let featured_image = post
            .media
            .featured_image()
            .map(|url| url.as_str().to_string());
        let has_media = post.media.has_media();

        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            content: post.content.into_inner(),
            category: post.category.into_inner(),
            media,
            images,
            video,
            featured_image,
            has_media,
            author_id: post.author_id.into(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostListDto {
    pub posts: Vec<PostDto>,
    pub total_posts: u64,
    pub last_month_posts: u64,
}
