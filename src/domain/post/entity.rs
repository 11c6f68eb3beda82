// src/domain/post/entity.rs
use crate::domain::post::media::PostMedia;
use crate::domain::post::value_objects::{PostCategory, PostContent, PostId, PostSlug, PostTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub category: PostCategory,
    pub media: PostMedia,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn from_new(id: PostId, new: NewPost) -> Self {
        Self {
            id,
            title: new.title,
            slug: new.slug,
            content: new.content,
            category: new.category,
            media: new.media,
            author_id: new.author_id,
            created_at: new.created_at,
            updated_at: new.updated_at,
        }
    }

    /// Apply every field present in `update`; absent fields stay as they are.
    pub fn apply(&mut self, update: PostUpdate) {
        let PostUpdate {
            id: _,
            title,
            slug,
            content,
            category,
            media,
            updated_at,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(slug) = slug {
            self.slug = slug;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(media) = media {
            self.media = media;
        }
        self.updated_at = updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub category: PostCategory,
    pub media: PostMedia,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Everything needed to insert a post except its slug, which is allocated
/// right before each write attempt.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: PostTitle,
    pub content: PostContent,
    pub category: PostCategory,
    pub media: PostMedia,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl PostDraft {
    pub fn with_slug(self, slug: PostSlug) -> NewPost {
        NewPost {
            title: self.title,
            slug,
            content: self.content,
            category: self.category,
            media: self.media,
            author_id: self.author_id,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<PostSlug>,
    pub content: Option<PostContent>,
    pub category: Option<PostCategory>,
    pub media: Option<PostMedia>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub const fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            category: None,
            media: None,
            updated_at,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: PostCategory) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_media(mut self, media: PostMedia) -> Self {
        self.media = Some(media);
        self
    }
}
