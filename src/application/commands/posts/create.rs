// src/application/commands/posts/create.rs
use super::{PostCommandService, capability::ensure_capability, service::SlugWrite};
use crate::{
    application::{
        dto::{AuthenticatedUser, MediaPayload, PostDto},
        error::ApplicationResult,
    },
    domain::post::{PostCategory, PostContent, PostDraft, PostTitle},
};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub media: Option<MediaPayload>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    category: Option<String>,
    media: Option<MediaPayload>,
}

impl CreatePostCommandBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn media(mut self, media: MediaPayload) -> Self {
        self.media = Some(media);
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            category: self.category,
            media: self.media,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        ensure_capability(actor, "posts", "create")?;

        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let category = command
            .category
            .map(PostCategory::new)
            .transpose()?
            .unwrap_or_default();
        let media = command
            .media
            .map(MediaPayload::into_media)
            .transpose()?
            .unwrap_or_default();

        let raw_title = title.as_str().to_string();
        let draft = PostDraft {
            title,
            content,
            category,
            media,
            author_id: actor.id,
            created_at: self.clock.now(),
        };

        let created = self
            .write_with_fresh_slug(&raw_title, None, SlugWrite::Insert(draft))
            .await?;

        tracing::info!(post_id = %created.id, slug = %created.slug, author = %actor.id, "post created");
        Ok(created.into())
    }
}
