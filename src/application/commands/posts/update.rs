// src/application/commands/posts/update.rs
use super::{PostCommandService, service::SlugWrite};
use crate::{
    application::{
        dto::{AuthenticatedUser, MediaPayload, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{
        PostCategory, PostContent, PostId, PostTitle, PostUpdate,
        specifications::{CanUpdatePostSpec, PostSpecification},
    },
};

/// Fields left as `None` are not touched.
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub media: Option<MediaPayload>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !CanUpdatePostSpec::new(&actor.capabilities, &post, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to update post",
            ));
        }

        let UpdatePostCommand {
            id: _,
            title,
            content,
            category,
            media,
        } = command;

        let mut update = PostUpdate::new(id, self.clock.now());
        if let Some(content) = content.map(PostContent::new).transpose()? {
            update = update.with_content(content);
        }
        if let Some(category) = category.map(PostCategory::new).transpose()? {
            update = update.with_category(category);
        }
        if let Some(media) = media.map(MediaPayload::into_media).transpose()? {
            update = update.with_media(media);
        }

        let retitled = title
            .map(PostTitle::new)
            .transpose()?
            .filter(|title| title != &post.title);

        let updated = if let Some(title) = retitled {
            let raw_title = title.as_str().to_string();
            update = update.with_title(title);
            self.write_with_fresh_slug(&raw_title, Some(id), SlugWrite::Update(update))
                .await?
        } else {
            self.write_repo.update(update).await?
        };

        tracing::info!(post_id = %updated.id, slug = %updated.slug, editor = %actor.id, "post updated");
        Ok(updated.into())
    }
}
