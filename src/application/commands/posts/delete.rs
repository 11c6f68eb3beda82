// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{
        PostId,
        specifications::{CanDeletePostSpec, PostSpecification},
    },
};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let id = PostId::new(command.id)?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !CanDeletePostSpec::new(&actor.capabilities, &post, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to delete post",
            ));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(post_id = %id, actor = %actor.id, "post deleted");
        Ok(())
    }
}
