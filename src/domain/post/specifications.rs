// src/domain/post/specifications.rs
use std::collections::HashSet;

use crate::domain::post::entity::Post;
use crate::domain::user::value_objects::{Capability, UserId};

pub trait PostSpecification {
    fn is_satisfied(&self) -> bool;
}

/// `<verb>:any` always passes; `<verb>:own` passes for the post's author.
fn owns_or_overrides(
    capabilities: &HashSet<Capability>,
    post: &Post,
    user_id: UserId,
    verb: &str,
) -> bool {
    let has = |scope: &str| {
        let action = format!("{verb}:{scope}");
        capabilities.iter().any(|cap| cap.matches("posts", &action))
    };
    has("any") || (has("own") && post.author_id == user_id)
}

pub struct CanUpdatePostSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    post: &'a Post,
    user_id: UserId,
}

impl<'a> CanUpdatePostSpec<'a> {
    pub const fn new(capabilities: &'a HashSet<Capability>, post: &'a Post, user_id: UserId) -> Self {
        Self {
            capabilities,
            post,
            user_id,
        }
    }
}

impl PostSpecification for CanUpdatePostSpec<'_> {
    fn is_satisfied(&self) -> bool {
        owns_or_overrides(self.capabilities, self.post, self.user_id, "update")
    }
}

pub struct CanDeletePostSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    post: &'a Post,
    user_id: UserId,
}

impl<'a> CanDeletePostSpec<'a> {
    pub const fn new(capabilities: &'a HashSet<Capability>, post: &'a Post, user_id: UserId) -> Self {
        Self {
            capabilities,
            post,
            user_id,
        }
    }
}

impl PostSpecification for CanDeletePostSpec<'_> {
    fn is_satisfied(&self) -> bool {
        owns_or_overrides(self.capabilities, self.post, self.user_id, "delete")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::{PostCategory, PostContent, PostId, PostMedia, PostSlug, PostTitle};
    use crate::domain::user::Role;
    use chrono::Utc;

    fn post_by(author: i64) -> Post {
        Post {
            id: PostId::new(1).unwrap(),
            title: PostTitle::new("t").unwrap(),
            slug: PostSlug::new("t").unwrap(),
            content: PostContent::new("c").unwrap(),
            category: PostCategory::default(),
            media: PostMedia::default(),
            author_id: UserId::new(author).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn author_can_update_own_post_only() {
        let caps = Role::Author.default_capabilities();
        let me = UserId::new(2).unwrap();
        assert!(CanUpdatePostSpec::new(&caps, &post_by(2), me).is_satisfied());
        assert!(!CanUpdatePostSpec::new(&caps, &post_by(3), me).is_satisfied());
    }

    #[test]
    fn admin_can_delete_any_post() {
        let caps = Role::Admin.default_capabilities();
        let me = UserId::new(1).unwrap();
        assert!(CanDeletePostSpec::new(&caps, &post_by(9), me).is_satisfied());
    }

    #[test]
    fn no_capabilities_means_no_access() {
        let caps = HashSet::new();
        let me = UserId::new(2).unwrap();
        assert!(!CanDeletePostSpec::new(&caps, &post_by(2), me).is_satisfied());
    }
}
