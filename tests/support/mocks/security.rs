// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use scribe_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use scribe_core::domain::user::{Role, UserId};
use std::collections::HashSet;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const AUTHOR_TOKEN: &str = "author-token";
pub const OTHER_AUTHOR_TOKEN: &str = "other-author-token";
/// Authenticates, but carries no capabilities at all.
pub const READER_TOKEN: &str = "reader-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

fn user(id: i64, username: &str, role: Role) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

pub fn admin_user() -> AuthenticatedUser {
    user(1, "admin", Role::Admin)
}

pub fn author_user() -> AuthenticatedUser {
    user(2, "author", Role::Author)
}

pub fn other_author_user() -> AuthenticatedUser {
    user(3, "other", Role::Author)
}

pub fn reader_user() -> AuthenticatedUser {
    AuthenticatedUser {
        capabilities: HashSet::new(),
        ..user(4, "reader", Role::Author)
    }
}

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Err(ApplicationError::infrastructure("not implemented"))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            ADMIN_TOKEN => Ok(admin_user()),
            AUTHOR_TOKEN => Ok(author_user()),
            OTHER_AUTHOR_TOKEN => Ok(other_author_user()),
            READER_TOKEN => Ok(reader_user()),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
