// tests/support/mocks/mod.rs
pub mod repos;
pub mod security;
pub mod time;

pub use repos::{AlwaysTakenStore, RacingPostStore};
pub use security::{
    ADMIN_TOKEN, AUTHOR_TOKEN, DummyTokenManager, EXPIRED_TOKEN, OTHER_AUTHOR_TOKEN, READER_TOKEN,
    admin_user, author_user, other_author_user, reader_user,
};
pub use time::{DummyClock, fixed_now};
