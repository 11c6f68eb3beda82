pub mod auth;
pub mod media;
pub mod posts;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use media::MediaPayload;
pub use posts::{MediaItemDto, MediaKind, PostDto, PostListDto};
