// src/domain/post/mod.rs
pub mod entity;
pub mod media;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewPost, Post, PostDraft, PostUpdate};
pub use media::{MediaItem, MediaUrl, PostMedia};
pub use repository::{PostFilter, PostReadRepository, PostWriteRepository, SortDirection};
pub use services::SlugAllocator;
pub use value_objects::{PostCategory, PostContent, PostId, PostSlug, PostTitle};
