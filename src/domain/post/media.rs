// src/domain/post/media.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_IMAGES: usize = 10;
pub const MAX_VIDEOS: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrl(String);

impl MediaUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if !trimmed.starts_with("http") {
            return Err(DomainError::Validation(format!(
                "media url must start with http: '{trimmed}'"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaItem {
    Image(MediaUrl),
    Video(MediaUrl),
}

impl MediaItem {
    pub const fn url(&self) -> &MediaUrl {
        match self {
            Self::Image(url) | Self::Video(url) => url,
        }
    }
}

/// Ordered media attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostMedia {
    items: Vec<MediaItem>,
}

impl PostMedia {
    pub fn new(items: Vec<MediaItem>) -> DomainResult<Self> {
        let images = items
            .iter()
            .filter(|item| matches!(item, MediaItem::Image(_)))
            .count();
        if images > MAX_IMAGES {
            return Err(DomainError::Validation(format!(
                "a post can carry at most {MAX_IMAGES} images"
            )));
        }
        if items.len() - images > MAX_VIDEOS {
            return Err(DomainError::Validation(format!(
                "a post can carry at most {MAX_VIDEOS} video"
            )));
        }
        Ok(Self { items })
    }

    /// Build from the flat `images` + `video` columns used by older clients and
    /// by the relational layout.
    pub fn from_legacy<I, S>(images: I, video: Option<String>) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items = images
            .into_iter()
            .map(|url| MediaUrl::new(url).map(MediaItem::Image))
            .collect::<DomainResult<Vec<_>>>()?;
        if let Some(video) = video.filter(|v| !v.trim().is_empty()) {
            items.push(MediaItem::Video(MediaUrl::new(video)?));
        }
        Self::new(items)
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn images(&self) -> impl Iterator<Item = &MediaUrl> {
        self.items.iter().filter_map(|item| match item {
            MediaItem::Image(url) => Some(url),
            MediaItem::Video(_) => None,
        })
    }

    pub fn video(&self) -> Option<&MediaUrl> {
        self.items.iter().find_map(|item| match item {
            MediaItem::Video(url) => Some(url),
            MediaItem::Image(_) => None,
        })
    }

    pub fn featured_image(&self) -> Option<&MediaUrl> {
        self.images().next()
    }

    pub fn has_media(&self) -> bool {
        !self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(n: usize) -> String {
        format!("https://cdn.example.com/{n}.png")
    }

    #[test]
    fn legacy_shape_keeps_image_order_and_video() {
        let media = PostMedia::from_legacy(
            vec![url(1), url(2)],
            Some("https://video.example.com/v.mp4".into()),
        )
        .unwrap();
        assert_eq!(media.images().count(), 2);
        assert_eq!(media.featured_image().unwrap().as_str(), url(1));
        assert!(media.video().is_some());
        assert!(media.has_media());
    }

    #[test]
    fn too_many_images_is_rejected() {
        let images: Vec<String> = (0..=MAX_IMAGES).map(url).collect();
        assert!(matches!(
            PostMedia::from_legacy(images, None),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn second_video_is_rejected() {
        let video = MediaItem::Video(MediaUrl::new("http://v/1").unwrap());
        assert!(PostMedia::new(vec![video.clone(), video]).is_err());
    }

    #[test]
    fn non_http_url_is_rejected() {
        assert!(MediaUrl::new("ftp://files/x.png").is_err());
        assert!(MediaUrl::new("").is_err());
    }

    #[test]
    fn blank_legacy_video_is_ignored() {
        let media = PostMedia::from_legacy(Vec::<String>::new(), Some("  ".into())).unwrap();
        assert!(!media.has_media());
        assert!(media.featured_image().is_none());
    }
}
