use crate::domain::errors::DomainResult;
use crate::domain::post::{MediaItem, MediaUrl, PostMedia};

use super::posts::{MediaItemDto, MediaKind};

/// Media as it arrives from clients: either the legacy flat shape or a list
/// of typed items. `into_media` is the single migration point into the
/// domain representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaPayload {
    Legacy {
        images: Vec<String>,
        video: Option<String>,
    },
    Items(Vec<MediaItemDto>),
}

impl MediaPayload {
    /// Pick the payload variant from optional request fields. The typed list
    /// wins over the legacy fields when both are sent.
    pub fn from_request(
        media: Option<Vec<MediaItemDto>>,
        images: Option<Vec<String>>,
        video: Option<String>,
    ) -> Option<Self> {
        match (media, images, video) {
            (Some(items), _, _) => Some(Self::Items(items)),
            (None, None, None) => None,
            (None, images, video) => Some(Self::Legacy {
                images: images.unwrap_or_default(),
                video,
            }),
        }
    }

    pub fn into_media(self) -> DomainResult<PostMedia> {
        match self {
            Self::Legacy { images, video } => PostMedia::from_legacy(images, video),
            Self::Items(items) => {
                let items = items
                    .into_iter()
                    .map(|item| -> DomainResult<MediaItem> {
                        let url = MediaUrl::new(item.url)?;
                        Ok(match item.kind {
                            MediaKind::Image => MediaItem::Image(url),
                            MediaKind::Video => MediaItem::Video(url),
                        })
                    })
                    .collect::<DomainResult<Vec<_>>>()?;
                PostMedia::new(items)
            }
        }
    }
}
