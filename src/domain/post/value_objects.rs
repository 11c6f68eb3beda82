// src/domain/post/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// First and last code point of the non-Latin script accepted in slugs (Arabic block).
pub const EXTENDED_SLUG_RANGE: (char, char) = ('\u{0600}', '\u{06FF}');

pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// Longest accepted title, in characters. Keeps title and slug well inside
/// the Postgres btree entry limit of their unique indexes.
pub const MAX_TITLE_CHARS: usize = 200;

/// Characters a slug may contain besides the hyphen separator.
pub(crate) fn is_slug_char(ch: char) -> bool {
    let (lo, hi) = EXTENDED_SLUG_RANGE;
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || (lo..=hi).contains(&ch)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("post id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > MAX_TITLE_CHARS {
            return Err(DomainError::Validation(format!(
                "title cannot exceed {MAX_TITLE_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostTitle> for String {
    fn from(value: PostTitle) -> Self {
        value.0
    }
}

/// URL-safe identifier derived from a title. Built by `SlugAllocator`; the
/// constructor only checks the character set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostSlug(String);

impl PostSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if let Some(bad) = value.chars().find(|&c| c != '-' && !is_slug_char(c)) {
            return Err(DomainError::Validation(format!(
                "slug contains invalid character '{bad}'"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostSlug> for String {
    fn from(value: PostSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<PostContent> for String {
    fn from(value: PostContent) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCategory(String);

impl PostCategory {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("category cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for PostCategory {
    fn default() -> Self {
        Self(DEFAULT_CATEGORY.to_string())
    }
}

impl From<PostCategory> for String {
    fn from(value: PostCategory) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_ascii_and_arabic() {
        assert!(PostSlug::new("hello-world-2").is_ok());
        assert!(PostSlug::new("مرحبا-بالعالم").is_ok());
    }

    #[test]
    fn slug_rejects_uppercase_and_punctuation() {
        assert!(PostSlug::new("Hello").is_err());
        assert!(PostSlug::new("hello world").is_err());
        assert!(PostSlug::new("hello!").is_err());
        assert!(PostSlug::new("").is_err());
    }

    #[test]
    fn blank_title_and_content_are_rejected() {
        assert!(PostTitle::new("   ").is_err());
        assert!(PostContent::new("\n\t").is_err());
        assert_eq!(PostTitle::new(" Foo ").unwrap().as_str(), " Foo ");
    }

    #[test]
    fn overlong_title_is_a_validation_error() {
        assert!(PostTitle::new("a".repeat(MAX_TITLE_CHARS)).is_ok());
        // Counted in characters, so multi-byte scripts get the same budget.
        assert!(PostTitle::new("م".repeat(MAX_TITLE_CHARS)).is_ok());
        assert!(matches!(
            PostTitle::new("a".repeat(MAX_TITLE_CHARS + 1)),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn category_is_trimmed_and_defaults() {
        assert_eq!(PostCategory::new("  rust ").unwrap().as_str(), "rust");
        assert_eq!(PostCategory::default().as_str(), DEFAULT_CATEGORY);
        assert!(PostCategory::new("").is_err());
    }
}
