//! Vimeo identifier extraction
//!
//! Editors paste videos into the CMS in whatever shape they have at hand: a
//! watch page URL, a player URL, or the full `<iframe>` snippet copied from the
//! share dialog. This module recovers the numeric video identifier from all of
//! them.
//!
//! When the input contains an `<iframe>`, its `src` attribute is consulted
//! before anything else. Share snippets usually carry a watch page link in the
//! surrounding text, and that link may point at a different video than the
//! player itself.

use crate::config::EmbedConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors that can occur during embed operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmbedError {
    /// Identifier is not a run of decimal digits
    #[error("Invalid video ID: {0:?}")]
    InvalidId(String),

    /// No identifier could be found in the input
    #[error("No Vimeo video found in: {0}")]
    NotFound(String),
}

/// Result type for embed operations
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Numeric Vimeo video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    /// Create an identifier, rejecting anything but ASCII digits
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(id))
        } else {
            Err(EmbedError::InvalidId(id))
        }
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for VideoId {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for VideoId {
    type Error = EmbedError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

fn iframe_src_regex() -> &'static Regex {
    static IFRAME_SRC_REGEX: OnceLock<Regex> = OnceLock::new();
    IFRAME_SRC_REGEX.get_or_init(|| {
        // Matches the src attribute of an iframe tag, quoted or bare
        Regex::new(
            r#"(?is)<iframe\b[^>]*?\ssrc\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#,
        )
        .unwrap()
    })
}

fn video_url_regex() -> &'static Regex {
    static VIDEO_URL_REGEX: OnceLock<Regex> = OnceLock::new();
    VIDEO_URL_REGEX.get_or_init(|| {
        // Matches:
        // - player.vimeo.com/video/123
        // - vimeo.com/123
        Regex::new(r"(?i)(?:player\.vimeo\.com/video/|vimeo\.com/)([0-9]+)").unwrap()
    })
}

/// Match a single candidate string against the known URL shapes
fn match_video_url(candidate: &str) -> Option<VideoId> {
    video_url_regex()
        .captures(candidate)
        .and_then(|cap| cap.get(1))
        .map(|m| VideoId(m.as_str().to_string()))
}

/// Find the first iframe whose src points at a Vimeo player
fn match_iframe_src(raw: &str) -> Option<VideoId> {
    iframe_src_regex().captures_iter(raw).find_map(|cap| {
        let src = cap.get(1).or_else(|| cap.get(2)).or_else(|| cap.get(3))?;
        match_video_url(src.as_str())
    })
}

/// Extract an identifier while scanning at most `max_input_len` bytes
pub(crate) fn extract_with_limit(raw: &str, max_input_len: usize) -> Option<VideoId> {
    if raw.len() > max_input_len {
        tracing::warn!(
            len = raw.len(),
            max = max_input_len,
            "Embed input exceeds size limit, skipping"
        );
        return None;
    }

    if let Some(id) = match_iframe_src(raw) {
        tracing::trace!(id = %id, "Matched iframe src");
        return Some(id);
    }

    let id = match_video_url(raw);
    match &id {
        Some(id) => tracing::trace!(id = %id, "Matched bare URL"),
        None => tracing::debug!(len = raw.len(), "No Vimeo video found in input"),
    }
    id
}

/// Extract the Vimeo video identifier from a URL or embed markup
///
/// Returns `None` when nothing recognisable is present; callers render a
/// fallback rather than treating that as a failure.
pub fn extract_identifier(raw: &str) -> Option<VideoId> {
    extract_with_limit(raw, EmbedConfig::global().max_input_len)
}
