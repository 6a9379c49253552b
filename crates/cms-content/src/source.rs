//! Video references as authored in the CMS

use serde::{Deserialize, Serialize};
use thiserror::Error;
use video_embed::{EmbedError, EmbedOptions, Presentation, VideoId, VimeoEmbedder};

/// Errors that can occur while resolving CMS content
#[derive(Debug, Error)]
pub enum ContentError {
    /// Embed error
    #[error("Embed error: {0}")]
    Embed(#[from] EmbedError),

    /// Malformed document
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Longest excerpt of raw input quoted in a not-found error
const ERROR_EXCERPT_LEN: usize = 80;

/// Structured video embed object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedObject {
    /// Watch or player URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Pasted embed markup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_code: Option<String>,
    /// Per-video option overrides
    #[serde(flatten)]
    pub overrides: EmbedOptions,
}

/// A video reference in either of the shapes the CMS produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbedSource {
    /// Plain URL string
    FromUrl(String),
    /// Structured embed object
    FromEmbedObject(EmbedObject),
}

/// Identifier and options ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEmbed {
    /// Video identifier
    pub id: VideoId,
    /// Effective player options
    pub options: EmbedOptions,
    /// Embedder the source was resolved with
    #[serde(skip, default = "VimeoEmbedder::from_global")]
    pub embedder: VimeoEmbedder,
}

impl ResolvedEmbed {
    /// Player URL for inline rendering
    pub fn player_url(&self) -> String {
        self.embedder.player_url(&self.id, &self.options)
    }

    /// Complete embed fragment for static export
    pub fn markup(&self, presentation: &Presentation) -> String {
        self.embedder.markup(&self.id, &self.options, presentation)
    }
}

fn excerpt(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.char_indices().nth(ERROR_EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

impl EmbedSource {
    /// Parse a source from CMS JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Raw strings worth scanning, most specific first
    pub fn candidates(&self) -> Vec<&str> {
        match self {
            EmbedSource::FromUrl(url) => vec![url.as_str()],
            EmbedSource::FromEmbedObject(obj) => obj
                .embed_code
                .as_deref()
                .into_iter()
                .chain(obj.url.as_deref())
                .filter(|raw| !raw.trim().is_empty())
                .collect(),
        }
    }

    /// Options set on the source itself
    pub fn overrides(&self) -> Option<&EmbedOptions> {
        match self {
            EmbedSource::FromUrl(_) => None,
            EmbedSource::FromEmbedObject(obj) => Some(&obj.overrides),
        }
    }

    /// Resolve to the single raw string that carries a video identifier
    pub fn resolve_raw_with(&self, embedder: &VimeoEmbedder) -> Option<(&str, VideoId)> {
        self.candidates()
            .into_iter()
            .find_map(|raw| embedder.extract(raw).map(|id| (raw, id)))
    }

    /// Resolve using the given embedder and page-level default options
    pub fn resolve_with(
        &self,
        embedder: &VimeoEmbedder,
        defaults: &EmbedOptions,
    ) -> Result<ResolvedEmbed> {
        let Some((_, id)) = self.resolve_raw_with(embedder) else {
            let raw = self.candidates().first().copied().unwrap_or_default();
            tracing::debug!(source = %excerpt(raw), "Video source did not resolve");
            return Err(EmbedError::NotFound(excerpt(raw)).into());
        };

        let options = match self.overrides() {
            Some(overrides) => defaults.merged_with(overrides),
            None => defaults.clone(),
        };

        Ok(ResolvedEmbed {
            id,
            options,
            embedder: embedder.clone(),
        })
    }

    /// Resolve using the process-wide configuration and no page defaults
    pub fn resolve(&self) -> Result<ResolvedEmbed> {
        self.resolve_with(&VimeoEmbedder::from_global(), &EmbedOptions::default())
    }
}

impl From<&str> for EmbedSource {
    fn from(url: &str) -> Self {
        EmbedSource::FromUrl(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use video_embed::EmbedConfig;

    #[test]
    fn test_plain_url_source() {
        let resolved = EmbedSource::from("https://vimeo.com/76979871").resolve().unwrap();
        assert_eq!(resolved.id.as_str(), "76979871");
        assert_eq!(resolved.options, EmbedOptions::default());
        assert_eq!(
            resolved.player_url(),
            "https://player.vimeo.com/video/76979871?app_id=your_site_name"
        );
    }

    #[test]
    fn test_embed_code_preferred_over_url() {
        let source = EmbedSource::FromEmbedObject(EmbedObject {
            url: Some("https://vimeo.com/222".to_string()),
            embed_code: Some(
                r#"<iframe src="https://player.vimeo.com/video/111"></iframe>"#.to_string(),
            ),
            overrides: EmbedOptions::default(),
        });
        assert_eq!(source.resolve().unwrap().id.as_str(), "111");
    }

    #[test]
    fn test_falls_back_to_url_when_code_has_no_video() {
        let source = EmbedSource::FromEmbedObject(EmbedObject {
            url: Some("https://vimeo.com/222".to_string()),
            embed_code: Some("<p>coming soon</p>".to_string()),
            overrides: EmbedOptions::default(),
        });
        assert_eq!(source.resolve().unwrap().id.as_str(), "222");
    }

    #[test]
    fn test_blank_fields_skipped() {
        let source = EmbedSource::FromEmbedObject(EmbedObject {
            url: Some("https://vimeo.com/5".to_string()),
            embed_code: Some("   ".to_string()),
            overrides: EmbedOptions::default(),
        });
        assert_eq!(source.candidates(), vec!["https://vimeo.com/5"]);
    }

    #[test]
    fn test_not_found() {
        let err = EmbedSource::from("https://youtube.com/watch?v=abc").resolve().unwrap_err();
        assert!(matches!(err, ContentError::Embed(EmbedError::NotFound(_))));

        let empty = EmbedSource::FromEmbedObject(EmbedObject::default());
        assert!(empty.resolve().is_err());
    }

    #[test]
    fn test_not_found_excerpt_is_bounded() {
        let long = format!("https://example.com/{}", "a".repeat(500));
        let err = EmbedSource::FromUrl(long).resolve().unwrap_err();
        match err {
            ContentError::Embed(EmbedError::NotFound(raw)) => {
                assert!(raw.ends_with("..."));
                assert_eq!(raw.chars().count(), ERROR_EXCERPT_LEN + 3);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let source = EmbedSource::FromEmbedObject(EmbedObject {
            url: Some("https://vimeo.com/7".to_string()),
            embed_code: None,
            overrides: EmbedOptions {
                loop_playback: Some(false),
                ..Default::default()
            },
        });

        let resolved = source
            .resolve_with(&VimeoEmbedder::default(), &EmbedOptions::background_video())
            .unwrap();
        assert_eq!(resolved.options.autoplay, Some(true));
        assert_eq!(resolved.options.loop_playback, Some(false));
        assert_eq!(
            resolved.player_url(),
            "https://player.vimeo.com/video/7?autoplay=1&muted=1&background=1&app_id=your_site_name"
        );
    }

    #[test]
    fn test_resolved_embed_keeps_embedder_config() {
        let embedder = VimeoEmbedder::new(EmbedConfig::default().with_app_id("studio_site"));
        let resolved = EmbedSource::from("https://vimeo.com/31")
            .resolve_with(&embedder, &EmbedOptions::default())
            .unwrap();

        assert_eq!(resolved.embedder, embedder);
        assert_eq!(
            resolved.player_url(),
            "https://player.vimeo.com/video/31?app_id=studio_site"
        );
        assert!(resolved
            .markup(&Presentation::default())
            .contains("video/31?app_id=studio_site"));
    }

    #[test]
    fn test_from_json_string() {
        let source = EmbedSource::from_json(r#""https://vimeo.com/12""#).unwrap();
        assert_eq!(source, EmbedSource::FromUrl("https://vimeo.com/12".to_string()));
    }

    #[test]
    fn test_from_json_object() {
        let source = EmbedSource::from_json(
            r#"{"_type":"videoEmbed","url":"https://vimeo.com/12","autoplay":true,"muted":true,"title":false}"#,
        )
        .unwrap();

        let overrides = source.overrides().unwrap();
        assert_eq!(overrides.autoplay, Some(true));
        assert_eq!(overrides.title, Some(false));

        let resolved = source.resolve().unwrap();
        assert_eq!(
            resolved.player_url(),
            "https://player.vimeo.com/video/12?autoplay=1&muted=1&title=0&app_id=your_site_name"
        );
    }

    #[test]
    fn test_from_json_malformed() {
        let err = EmbedSource::from_json("{not json").unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }

    #[test]
    fn test_resolved_markup() {
        let resolved = EmbedSource::from("https://vimeo.com/3").resolve().unwrap();
        let html = resolved.markup(&Presentation::responsive());
        assert!(html.contains("56.25%"));
    }
}
