//! Embed markup generation
//!
//! Produces a ready-to-insert HTML fragment for places where a bare player URL
//! is not enough: static export, newsletters, third-party page builders. The
//! fragment always includes the player API script so that play/pause/seek
//! control over `postMessage` works wherever it is pasted.

use crate::config::EmbedConfig;
use crate::identifier::VideoId;
use crate::options::EmbedOptions;
use crate::player_url::serialize_with;
use serde::{Deserialize, Serialize};

/// Aspect ratio padding for 16:9 responsive embeds
pub const RESPONSIVE_PADDING: &str = "56.25%";

/// Accessible title used when no caption is supplied
pub const DEFAULT_PLAYER_TITLE: &str = "Vimeo video player";

/// Permissions granted to the player iframe
pub const IFRAME_ALLOW: &str = "autoplay; fullscreen; picture-in-picture";

/// How an embed is laid out on the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Presentation {
    /// Fixed width, ignored when responsive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Fixed height, ignored when responsive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// Fill the container width at 16:9
    pub responsive: bool,
    /// Accessible title for the player
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Presentation {
    /// Responsive 16:9 layout
    pub fn responsive() -> Self {
        Self {
            responsive: true,
            ..Default::default()
        }
    }

    /// Fixed-size layout
    pub fn fixed(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: Some(width.into()),
            height: Some(height.into()),
            ..Default::default()
        }
    }

    /// Set the accessible caption
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Title attribute value, falling back to a generic label
    pub fn title(&self) -> &str {
        self.caption
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_PLAYER_TITLE)
    }
}

/// Escape a value for use inside a double-quoted attribute
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn generate_with(
    config: &EmbedConfig,
    id: &VideoId,
    options: &EmbedOptions,
    presentation: &Presentation,
) -> String {
    let src = escape_attr(&serialize_with(config, id, options));
    let title = escape_attr(presentation.title());
    let script = format!(
        r#"<script src="{}"></script>"#,
        escape_attr(&config.player_script_url())
    );

    if presentation.responsive {
        format!(
            concat!(
                r#"<div style="padding:{padding} 0 0 0;position:relative;">"#,
                r#"<iframe src="{src}" frameborder="0" allow="{allow}" "#,
                r#"style="position:absolute;top:0;left:0;width:100%;height:100%;" "#,
                r#"title="{title}"></iframe></div>{script}"#
            ),
            padding = RESPONSIVE_PADDING,
            src = src,
            allow = IFRAME_ALLOW,
            title = title,
            script = script,
        )
    } else {
        let width = presentation.width.as_deref().unwrap_or(&config.default_width);
        let height = presentation.height.as_deref().unwrap_or(&config.default_height);
        format!(
            concat!(
                r#"<iframe src="{src}" width="{width}" height="{height}" "#,
                r#"frameborder="0" allow="{allow}" title="{title}"></iframe>{script}"#
            ),
            src = src,
            width = escape_attr(width),
            height = escape_attr(height),
            allow = IFRAME_ALLOW,
            title = title,
            script = script,
        )
    }
}

/// Generate a complete embed fragment for `id`
pub fn generate_embed_markup(
    id: &VideoId,
    options: &EmbedOptions,
    presentation: &Presentation,
) -> String {
    generate_with(EmbedConfig::global(), id, options, presentation)
}
