//! Studio site video embeds
//!
//! Re-exports the embed core and the CMS boundary so site code depends on a
//! single crate.

#![warn(missing_docs)]

pub use cms_content::{ContentError, EmbedObject, EmbedSource, ResolvedEmbed, SiteBranding};
pub use video_embed::{
    extract_identifier, generate_embed_markup, oembed_url, serialize_embed_url, watch_url,
    ConfigError, EmbedConfig, EmbedError, EmbedOptions, Presentation, VideoId, VimeoEmbedder,
};
