//! Embedder bound to an explicit configuration

use crate::config::EmbedConfig;
use crate::identifier::{extract_with_limit, VideoId};
use crate::markup::{generate_with, Presentation};
use crate::options::EmbedOptions;
use crate::player_url::serialize_with;

/// Runs extraction, URL serialization and markup generation against its own
/// [`EmbedConfig`] instead of the process-wide one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VimeoEmbedder {
    config: EmbedConfig,
}

impl VimeoEmbedder {
    /// Create an embedder with the given configuration
    pub fn new(config: EmbedConfig) -> Self {
        Self { config }
    }

    /// Create an embedder from the process-wide configuration
    pub fn from_global() -> Self {
        Self::new(EmbedConfig::global().clone())
    }

    /// Configuration in use
    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Extract the video identifier from a URL or embed markup
    pub fn extract(&self, raw: &str) -> Option<VideoId> {
        extract_with_limit(raw, self.config.max_input_len)
    }

    /// Build the player URL
    pub fn player_url(&self, id: &VideoId, options: &EmbedOptions) -> String {
        serialize_with(&self.config, id, options)
    }

    /// Build a complete embed fragment
    pub fn markup(&self, id: &VideoId, options: &EmbedOptions, presentation: &Presentation) -> String {
        generate_with(&self.config, id, options, presentation)
    }
}
