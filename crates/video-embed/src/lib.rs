//! Vimeo embed resolution
//!
//! This crate turns CMS-authored video references into playable embeds. It
//! extracts the numeric Vimeo identifier from a watch URL, a player URL or a
//! pasted `<iframe>` snippet, builds a normalized player URL from a set of
//! [`EmbedOptions`], and renders complete embed markup for static export.
//!
//! All operations are pure string transforms and safe to call from any thread.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod embedder;
pub mod identifier;
pub mod markup;
pub mod options;
pub mod player_url;

pub use config::{ConfigError, EmbedConfig};
pub use embedder::VimeoEmbedder;
pub use identifier::{extract_identifier, EmbedError, VideoId};
pub use markup::{generate_embed_markup, Presentation};
pub use options::EmbedOptions;
pub use player_url::{oembed_url, serialize_embed_url, watch_url};
