//! CMS content boundary for the studio site
//!
//! Documents fetched from the headless CMS reference videos either as a bare
//! URL string or as a structured video embed object. This crate resolves those
//! shapes into a single Vimeo identifier plus player options, and resolves the
//! site title for the domain a page is served from.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod branding;
pub mod source;

pub use branding::SiteBranding;
pub use source::{ContentError, EmbedObject, EmbedSource, ResolvedEmbed};
