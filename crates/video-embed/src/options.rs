//! Player options
//!
//! Every option is optional. A parameter only reaches the query string when
//! its value differs from what the player assumes anyway, which keeps player
//! URLs short and stable.

use serde::{Deserialize, Serialize};

/// Player options mapped onto Vimeo query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbedOptions {
    /// Start playback immediately (the player requires `muted` alongside)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    /// Restart playback when the video ends
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub loop_playback: Option<bool>,
    /// Silence audio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    /// Hide all player chrome for ambient use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<bool>,
    /// Accent colour, with or without a leading `#`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Show the uploader avatar (player default: shown)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portrait: Option<bool>,
    /// Show the title overlay (player default: shown)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<bool>,
    /// Show the uploader byline (player default: shown)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byline: Option<bool>,
    /// Opt out of provider tracking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_track: Option<bool>,
}

/// Push `name` when `value` is set and differs from the player default
fn push_flag(
    pairs: &mut Vec<(&'static str, String)>,
    name: &'static str,
    value: Option<bool>,
    default: bool,
) {
    if let Some(v) = value {
        if v != default {
            pairs.push((name, if v { "1" } else { "0" }.to_string()));
        }
    }
}

impl EmbedOptions {
    /// Options with everything at player defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for ambient background video: autoplay, loop, muted, no chrome
    pub fn background_video() -> Self {
        Self::new().with_autoplay().with_loop().with_background()
    }

    /// Enable autoplay, muting as the player requires
    pub fn with_autoplay(mut self) -> Self {
        self.autoplay = Some(true);
        self.muted = Some(true);
        self
    }

    /// Enable looping
    pub fn with_loop(mut self) -> Self {
        self.loop_playback = Some(true);
        self
    }

    /// Mute audio
    pub fn with_muted(mut self) -> Self {
        self.muted = Some(true);
        self
    }

    /// Strip player chrome
    pub fn with_background(mut self) -> Self {
        self.background = Some(true);
        self
    }

    /// Set the accent colour
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Hide avatar, title and byline
    pub fn without_chrome_text(mut self) -> Self {
        self.portrait = Some(false);
        self.title = Some(false);
        self.byline = Some(false);
        self
    }

    /// Opt out of tracking
    pub fn with_do_not_track(mut self) -> Self {
        self.do_not_track = Some(true);
        self
    }

    /// Combine with `overrides`, which win wherever they are set
    pub fn merged_with(&self, overrides: &EmbedOptions) -> EmbedOptions {
        EmbedOptions {
            autoplay: overrides.autoplay.or(self.autoplay),
            loop_playback: overrides.loop_playback.or(self.loop_playback),
            muted: overrides.muted.or(self.muted),
            background: overrides.background.or(self.background),
            color: overrides.color.clone().or_else(|| self.color.clone()),
            portrait: overrides.portrait.or(self.portrait),
            title: overrides.title.or(self.title),
            byline: overrides.byline.or(self.byline),
            do_not_track: overrides.do_not_track.or(self.do_not_track),
        }
    }

    /// Colour value as sent to the player, without the leading `#`
    pub fn color_param(&self) -> Option<&str> {
        self.color
            .as_deref()
            .map(|c| c.strip_prefix('#').unwrap_or(c))
            .filter(|c| !c.is_empty())
    }

    /// Query parameters that differ from player defaults, in fixed order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        push_flag(&mut pairs, "autoplay", self.autoplay, false);
        push_flag(&mut pairs, "loop", self.loop_playback, false);
        push_flag(&mut pairs, "muted", self.muted, false);
        push_flag(&mut pairs, "background", self.background, false);
        if let Some(color) = self.color_param() {
            pairs.push(("color", color.to_string()));
        }
        push_flag(&mut pairs, "portrait", self.portrait, true);
        push_flag(&mut pairs, "title", self.title, true);
        push_flag(&mut pairs, "byline", self.byline, true);
        push_flag(&mut pairs, "dnt", self.do_not_track, false);

        pairs
    }
}
