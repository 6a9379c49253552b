//! Player URL construction

use crate::config::EmbedConfig;
use crate::identifier::VideoId;
use crate::options::EmbedOptions;
use url::form_urlencoded;

/// Public watch page for a video
pub const WATCH_BASE: &str = "https://vimeo.com";

/// oEmbed metadata endpoint, used for titles and thumbnails
pub const OEMBED_ENDPOINT: &str = "https://vimeo.com/api/oembed.json";

pub(crate) fn serialize_with(config: &EmbedConfig, id: &VideoId, options: &EmbedOptions) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (name, value) in options.query_pairs() {
        query.append_pair(name, &value);
    }
    // Housekeeping parameter always goes last
    query.append_pair("app_id", &config.app_id);

    format!("{}?{}", config.player_base(id.as_str()), query.finish())
}

/// Build the player URL for `id` with the given options
///
/// Parameters appear in a fixed order and only when they differ from player
/// defaults; the housekeeping `app_id` is always present.
pub fn serialize_embed_url(id: &VideoId, options: &EmbedOptions) -> String {
    serialize_with(EmbedConfig::global(), id, options)
}

/// Public watch page URL
pub fn watch_url(id: &VideoId) -> String {
    format!("{}/{}", WATCH_BASE, id)
}

/// oEmbed lookup URL for the video's watch page
pub fn oembed_url(id: &VideoId) -> String {
    let watch = watch_url(id);
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("url", &watch)
        .finish();
    format!("{}?{}", OEMBED_ENDPOINT, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::extract_identifier;

    fn id(raw: &str) -> VideoId {
        VideoId::new(raw).unwrap()
    }

    #[test]
    fn test_defaults_only_housekeeping() {
        assert_eq!(
            serialize_embed_url(&id("123"), &EmbedOptions::default()),
            "https://player.vimeo.com/video/123?app_id=your_site_name"
        );
    }

    #[test]
    fn test_autoplay_muted_loop() {
        let options = EmbedOptions {
            autoplay: Some(true),
            muted: Some(true),
            loop_playback: Some(true),
            ..Default::default()
        };
        let url = serialize_embed_url(&id("123"), &options);

        assert_eq!(
            url,
            "https://player.vimeo.com/video/123?autoplay=1&loop=1&muted=1&app_id=your_site_name"
        );
        assert!(!url.contains("portrait"));
        assert!(!url.contains("title"));
        assert!(!url.contains("byline"));
    }

    #[test]
    fn test_hidden_chrome_and_color() {
        let options = EmbedOptions {
            portrait: Some(false),
            title: Some(false),
            byline: Some(false),
            color: Some("#00adef".to_string()),
            ..Default::default()
        };
        let url = serialize_embed_url(&id("123"), &options);

        assert!(url.contains("portrait=0"));
        assert!(url.contains("title=0"));
        assert!(url.contains("byline=0"));
        assert!(url.contains("color=00adef"));
        assert!(!url.contains('#'));
        assert!(url.ends_with("&app_id=your_site_name"));
    }

    #[test]
    fn test_do_not_track_and_background() {
        let options = EmbedOptions::new().with_background().with_do_not_track();
        assert_eq!(
            serialize_embed_url(&id("9"), &options),
            "https://player.vimeo.com/video/9?background=1&dnt=1&app_id=your_site_name"
        );
    }

    #[test]
    fn test_color_is_encoded() {
        let options = EmbedOptions::new().with_color("#red & blue");
        let url = serialize_embed_url(&id("1"), &options);
        assert!(url.contains("color=red+%26+blue"));
    }

    #[test]
    fn test_stable_output() {
        let options = EmbedOptions::background_video().with_color("abc");
        let first = serialize_embed_url(&id("55"), &options);
        let second = serialize_embed_url(&id("55"), &options.clone());
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_trip_extraction() {
        let option_sets = [
            EmbedOptions::default(),
            EmbedOptions::background_video(),
            EmbedOptions::new().without_chrome_text().with_color("#vimeo.com/999"),
            EmbedOptions::new().with_do_not_track().with_color("1234"),
        ];

        for raw in ["1", "76979871", "000123"] {
            for options in &option_sets {
                let url = serialize_embed_url(&id(raw), options);
                assert_eq!(extract_identifier(&url), Some(id(raw)), "url: {}", url);
            }
        }
    }

    #[test]
    fn test_custom_config() {
        let config = EmbedConfig::default().with_app_id("studio blog");
        assert_eq!(
            serialize_with(&config, &id("7"), &EmbedOptions::new().with_loop()),
            "https://player.vimeo.com/video/7?loop=1&app_id=studio+blog"
        );
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(watch_url(&id("123")), "https://vimeo.com/123");
    }

    #[test]
    fn test_oembed_url() {
        assert_eq!(
            oembed_url(&id("123")),
            "https://vimeo.com/api/oembed.json?url=https%3A%2F%2Fvimeo.com%2F123"
        );
    }
}
