//! Lecture video location of a question page.
//!
//! Strategies run in order: native `<video>` elements, provider iframes,
//! inline script payloads, then `og:`/`twitter:` metadata. The structured
//! script payload only names a file on the video CDN, so that candidate is
//! confirmed with a HEAD probe before it is accepted.

use dom_query::Document;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{run_chain, Strategy};
use crate::dom;
use crate::fetch::AssetProbe;
use crate::patterns::{
    LOOSE_JSON_OBJECT, SCRIPT_VIDEO_PATTERNS, STRUCTURED_PAYLOAD_ROOT, VIDEO_DOMAINS,
    VIDEO_EXTENSIONS, VIDEO_JSON_KEYS, VIDEO_PROVIDERS, YOUTUBE_ID,
};
use crate::result::{VideoInfo, VideoKind};
use crate::url_utils::resolve;

/// Metadata tags consulted by the last strategy, in order.
const VIDEO_META: &[(&str, &str)] = &[
    ("property", "og:video"),
    ("property", "og:video:url"),
    ("name", "twitter:player"),
    ("name", "twitter:video"),
];

/// Inputs the video strategies need besides the document.
pub struct VideoContext<'a> {
    /// URL the page was fetched from; relative video references resolve against it.
    pub page_url: &'a Url,
    /// Root of the video CDN.
    pub video_cdn: &'a str,
    pub probe: &'a dyn AssetProbe,
}

/// Locate the lecture video of a page.
///
/// Returns `None` when every strategy misses.
#[must_use]
pub fn extract_video(doc: &Document, ctx: &VideoContext<'_>) -> Option<VideoInfo> {
    let chain: [Strategy<VideoContext<'_>, VideoInfo>; 4] = [
        Strategy {
            name: "video_element",
            run: video_element,
        },
        Strategy {
            name: "iframe_embed",
            run: iframe_embed,
        },
        Strategy {
            name: "script_payload",
            run: script_payload,
        },
        Strategy {
            name: "meta_tags",
            run: meta_tags,
        },
    ];
    run_chain(&chain, doc, ctx)
}

/// Check whether a URL looks like it points at a video.
#[must_use]
pub fn is_valid_video_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    let lower = url.to_lowercase();
    VIDEO_EXTENSIONS.iter().any(|ext| lower.contains(ext))
        || VIDEO_DOMAINS.iter().any(|domain| lower.contains(domain))
        || url.starts_with("http://")
        || url.starts_with("https://")
}

/// Classify a video URL into a MIME-like format tag.
///
/// # Examples
///
/// ```
/// use doubtnut_scraper::extractor::video::video_format;
///
/// assert_eq!(video_format("https://cdn.test/a.MP4"), "video/mp4");
/// assert_eq!(video_format("https://cdn.test/a/master.m3u8"), "application/x-mpegURL");
/// assert_eq!(video_format("https://example.com/watch"), "unknown");
/// ```
#[must_use]
pub fn video_format(url: &str) -> &'static str {
    let lower = url.to_lowercase();
    if lower.contains(".mp4") {
        "video/mp4"
    } else if lower.contains(".webm") {
        "video/webm"
    } else if lower.contains(".ogg") {
        "video/ogg"
    } else if lower.contains(".m3u8") {
        "application/x-mpegURL"
    } else if url.contains("youtube.com") || url.contains("youtu.be") {
        "youtube"
    } else if url.contains("vimeo.com") {
        "vimeo"
    } else {
        "unknown"
    }
}

/// YouTube video identifier of an embed, watch or short URL.
#[must_use]
pub fn youtube_id(url: &str) -> Option<String> {
    YOUTUBE_ID
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Depth-first search of a JSON value for a video URL.
///
/// Object keys are visited in document order. A video-ish key is only
/// accepted with a valid string value and is never descended into.
#[must_use]
pub fn find_video_in_json(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => map.iter().find_map(|(key, value)| {
            let key = key.to_lowercase();
            if VIDEO_JSON_KEYS.contains(&key.as_str()) {
                value
                    .as_str()
                    .filter(|url| is_valid_video_url(url))
                    .map(str::to_string)
            } else if value.is_object() || value.is_array() {
                find_video_in_json(value)
            } else {
                None
            }
        }),
        Value::Array(items) => items.iter().find_map(find_video_in_json),
        _ => None,
    }
}

fn video_element(doc: &Document, ctx: &VideoContext<'_>) -> Option<VideoInfo> {
    dom::select_each_in(doc, "video").iter().find_map(|video| {
        if let Some(src) = dom::non_empty_attribute(video, "src") {
            let url = resolve(ctx.page_url, &src);
            let format = video_format(&url);
            return Some(VideoInfo::new(url, VideoKind::DirectVideo, format));
        }

        dom::select_each(video, "source").iter().find_map(|source| {
            let src = dom::non_empty_attribute(source, "src")?;
            let url = resolve(ctx.page_url, &src);
            let format = dom::non_empty_attribute(source, "type")
                .unwrap_or_else(|| video_format(&url).to_string());
            Some(VideoInfo::new(url, VideoKind::DirectVideo, format))
        })
    })
}

fn iframe_embed(doc: &Document, ctx: &VideoContext<'_>) -> Option<VideoInfo> {
    let src = dom::select_each_in(doc, "iframe[src]")
        .iter()
        .filter_map(|iframe| dom::non_empty_attribute(iframe, "src"))
        .find(|src| {
            let lower = src.to_lowercase();
            VIDEO_PROVIDERS.iter().any(|provider| lower.contains(provider))
        })?;

    if src.contains("youtube.com") || src.contains("youtu.be") {
        if let Some(id) = youtube_id(&src) {
            let mut info = VideoInfo::new(
                format!("https://www.youtube.com/watch?v={id}"),
                VideoKind::Youtube,
                "youtube",
            );
            info.video_id = Some(id);
            return Some(info);
        }
    }

    Some(VideoInfo::new(
        resolve(ctx.page_url, &src),
        VideoKind::IframeEmbed,
        "embedded",
    ))
}

fn script_payload(doc: &Document, ctx: &VideoContext<'_>) -> Option<VideoInfo> {
    dom::select_each_in(doc, "script").iter().find_map(|script| {
        let body = dom::text_content(script);
        if body.trim().is_empty() {
            return None;
        }

        structured_payload(&body, ctx)
            .or_else(|| script_patterns(&body, ctx))
            .or_else(|| loose_json(&body, ctx))
    })
}

fn structured_payload(body: &str, ctx: &VideoContext<'_>) -> Option<VideoInfo> {
    if !body.contains("videoData") || !body.contains("video_name") {
        return None;
    }

    let start = body.find(STRUCTURED_PAYLOAD_ROOT)?;
    // The payload is usually followed by more script text.
    let payload: Value = serde_json::Deserializer::from_str(&body[start..])
        .into_iter::<Value>()
        .next()?
        .ok()?;

    let video_data = payload.pointer("/props/pageProps/videoData")?;
    let video_name = video_data
        .get("video_name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())?;

    let url = format!(
        "{}/{}",
        ctx.video_cdn.trim_end_matches('/'),
        video_name.trim_start_matches('/')
    );
    if !ctx.probe.exists(&url) {
        debug!(url, "video asset probe failed, trying other strategies");
        return None;
    }

    let field = |key: &str| video_data.get(key).filter(|v| !v.is_null()).cloned();
    let mut info = VideoInfo::new(url, VideoKind::DoubtnutVideo, video_format(video_name));
    info.duration = field("duration");
    info.question_id = field("question_id");
    info.answer_id = field("answer_id");
    Some(info)
}

fn script_patterns(body: &str, ctx: &VideoContext<'_>) -> Option<VideoInfo> {
    SCRIPT_VIDEO_PATTERNS.iter().find_map(|re| {
        re.captures_iter(body).find_map(|caps| {
            let candidate = caps.get(1).or_else(|| caps.get(0))?.as_str().replace("\\/", "/");
            is_valid_video_url(&candidate).then(|| {
                let url = resolve(ctx.page_url, &candidate);
                let format = video_format(&url);
                VideoInfo::new(url, VideoKind::ScriptExtracted, format)
            })
        })
    })
}

fn loose_json(body: &str, ctx: &VideoContext<'_>) -> Option<VideoInfo> {
    LOOSE_JSON_OBJECT.find_iter(body).find_map(|m| {
        let value: Value = serde_json::from_str(m.as_str()).ok()?;
        let candidate = find_video_in_json(&value)?;
        let url = resolve(ctx.page_url, &candidate);
        let format = video_format(&url);
        Some(VideoInfo::new(url, VideoKind::JsonExtracted, format))
    })
}

fn meta_tags(doc: &Document, ctx: &VideoContext<'_>) -> Option<VideoInfo> {
    VIDEO_META.iter().find_map(|(attr, value)| {
        let content = dom::meta_content(doc, attr, value).filter(|c| is_valid_video_url(c))?;
        let url = resolve(ctx.page_url, &content);
        let format = video_format(&url);
        Some(VideoInfo::new(url, VideoKind::MetaTag, format))
    })
}
