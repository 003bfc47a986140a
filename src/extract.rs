use once_cell::sync::Lazy;
use regex::Regex;

/// Compile the link pattern once. Covers watch pages (any query-param
/// order), youtu.be short links, /embed/ and /v/ paths, and the
/// youtube-nocookie.com variant. A video id is exactly 11 characters,
/// anything except quote, ampersand, question mark, slash or whitespace.
static YOUTUBE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?:https?://)?(?:www\.)?(?:youtube(?:-nocookie)?\.com/(?:(?:v|embed)/|\S*?[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .expect("failed to compile youtube link regex")
});

/// Opaque per-video token embedded in links or returned by search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// All embedded video ids, in order of appearance. Duplicates are kept;
/// no match is an empty vec, not an error.
pub fn extract_video_ids(text: &str) -> Vec<VideoId> {
    YOUTUBE_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| VideoId::new(m.as_str()))
        .collect()
}

/// Same pattern the handler re-extracts with; the host registers this as
/// its high-priority passive trigger check.
pub fn contains_link(text: &str) -> bool {
    YOUTUBE_REGEX.is_match(text)
}
