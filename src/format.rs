use crate::client::VideoMetadata;
use crate::errors::LookupError;
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;

// mIRC color control bytes understood by the chat protocol
const GREEN: &str = "\x0303";
const RED: &str = "\x0304";
const RESET: &str = "\x03";

static DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$")
        .expect("failed to compile duration regex")
});

/// Render one video as the single display line sent back to the channel.
/// Pure function of the metadata; the same record always yields the same
/// bytes.
pub fn format_line(meta: &VideoMetadata) -> Result<String, LookupError> {
    let date = format_date(&meta.published_at)?;
    let duration = parse_duration(&meta.duration)?;
    Ok(format!(
        "{title} | {channel} | Uploaded: {date} | Duration: {duration} | Views: {views} | Comments: {comments} | {GREEN}Likes: {likes}{RESET} | {RED}Dislikes: {dislikes}{RESET}",
        title = meta.title,
        channel = meta.channel,
        views = abbreviate(meta.views),
        comments = abbreviate(meta.comments),
        likes = abbreviate(meta.likes),
        dislikes = abbreviate(meta.dislikes),
    ))
}

/// Calendar-date portion of an RFC 3339 timestamp, no time-of-day.
pub fn format_date(raw: &str) -> Result<String, LookupError> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|e| LookupError::Decode(format!("publish timestamp {raw:?}: {e}")))?;
    Ok(parsed.format("%Y-%m-%d").to_string())
}

/// ISO 8601 duration ("PT1H2M3S") to "1h 2m 3s". Components absent in the
/// source count as zero; zero components are omitted from the output, so an
/// all-zero duration renders as the empty string.
pub fn parse_duration(raw: &str) -> Result<String, LookupError> {
    let caps = DURATION_REGEX
        .captures(raw)
        .ok_or_else(|| LookupError::DurationParse(raw.to_owned()))?;

    let component = |idx: usize| -> u64 {
        caps.get(idx)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    let rendered: Vec<String> = [(component(1), "h"), (component(2), "m"), (component(3), "s")]
        .iter()
        .filter(|(value, _)| *value != 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();
    Ok(rendered.join(" "))
}

const SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// Abbreviate a count with a magnitude suffix: 1500 -> "1.5K". One decimal
/// place, trailing ".0" dropped.
pub fn abbreviate(count: u64) -> String {
    let mut value = count as f64;
    let mut magnitude = 0;
    while value > 1000.0 && magnitude < SUFFIXES.len() - 1 {
        value /= 1000.0;
        magnitude += 1;
    }

    let mut rendered = format!("{value:.1}");
    if let Some(stripped) = rendered.strip_suffix(".0") {
        rendered = stripped.to_owned();
    }
    format!("{rendered}{}", SUFFIXES[magnitude])
}
