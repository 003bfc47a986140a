use crate::errors::LookupError;
use crate::extract::VideoId;
use serde::Deserialize;
use serde_json::Value;

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const VIDEOS_URL: &str = "https://www.googleapis.com/youtube/v3/videos";

/// A service response, classified before any field extraction.
#[derive(Debug, Clone)]
pub enum ApiResponse {
    Success(Vec<Value>),
    Failure {
        code: i64,
        message: String,
        reason: Option<String>,
    },
}

/// A body carrying an "error" object is always a Failure, whatever else is
/// present. A missing "items" array counts as a zero-item Success.
pub fn classify(body: Value) -> ApiResponse {
    if let Some(error) = body.get("error") {
        let code = error.get("code").and_then(|v| v.as_i64()).unwrap_or(0);
        let message = error
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown error")
            .to_owned();
        let reason = error
            .get("errors")
            .and_then(|v| v.as_array())
            .and_then(|errors| errors.first())
            .and_then(|e| e.get("reason"))
            .and_then(|v| v.as_str())
            .map(str::to_owned);
        return ApiResponse::Failure {
            code,
            message,
            reason,
        };
    }

    let items = body
        .get("items")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default();
    ApiResponse::Success(items)
}

/// Everything the formatter needs for one video. All fields are required;
/// a success item missing any of them fails decoding instead of surfacing
/// later as a formatting fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: String,
    pub channel: String,
    /// RFC 3339 publish timestamp, as returned by the service.
    pub published_at: String,
    /// ISO 8601 duration, e.g. "PT4M13S".
    pub duration: String,
    pub views: u64,
    pub comments: u64,
    pub likes: u64,
    pub dislikes: u64,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    snippet: RawSnippet,
    statistics: RawStatistics,
    #[serde(rename = "contentDetails")]
    content_details: RawContentDetails,
}

#[derive(Debug, Deserialize)]
struct RawSnippet {
    title: String,
    #[serde(rename = "channelTitle")]
    channel_title: String,
    #[serde(rename = "publishedAt")]
    published_at: String,
}

// The service serializes counters as JSON strings
#[derive(Debug, Deserialize)]
struct RawStatistics {
    #[serde(rename = "viewCount", deserialize_with = "string_u64")]
    view_count: u64,
    #[serde(rename = "commentCount", deserialize_with = "string_u64")]
    comment_count: u64,
    #[serde(rename = "likeCount", deserialize_with = "string_u64")]
    like_count: u64,
    #[serde(rename = "dislikeCount", deserialize_with = "string_u64")]
    dislike_count: u64,
}

#[derive(Debug, Deserialize)]
struct RawContentDetails {
    duration: String,
}

fn string_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse::<u64>().map_err(serde::de::Error::custom)
}

impl VideoMetadata {
    pub(crate) fn from_item(item: Value) -> Result<Self, LookupError> {
        let raw: RawItem = serde_json::from_value(item)
            .map_err(|e| LookupError::Decode(format!("video item: {e}")))?;
        Ok(Self {
            title: raw.snippet.title,
            channel: raw.snippet.channel_title,
            published_at: raw.snippet.published_at,
            duration: raw.content_details.duration,
            views: raw.statistics.view_count,
            comments: raw.statistics.comment_count,
            likes: raw.statistics.like_count,
            dislikes: raw.statistics.dislike_count,
        })
    }
}

/// The two remote operations, behind a trait so the handler can be driven
/// by a scripted lookup in tests.
pub trait VideoLookup {
    /// Resolve free text to the best match's video id.
    fn search_top_result(&self, api_key: &str, query: &str) -> Result<VideoId, LookupError>;

    /// Fetch full metadata for one video id.
    fn fetch_by_id(&self, api_key: &str, id: &VideoId) -> Result<VideoMetadata, LookupError>;
}

pub struct YouTubeClient {
    http: reqwest::blocking::Client,
}

impl YouTubeClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
        }
    }

    fn get_classified(&self, url: &str, params: &[(&str, &str)]) -> Result<ApiResponse, LookupError> {
        let body: Value = self.http.get(url).query(params).send()?.json()?;
        Ok(classify(body))
    }
}

impl Default for YouTubeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoLookup for YouTubeClient {
    fn search_top_result(&self, api_key: &str, query: &str) -> Result<VideoId, LookupError> {
        log::debug!("youtube search: {query}");
        let response = self.get_classified(
            SEARCH_URL,
            &[
                ("key", api_key),
                ("part", "snippet"),
                ("maxResults", "1"),
                ("q", query),
            ],
        )?;

        let items = match response {
            ApiResponse::Failure {
                code,
                message,
                reason,
            } => {
                return Err(LookupError::RemoteApi {
                    code,
                    message,
                    reason,
                })
            }
            ApiResponse::Success(items) => items,
        };

        let first = items.first().ok_or(LookupError::NoResults)?;
        first
            .get("id")
            .and_then(|id| id.get("videoId"))
            .and_then(|v| v.as_str())
            .map(VideoId::new)
            .ok_or_else(|| LookupError::Decode("search item has no id.videoId".to_owned()))
    }

    fn fetch_by_id(&self, api_key: &str, id: &VideoId) -> Result<VideoMetadata, LookupError> {
        log::debug!("youtube fetch: {id}");
        let response = self.get_classified(
            VIDEOS_URL,
            &[
                ("part", "snippet,statistics,contentDetails"),
                ("id", id.as_str()),
                ("key", api_key),
            ],
        )?;

        let items = match response {
            ApiResponse::Failure {
                code,
                message,
                reason,
            } => {
                return Err(LookupError::RemoteApi {
                    code,
                    message,
                    reason,
                })
            }
            ApiResponse::Success(items) => items,
        };

        let first = items.into_iter().next().ok_or(LookupError::NotFound)?;
        VideoMetadata::from_item(first)
    }
}
