#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("youtube api error {code}: {message}{}", reason_suffix(.reason))]
    RemoteApi {
        code: i64,
        message: String,
        reason: Option<String>,
    },

    #[error("search returned no results")]
    NoResults,

    #[error("no video found for this id")]
    NotFound,

    #[error("malformed duration string: {0:?}")]
    DurationParse(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl LookupError {
    /// Stable kind name prefixed to every emitted diagnostic line.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::RemoteApi { .. } => "RemoteApiError",
            LookupError::NoResults => "NoResultsError",
            LookupError::NotFound => "NotFoundError",
            LookupError::DurationParse(_) => "DurationParseError",
            LookupError::Transport(_) => "TransportError",
            LookupError::Decode(_) => "DecodeError",
        }
    }
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(r) => format!(" ({r})"),
        None => String::new(),
    }
}
