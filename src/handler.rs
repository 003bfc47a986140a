use crate::client::VideoLookup;
use crate::errors::LookupError;
use crate::extract;
use crate::format;

/// Command word the host registers for explicit invocations ("yt <query>").
pub const COMMAND: &str = "yt";

/// Passive-trigger check the host registers at high priority for plain
/// channel messages.
pub fn message_matches(text: &str) -> bool {
    extract::contains_link(text)
}

/// Outbound seam to the host framework: emit one line to one recipient.
pub trait MessageSink {
    fn send(&mut self, target: &str, line: &str);
}

/// Handle one incoming message. Link-bearing messages get one emitted line
/// per embedded id, in extraction order; a failed id does not stop the rest
/// of the batch. Anything else is treated as a search query and produces
/// exactly one line. Every failure is caught here and emitted as a
/// "<KindName>: <description>" diagnostic to the same recipient, so the
/// handler never stays silent and never lets an error escape.
pub fn handle_message(
    lookup: &dyn VideoLookup,
    sink: &mut dyn MessageSink,
    target: &str,
    text: &str,
    api_key: &str,
) {
    log::debug!("youtube handler triggered on: {text}");

    let ids = extract::extract_video_ids(text);
    if ids.is_empty() {
        emit(sink, target, resolve_query(lookup, api_key, text));
        return;
    }

    for id in ids {
        let outcome = lookup
            .fetch_by_id(api_key, &id)
            .and_then(|meta| format::format_line(&meta));
        emit(sink, target, outcome);
    }
}

fn resolve_query(
    lookup: &dyn VideoLookup,
    api_key: &str,
    query: &str,
) -> Result<String, LookupError> {
    let id = lookup.search_top_result(api_key, query)?;
    let meta = lookup.fetch_by_id(api_key, &id)?;
    format::format_line(&meta)
}

fn emit(sink: &mut dyn MessageSink, target: &str, outcome: Result<String, LookupError>) {
    match outcome {
        Ok(line) => sink.send(target, &line),
        Err(err) => {
            log::warn!("youtube lookup failed: {}: {err}", err.kind());
            sink.send(target, &format!("{}: {err}", err.kind()));
        }
    }
}
