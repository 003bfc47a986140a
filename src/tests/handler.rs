use std::cell::RefCell;

use crate::client::{VideoLookup, VideoMetadata};
use crate::errors::LookupError;
use crate::extract::VideoId;
use crate::handler::{handle_message, message_matches, MessageSink};

#[derive(Default)]
struct RecordingSink {
    lines: Vec<(String, String)>,
}

impl MessageSink for RecordingSink {
    fn send(&mut self, target: &str, line: &str) {
        self.lines.push((target.to_owned(), line.to_owned()));
    }
}

/// Scripted lookup: search resolves to a fixed id (or NoResults), fetch
/// fails with NotFound for listed ids and succeeds for the rest. Records
/// every call so tests can assert on the exact remote traffic.
struct ScriptedLookup {
    search_result: Option<&'static str>,
    failing_ids: Vec<&'static str>,
    search_calls: RefCell<Vec<String>>,
    fetch_calls: RefCell<Vec<String>>,
}

impl ScriptedLookup {
    fn new(search_result: Option<&'static str>) -> Self {
        Self {
            search_result,
            failing_ids: Vec::new(),
            search_calls: RefCell::new(Vec::new()),
            fetch_calls: RefCell::new(Vec::new()),
        }
    }
}

fn metadata_for(id: &str) -> VideoMetadata {
    VideoMetadata {
        title: format!("video {id}"),
        channel: "channel".to_owned(),
        published_at: "2020-01-02T03:04:05Z".to_owned(),
        duration: "PT2M10S".to_owned(),
        views: 1200,
        comments: 34,
        likes: 56,
        dislikes: 7,
    }
}

impl VideoLookup for ScriptedLookup {
    fn search_top_result(&self, _api_key: &str, query: &str) -> Result<VideoId, LookupError> {
        self.search_calls.borrow_mut().push(query.to_owned());
        self.search_result
            .map(VideoId::new)
            .ok_or(LookupError::NoResults)
    }

    fn fetch_by_id(&self, _api_key: &str, id: &VideoId) -> Result<VideoMetadata, LookupError> {
        self.fetch_calls.borrow_mut().push(id.as_str().to_owned());
        if self.failing_ids.contains(&id.as_str()) {
            return Err(LookupError::NotFound);
        }
        Ok(metadata_for(id.as_str()))
    }
}

#[test]
pub fn test_link_message_fetches_directly_without_search() {
    let lookup = ScriptedLookup::new(Some("unused00000"));
    let mut sink = RecordingSink::default();

    handle_message(
        &lookup,
        &mut sink,
        "#music",
        "listen: https://youtu.be/dQw4w9WgXcQ",
        "key",
    );

    assert!(lookup.search_calls.borrow().is_empty());
    assert_eq!(*lookup.fetch_calls.borrow(), vec!["dQw4w9WgXcQ"]);
    assert_eq!(sink.lines.len(), 1);
    assert_eq!(sink.lines[0].0, "#music");
    assert!(sink.lines[0].1.starts_with("video dQw4w9WgXcQ | channel |"));
}

#[test]
pub fn test_query_message_searches_then_fetches() {
    let lookup = ScriptedLookup::new(Some("abcdefghijk"));
    let mut sink = RecordingSink::default();

    handle_message(&lookup, &mut sink, "#music", "some song name", "key");

    assert_eq!(*lookup.search_calls.borrow(), vec!["some song name"]);
    assert_eq!(*lookup.fetch_calls.borrow(), vec!["abcdefghijk"]);
    assert_eq!(sink.lines.len(), 1);
    assert!(sink.lines[0].1.starts_with("video abcdefghijk |"));
}

#[test]
pub fn test_failed_search_emits_one_error_line_and_no_fetch() {
    let lookup = ScriptedLookup::new(None);
    let mut sink = RecordingSink::default();

    handle_message(&lookup, &mut sink, "alice", "no such song", "key");

    assert!(lookup.fetch_calls.borrow().is_empty());
    assert_eq!(sink.lines.len(), 1);
    assert_eq!(sink.lines[0].1, "NoResultsError: search returned no results");
}

#[test]
pub fn test_batch_failure_does_not_stop_remaining_ids() {
    let mut lookup = ScriptedLookup::new(None);
    lookup.failing_ids = vec!["aaaaaaaaaaa"];
    let mut sink = RecordingSink::default();

    handle_message(
        &lookup,
        &mut sink,
        "#music",
        "https://youtu.be/aaaaaaaaaaa https://youtu.be/bbbbbbbbbbb",
        "key",
    );

    assert_eq!(
        *lookup.fetch_calls.borrow(),
        vec!["aaaaaaaaaaa", "bbbbbbbbbbb"]
    );
    assert_eq!(sink.lines.len(), 2);
    assert_eq!(sink.lines[0].1, "NotFoundError: no video found for this id");
    assert!(sink.lines[1].1.starts_with("video bbbbbbbbbbb |"));
}

#[test]
pub fn test_message_matches_mirrors_extraction() {
    assert!(message_matches("https://youtu.be/dQw4w9WgXcQ"));
    assert!(!message_matches("just chatting"));
}
