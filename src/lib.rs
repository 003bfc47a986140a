//! YouTube lookup plugin for a chat bot.
//!
//! Given an incoming channel message, either extracts embedded YouTube
//! links and fetches each video's metadata, or treats the whole message as
//! a search query and resolves the top result. Either way the outcome is a
//! single formatted line per video, handed back to the host through
//! [`handler::MessageSink`].
//!
//! The host framework owns command registration, dispatch and the actual
//! message transport; it registers [`handler::COMMAND`] as an explicit
//! command and [`handler::message_matches`] as a high-priority passive
//! trigger, then calls [`handler::handle_message`] with the configured API
//! key for every hit.

pub mod client;
pub mod config;
pub mod errors;
pub mod extract;
pub mod format;
pub mod handler;
#[cfg(test)]
mod tests;

pub use client::{ApiResponse, VideoLookup, VideoMetadata, YouTubeClient};
pub use config::Config;
pub use errors::LookupError;
pub use extract::{contains_link, extract_video_ids, VideoId};
pub use handler::{handle_message, message_matches, MessageSink, COMMAND};
