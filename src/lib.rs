//! Post Sync Translator - chunked LLM translation for republished posts
//!
//! This library implements the reusable core of a "translate on publish"
//! add-on: it splits a post's HTML body into sentence-aligned chunks, sends
//! each chunk to a chat-completion API for translation, reassembles the
//! result in order, and creates the translated post on a remote WordPress
//! site over its REST API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod pipeline;
pub mod publisher;
pub mod sync;

// Re-export key types for convenience
pub use crate::core::{
    chunker::Chunker,
    client::{ChatTranslator, Translate},
    config::{SyncConfig, TargetSiteConfig, TranslatorConfig},
    errors::{Result, SyncError},
    models::{CreatedPost, NewPost, PublishEvent, TargetLanguage},
};

pub use pipeline::TranslationPipeline;
pub use publisher::{Publish, WpRestPublisher};
pub use sync::{SyncHandler, SyncOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
