//! Core data models for the translate-and-republish flow

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target language for translation
///
/// The sync add-on supports a fixed set of languages; the active one is a
/// single configured selection, never a fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    /// Italian ("it")
    Italian,
    /// Spanish ("es")
    Spanish,
    /// German ("de")
    German,
}

impl TargetLanguage {
    /// All supported languages
    pub const ALL: [TargetLanguage; 3] = [
        TargetLanguage::Italian,
        TargetLanguage::Spanish,
        TargetLanguage::German,
    ];

    /// ISO-639-1 code used in prompts and title decoration
    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::Italian => "it",
            TargetLanguage::Spanish => "es",
            TargetLanguage::German => "de",
        }
    }

    /// Parse a language from its ISO-639-1 code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "it" => Some(TargetLanguage::Italian),
            "es" => Some(TargetLanguage::Spanish),
            "de" => Some(TargetLanguage::German),
            _ => None,
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetLanguage::Italian => write!(f, "Italian"),
            TargetLanguage::Spanish => write!(f, "Spanish"),
            TargetLanguage::German => write!(f, "German"),
        }
    }
}

/// A finalized post handed to the sync handler by the publishing host
///
/// Immutable input; one event is fired per publish action and discarded once
/// the flow completes or aborts.
#[derive(Debug, Clone)]
pub struct PublishEvent {
    /// Host-assigned post identifier
    pub post_id: u64,
    /// Post type; only "post" is handled
    pub post_type: String,
    /// Original title
    pub title: String,
    /// Original HTML body
    pub content: String,
}

impl PublishEvent {
    /// Create an event for a regular post
    pub fn new(post_id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            post_id,
            post_type: "post".to_string(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Override the post type (pages, attachments, custom types)
    pub fn with_post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = post_type.into();
        self
    }
}

/// Body of the post-creation request sent to the remote site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    /// Title, decorated with the uppercased language code
    pub title: String,
    /// Translated HTML body
    pub content: String,
    /// Remote status; always "publish"
    pub status: String,
}

impl NewPost {
    /// Build the outgoing post from a translated body
    ///
    /// The title is decorated with the uppercased language code in
    /// parentheses, e.g. "Hello" + Spanish -> "Hello (ES)".
    pub fn new(title: &str, content: String, language: TargetLanguage) -> Self {
        Self {
            title: format!("{} ({})", title, language.code().to_uppercase()),
            content,
            status: "publish".to_string(),
        }
    }
}

/// Fields of interest from the remote site's 201 response
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPost {
    /// Identifier assigned by the remote site
    pub id: u64,
    /// Public URL of the created post, when the site returns one
    #[serde(default)]
    pub link: Option<String>,
}
