//! Publish-event handler wiring the pipeline to the publisher
//!
//! This is the seam the publishing host calls once per publish action. The
//! handler owns nothing global; its translator and publisher are injected at
//! construction, which is also what makes the flow testable offline.

use tracing::{debug, info};

use crate::core::client::{ChatTranslator, Translate};
use crate::core::config::SyncConfig;
use crate::core::errors::Result;
use crate::core::models::{CreatedPost, NewPost, PublishEvent, TargetLanguage};
use crate::pipeline::TranslationPipeline;
use crate::publisher::{Publish, WpRestPublisher};

/// What happened to one publish event
#[derive(Debug, Clone)]
pub enum SyncOutcome {
    /// Event was for a post type this add-on does not handle
    SkippedPostType,
    /// No target language is configured
    SkippedNoLanguage,
    /// Translated post was created on the remote site
    Published(CreatedPost),
}

/// Handles "post published" events: translate, then republish remotely
#[derive(Debug, Clone)]
pub struct SyncHandler<T: Translate, P: Publish> {
    pipeline: TranslationPipeline<T>,
    publisher: P,
    language: Option<TargetLanguage>,
}

impl SyncHandler<ChatTranslator, WpRestPublisher> {
    /// Build a fully wired handler from environment configuration
    pub fn from_env() -> Result<Self> {
        let config = SyncConfig::load()?;
        Self::from_config(config)
    }

    /// Build a fully wired handler from an explicit configuration
    pub fn from_config(config: SyncConfig) -> Result<Self> {
        let translator = ChatTranslator::new(config.translator.clone())?;
        let pipeline = TranslationPipeline::new(translator, config.translator.max_chunk_size);
        let publisher = WpRestPublisher::new(config.target)?;

        Ok(Self::new(pipeline, publisher, config.language))
    }
}

impl<T: Translate, P: Publish> SyncHandler<T, P> {
    /// Create a handler from its parts
    pub fn new(
        pipeline: TranslationPipeline<T>,
        publisher: P,
        language: Option<TargetLanguage>,
    ) -> Self {
        Self {
            pipeline,
            publisher,
            language,
        }
    }

    /// Process one publish event to completion or abort
    ///
    /// Non-"post" types and a missing language selection are no-ops. A
    /// translation or publish failure propagates to the caller; nothing
    /// partial is ever pushed to the remote site, and there is no retry.
    pub async fn handle(&self, event: &PublishEvent) -> Result<SyncOutcome> {
        if event.post_type != "post" {
            debug!(
                "Skipping post {}: unhandled post type {:?}",
                event.post_id, event.post_type
            );
            return Ok(SyncOutcome::SkippedPostType);
        }

        let Some(language) = self.language else {
            debug!("Skipping post {}: no target language configured", event.post_id);
            return Ok(SyncOutcome::SkippedNoLanguage);
        };

        let translated = self
            .pipeline
            .translate_document(&event.content, language)
            .await?;

        let post = NewPost::new(&event.title, translated, language);
        let created = self.publisher.publish(&post).await?;

        info!(
            "Post {} translated to {} and republished as remote post {}",
            event.post_id, language, created.id
        );

        Ok(SyncOutcome::Published(created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::SyncError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct MockTranslator {
        calls: AtomicUsize,
        fail: bool,
    }

    impl MockTranslator {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl Translate for MockTranslator {
        async fn translate(&self, chunk: &str, _language: TargetLanguage) -> Result<String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail && call == 2 {
                return Err(SyncError::Api {
                    status: 502,
                    message: "bad gateway".to_string(),
                });
            }
            Ok(chunk.to_uppercase())
        }
    }

    #[derive(Default)]
    struct MockPublisher {
        calls: AtomicUsize,
        last_post: Mutex<Option<NewPost>>,
    }

    #[async_trait]
    impl Publish for MockPublisher {
        async fn publish(&self, post: &NewPost) -> Result<CreatedPost> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_post.lock().unwrap() = Some(post.clone());
            Ok(CreatedPost {
                id: 99,
                link: Some("https://target.example.com/?p=99".to_string()),
            })
        }
    }

    fn handler(
        fail_translation: bool,
        language: Option<TargetLanguage>,
    ) -> SyncHandler<MockTranslator, MockPublisher> {
        let pipeline = TranslationPipeline::new(MockTranslator::new(fail_translation), 40);
        SyncHandler::new(pipeline, MockPublisher::default(), language)
    }

    const BODY: &str = "Sentence one. Sentence two is much longer and exceeds \
                        the budget on its own possibly. Sentence three.";

    #[tokio::test]
    async fn test_publish_event_flows_end_to_end() {
        let handler = handler(false, Some(TargetLanguage::Spanish));
        let event = PublishEvent::new(1, "Hello", BODY);

        let outcome = handler.handle(&event).await.unwrap();

        assert!(matches!(outcome, SyncOutcome::Published(ref p) if p.id == 99));
        assert_eq!(handler.publisher.calls.load(Ordering::SeqCst), 1);

        let sent = handler.publisher.last_post.lock().unwrap().clone().unwrap();
        assert_eq!(sent.title, "Hello (ES)");
        assert!(sent.content.starts_with("SENTENCE ONE."));
        assert_eq!(sent.status, "publish");
    }

    #[tokio::test]
    async fn test_translation_failure_never_publishes() {
        let handler = handler(true, Some(TargetLanguage::Italian));
        let event = PublishEvent::new(2, "Hello", BODY);

        let result = handler.handle(&event).await;

        assert!(result.is_err());
        assert_eq!(handler.publisher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unhandled_post_type_is_skipped() {
        let handler = handler(false, Some(TargetLanguage::German));
        let event = PublishEvent::new(3, "Hello", BODY).with_post_type("page");

        let outcome = handler.handle(&event).await.unwrap();

        assert!(matches!(outcome, SyncOutcome::SkippedPostType));
        assert_eq!(handler.pipeline.translator.calls.load(Ordering::SeqCst), 0);
        assert_eq!(handler.publisher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_language_skips_before_pipeline() {
        let handler = handler(false, None);
        let event = PublishEvent::new(4, "Hello", BODY);

        let outcome = handler.handle(&event).await.unwrap();

        assert!(matches!(outcome, SyncOutcome::SkippedNoLanguage));
        assert_eq!(handler.pipeline.translator.calls.load(Ordering::SeqCst), 0);
        assert_eq!(handler.publisher.calls.load(Ordering::SeqCst), 0);
    }
}
