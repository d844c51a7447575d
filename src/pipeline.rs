//! Sequential chunk-translate-reassemble pipeline

use tracing::{debug, warn};

use crate::core::chunker::Chunker;
use crate::core::client::Translate;
use crate::core::errors::Result;
use crate::core::models::TargetLanguage;

/// Drives the chunker and a translator over a whole document
///
/// Chunks are translated strictly in order, one at a time, and the results
/// are concatenated as-is. The first failed chunk aborts the document; no
/// partial output ever leaves the pipeline.
#[derive(Debug, Clone)]
pub struct TranslationPipeline<T: Translate> {
    chunker: Chunker,
    pub(crate) translator: T,
}

impl<T: Translate> TranslationPipeline<T> {
    /// Create a pipeline with the given translator and chunk budget
    pub fn new(translator: T, max_chunk_size: usize) -> Self {
        Self {
            chunker: Chunker::new(max_chunk_size),
            translator,
        }
    }

    /// Translate a whole document body
    pub async fn translate_document(
        &self,
        body: &str,
        language: TargetLanguage,
    ) -> Result<String> {
        let chunks = self.chunker.split(body);
        debug!("Split document into {} chunks", chunks.len());

        let mut translated = String::new();

        for (index, chunk) in chunks.iter().enumerate() {
            match self.translator.translate(chunk, language).await {
                Ok(text) => translated.push_str(&text),
                Err(e) => {
                    warn!(
                        "Aborting document: chunk {}/{} failed: {}",
                        index + 1,
                        chunks.len(),
                        e
                    );
                    return Err(e);
                }
            }
        }

        Ok(translated)
    }
}
