//! Sentence-boundary-aware chunk splitting
//!
//! Splits HTML content into bounded-size chunks so each one stays under the
//! translation API's effective token limit. Boundary detection is a naive
//! `.`/`!`/`?`-followed-by-whitespace rule; abbreviations, decimals, and
//! markup tags are not treated specially.

use regex::Regex;
use std::sync::OnceLock;

/// Matches a sentence-ending punctuation mark followed by whitespace
fn boundary() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"[.!?]\s+").unwrap())
}

/// Greedy sentence bin-packer against a character budget
#[derive(Debug, Clone)]
pub struct Chunker {
    max_chunk_size: usize,
}

impl Chunker {
    /// Create a chunker with the given character budget
    pub fn new(max_chunk_size: usize) -> Self {
        Self { max_chunk_size }
    }

    /// Split `text` into ordered chunks, preferring sentence boundaries
    ///
    /// Each sentence is accumulated with a single trailing space; a chunk is
    /// closed when appending the next sentence would exceed the budget. A
    /// sentence that alone exceeds the budget becomes its own oversized chunk
    /// rather than being split mid-sentence. Empty input yields no chunks.
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::new();
        let mut current = String::new();

        for sentence in self.sentences(text) {
            if !current.is_empty() && current.len() + sentence.len() > self.max_chunk_size {
                chunks.push(std::mem::take(&mut current));
            }
            current.push_str(sentence);
            current.push(' ');
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }

    /// Segment text into sentences, keeping the terminating punctuation
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut out = Vec::new();
        let mut last = 0;

        for m in boundary().find_iter(text) {
            // The punctuation mark is a single ASCII byte at the match start.
            out.push(&text[last..m.start() + 1]);
            last = m.end();
        }

        if last < text.len() {
            out.push(&text[last..]);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let chunker = Chunker::new(800);
        assert!(chunker.split("").is_empty());
    }

    #[test]
    fn test_short_text_is_one_chunk() {
        let chunker = Chunker::new(800);
        let chunks = chunker.split("Hello world. Second sentence!");
        assert_eq!(chunks, vec!["Hello world. Second sentence! "]);
    }

    #[test]
    fn test_budget_scenario_yields_three_chunks() {
        let chunker = Chunker::new(40);
        let body = "Sentence one. Sentence two is much longer and exceeds \
                    the budget on its own possibly. Sentence three.";
        let chunks = chunker.split(body);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], "Sentence one. ");
        assert!(chunks[1].starts_with("Sentence two"));
        assert_eq!(chunks[2], "Sentence three. ");
    }

    #[test]
    fn test_oversized_sentence_is_never_split() {
        let chunker = Chunker::new(10);
        let chunks = chunker.split("This single sentence is far beyond the budget.");

        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].len() > 10);
    }

    #[test]
    fn test_concatenation_reproduces_text_modulo_spacing() {
        let chunker = Chunker::new(30);
        let body = "One two three. Four five six! Seven eight? Nine ten.";
        let chunks = chunker.split(body);

        // Inter-sentence whitespace is normalized to a single trailing space
        // per sentence, so the reassembly matches after the same normalization.
        let reassembled: String = chunks.concat();
        let normalized = body
            .split_inclusive(['.', '!', '?'])
            .map(|s| s.trim_start())
            .collect::<Vec<_>>()
            .join(" ")
            + " ";
        assert_eq!(reassembled, normalized);
    }

    #[test]
    fn test_chunks_respect_budget_or_are_single_sentences() {
        let chunker = Chunker::new(25);
        let body = "Aa bb cc. Dd ee ff. A very long sentence well over the cap here. Gg hh.";
        for chunk in chunker.split(body) {
            let sentence_count = boundary().find_iter(chunk.trim_end()).count() + 1;
            assert!(chunk.len() <= 25 + 1 || sentence_count == 1, "chunk: {:?}", chunk);
        }
    }

    #[test]
    fn test_determinism() {
        let chunker = Chunker::new(50);
        let body = "Alpha beta. Gamma delta! Epsilon zeta? Eta theta.";
        assert_eq!(chunker.split(body), chunker.split(body));
    }

    #[test]
    fn test_markup_passes_through_untouched() {
        let chunker = Chunker::new(800);
        let body = "<p>First paragraph.</p> <p>Second paragraph.</p>";
        let chunks = chunker.split(body);
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].contains("<p>"));
    }
}
