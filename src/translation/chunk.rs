//! Sentence-boundary chunking for long translation inputs
//!
//! Translation endpoints behave poorly with very long query strings, so texts
//! over [`MAX_CHUNK_CHARS`] characters are split into bounded chunks along
//! sentence boundaries and translated one chunk at a time. The split is
//! lossless: concatenating the chunks reproduces the input exactly, so the
//! translated chunks can be joined back with no added separators.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum characters per translation chunk
pub const MAX_CHUNK_CHARS: usize = 500;

/// Sentence terminator followed by whitespace. The match is kept attached to
/// the preceding sentence so chunk boundaries carry their own whitespace.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// Split `text` into chunks of at most [`MAX_CHUNK_CHARS`] characters.
///
/// Texts at or under the limit come back as a single chunk. Longer texts are
/// cut on sentence boundaries and greedily packed: pieces accumulate into the
/// current chunk while they fit, and a piece that would overflow starts a new
/// chunk. A single sentence longer than the limit is not split further.
///
/// # Example
///
/// ```
/// use polyread::translation::chunk::split_into_chunks;
///
/// let chunks = split_into_chunks("Hello world");
/// assert_eq!(chunks, vec!["Hello world"]);
/// ```
pub fn split_into_chunks(text: &str) -> Vec<String> {
    if text.chars().count() <= MAX_CHUNK_CHARS {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for piece in split_sentences(text) {
        let piece_len = piece.chars().count();
        if current_len > 0 && current_len + piece_len > MAX_CHUNK_CHARS {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push_str(piece);
        current_len += piece_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Split `text` into sentence pieces, each keeping its trailing terminator
/// and whitespace. The trailing fragment after the last boundary (if any) is
/// returned as the final piece.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        pieces.push(&text[start..boundary.end()]);
        start = boundary.end();
    }

    if start < text.len() {
        pieces.push(&text[start..]);
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A paragraph of `count` short sentences, each ending ". "
    fn sentences(count: usize) -> String {
        (0..count)
            .map(|i| format!("This is sentence number {}. ", i))
            .collect()
    }

    #[test]
    fn test_short_text_is_single_chunk() {
        let chunks = split_into_chunks("Hello world");
        assert_eq!(chunks, vec!["Hello world".to_string()]);
    }

    #[test]
    fn test_text_at_limit_is_single_chunk() {
        let text = "x".repeat(MAX_CHUNK_CHARS);
        let chunks = split_into_chunks(&text);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }

    #[test]
    fn test_long_text_splits_into_bounded_chunks() {
        let text = sentences(40);
        assert!(text.chars().count() > MAX_CHUNK_CHARS);

        let chunks = split_into_chunks(&text);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= MAX_CHUNK_CHARS);
        }
    }

    #[test]
    fn test_split_is_lossless() {
        let text = sentences(40);
        let chunks = split_into_chunks(&text);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_delimiters_stay_with_preceding_sentence() {
        let text = format!("{}Tail without terminator", sentences(30));
        let chunks = split_into_chunks(&text);

        assert_eq!(chunks.concat(), text);
        // Every chunk except possibly the last ends with the retained
        // terminator-plus-whitespace boundary.
        for chunk in &chunks[..chunks.len() - 1] {
            assert!(chunk.ends_with(". "), "chunk ended with {:?}", chunk);
        }
    }

    #[test]
    fn test_oversized_sentence_is_not_split() {
        // One sentence longer than the limit, surrounded by short ones.
        let giant = format!("{}. ", "y".repeat(600));
        let text = format!("Short one. {}Short two.", giant);
        assert!(text.chars().count() > MAX_CHUNK_CHARS);

        let chunks = split_into_chunks(&text);
        assert!(chunks.iter().any(|c| c.contains(&"y".repeat(600))));
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_exclamation_and_question_boundaries() {
        let long_filler = sentences(30);
        let text = format!("Really?! Yes! Are you sure? {}", long_filler);
        let chunks = split_into_chunks(&text);
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_multibyte_text_counts_chars_not_bytes() {
        // 400 two-byte chars per sentence: over 500 bytes but under 500 chars.
        let sentence = format!("{}. ", "é".repeat(400));
        let text = format!("{}{}", sentence, sentence);

        let chunks = split_into_chunks(&text);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks.concat(), text);
    }
}
