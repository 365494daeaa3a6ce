// Text segmentation and document metrics.
// Shared by the document-level detector and the sentence-level humanizer.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Metrics;

static PARAGRAPH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Lower-case, trim and split on whitespace runs. Empty input yields no words.
pub fn split_words(text: &str) -> Vec<String> {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .map(|w| w.to_string())
        .collect()
}

/// Split into sentences, keeping each delimiter run and its trailing
/// whitespace attached to the preceding chunk.
///
/// Invariant: `split_sentences(text).concat() == text` for every input, so a
/// caller can splice per-sentence rewrites back into the original document.
/// Text without terminal punctuation yields a final sentence with no
/// delimiter.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut chars = text.char_indices().peekable();
    let mut start = 0usize;

    while let Some((_, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        // Consume the rest of the delimiter run ("...", "?!").
        while matches!(chars.peek(), Some((_, '.' | '!' | '?'))) {
            chars.next();
        }
        // Trailing whitespace belongs to this sentence.
        while matches!(chars.peek(), Some((_, c)) if c.is_whitespace()) {
            chars.next();
        }
        let end = chars.peek().map(|(i, _)| *i).unwrap_or(text.len());
        sentences.push(text[start..end].to_string());
        start = end;
    }

    if start < text.len() {
        sentences.push(text[start..].to_string());
    }

    sentences
}

/// Split on blank lines, discarding chunks that are empty after trimming.
/// Chunks are returned untrimmed so their character lengths reflect the
/// original text.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_SPLIT_RE
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .map(|p| p.to_string())
        .collect()
}

/// Derive the read-only metrics record for one analysis pass.
///
/// Averages guard against empty segments with `max(1)` denominators so the
/// extractor never divides by zero on degenerate input.
pub fn compute_metrics(text: &str) -> Metrics {
    let words = split_words(text);
    let sentences = split_sentences(text);
    let paragraphs = split_paragraphs(text);

    let word_count = words.len();
    let sentence_count = sentences.len();
    let paragraph_count = paragraphs.len();

    let unique_word_count = words.iter().collect::<HashSet<_>>().len();

    let sentence_chars: usize = sentences.iter().map(|s| s.trim().chars().count()).sum();
    let paragraph_chars: usize = paragraphs.iter().map(|p| p.chars().count()).sum();

    Metrics {
        word_count,
        sentence_count,
        paragraph_count,
        avg_words_per_sentence: word_count as f64 / sentence_count.max(1) as f64,
        avg_words_per_paragraph: word_count as f64 / paragraph_count.max(1) as f64,
        unique_word_count,
        vocabulary_diversity: unique_word_count as f64 / word_count.max(1) as f64,
        avg_sentence_length: sentence_chars as f64 / sentence_count.max(1) as f64,
        avg_paragraph_length: paragraph_chars as f64 / paragraph_count.max(1) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_lowercases() {
        let words = split_words("  The Quick   Fox ");
        assert_eq!(words, vec!["the", "quick", "fox"]);
        assert!(split_words("").is_empty());
        assert!(split_words("   \n\t ").is_empty());
    }

    #[test]
    fn test_split_sentences_reconstructs() {
        let cases = [
            "First. Second! Third?",
            "One sentence without terminator",
            "Ellipsis... then more?!  And a tail",
            "",
            "...",
            "   \n  ",
            "句子一。拉丁 mix. done.",
        ];
        for text in cases {
            let sentences = split_sentences(text);
            assert_eq!(sentences.concat(), text, "failed on {text:?}");
        }
    }

    #[test]
    fn test_split_sentences_keeps_delimiters() {
        let sentences = split_sentences("Hello there. Bye!");
        assert_eq!(sentences, vec!["Hello there. ", "Bye!"]);
    }

    #[test]
    fn test_split_sentences_trailing_remainder() {
        let sentences = split_sentences("Done. no punctuation at end");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], "no punctuation at end");
    }

    #[test]
    fn test_split_paragraphs_discards_blank() {
        let paras = split_paragraphs("First paragraph.\n\n\n  \nSecond paragraph.");
        assert_eq!(paras.len(), 2);
        assert!(split_paragraphs("\n\n \n\n").is_empty());
    }

    #[test]
    fn test_compute_metrics_basic() {
        let m = compute_metrics("One two three. Four five six.\n\nSeven eight.");
        assert_eq!(m.word_count, 8);
        assert_eq!(m.sentence_count, 3);
        assert_eq!(m.paragraph_count, 2);
        assert_eq!(m.unique_word_count, 8);
        assert!((m.vocabulary_diversity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_metrics_empty_input() {
        let m = compute_metrics("");
        assert_eq!(m.word_count, 0);
        assert_eq!(m.sentence_count, 0);
        assert_eq!(m.avg_words_per_sentence, 0.0);
        assert_eq!(m.vocabulary_diversity, 0.0);
    }
}
