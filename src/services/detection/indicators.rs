// Indicator extraction.
// Each function maps segmented text to a score in [0, 1]. Indicators are
// independent; the scoring model owns how they combine.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Indicators;
use crate::services::lexicon::{
    containment_count, ACADEMIC_WORDS, AI_PATTERNS, EMOTIONAL_WORDS, FORMAL_PHRASES,
    PERSONAL_PRONOUNS, TECHNICAL_TERMS,
};

// "Overly regular" grammar shapes, matched against the original-case text.
static PERFECT_GRAMMAR_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Capitalized sentence ending in terminal punctuation.
        Regex::new(r"[A-Z][^.!?]*[.!?]").unwrap(),
        // Article followed by a noun-like word.
        Regex::new(r"\b(?:the|a|an)\s+\w+").unwrap(),
        // Progressive tense.
        Regex::new(r"\b(?:is|are|was|were)\s+\w+ing").unwrap(),
        // Past perfect.
        Regex::new(r"\b(?:have|has|had)\s+\w+ed").unwrap(),
    ]
});

/// Ratio of distinct 3-word phrases that occur more than once, over all
/// overlapping 3-word phrases. 0 when fewer than two phrases exist.
pub fn repetitive_phrases(words: &[String]) -> f64 {
    if words.len() < 4 {
        return 0.0;
    }
    let mut counts: HashMap<&[String], usize> = HashMap::new();
    for window in words.windows(3) {
        *counts.entry(window).or_insert(0) += 1;
    }
    let total = words.len() - 2;
    let repeated = counts.values().filter(|&&c| c > 1).count();
    (repeated as f64 / total as f64).min(1.0)
}

/// Formal/transitional phrase usage; five distinct phrases saturate the score.
pub fn formal_language(clean_text: &str) -> f64 {
    (containment_count(clean_text, FORMAL_PHRASES) as f64 / 5.0).min(1.0)
}

/// Low variance of sentence character lengths reads as machine-consistent.
pub fn consistent_structure(sentences: &[String]) -> f64 {
    if sentences.len() < 2 {
        return 0.0;
    }
    let lengths: Vec<f64> = sentences
        .iter()
        .map(|s| s.trim().chars().count() as f64)
        .collect();
    (1.0 - variance(&lengths) / 500.0).max(0.0)
}

/// Few personal pronouns push the score toward 1.
pub fn lack_of_personal_touch(clean_text: &str) -> f64 {
    let count = containment_count(clean_text, PERSONAL_PRONOUNS);
    (1.0 - count as f64 / 10.0).max(0.0)
}

/// Technical jargon usage; four distinct terms saturate the score.
pub fn technical_terminology(clean_text: &str) -> f64 {
    (containment_count(clean_text, TECHNICAL_TERMS) as f64 / 4.0).min(1.0)
}

/// Mean fraction of words longer than six characters, per sentence.
pub fn sentence_complexity(sentences: &[String]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let total: f64 = sentences
        .iter()
        .map(|sentence| {
            let words: Vec<&str> = sentence.split_whitespace().collect();
            if words.is_empty() {
                return 0.0;
            }
            let long = words.iter().filter(|w| w.chars().count() > 6).count();
            long as f64 / words.len() as f64
        })
        .sum();
    total / sentences.len() as f64
}

/// Low variance of paragraph character lengths.
pub fn paragraph_uniformity(paragraphs: &[String]) -> f64 {
    if paragraphs.len() < 2 {
        return 0.0;
    }
    let lengths: Vec<f64> = paragraphs.iter().map(|p| p.chars().count() as f64).collect();
    (1.0 - variance(&lengths) / 5000.0).max(0.0)
}

/// Fraction of unique words longer than eight characters.
pub fn vocabulary_sophistication(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&String> = words.iter().collect();
    let sophisticated = unique.iter().filter(|w| w.chars().count() > 8).count();
    sophisticated as f64 / unique.len().max(1) as f64
}

/// Characteristic AI connective phrases; three distinct matches saturate.
pub fn ai_patterns(clean_text: &str) -> f64 {
    (containment_count(clean_text, AI_PATTERNS) as f64 / 3.0).min(1.0)
}

/// Few emotion words push the score toward 1.
pub fn emotional_expression(clean_text: &str) -> f64 {
    let count = containment_count(clean_text, EMOTIONAL_WORDS);
    (1.0 - count as f64 / 8.0).max(0.0)
}

/// Density of overly regular grammar patterns in the original-case text.
pub fn perfect_grammar(original_text: &str) -> f64 {
    let total: usize = PERFECT_GRAMMAR_RES
        .iter()
        .map(|re| re.find_iter(original_text).count())
        .sum();
    (total as f64 / 20.0).min(1.0)
}

/// Word-count signatures as a coarse structure fingerprint: low variety of
/// signatures means repetitive structure.
pub fn repetitive_structure(sentences: &[String]) -> f64 {
    if sentences.len() < 3 {
        return 0.0;
    }
    let signatures: Vec<usize> = sentences
        .iter()
        .map(|s| s.split_whitespace().count())
        .collect();
    let distinct: HashSet<usize> = signatures.iter().copied().collect();
    let variety = distinct.len() as f64 / signatures.len() as f64;
    (1.0 - variety).max(0.0)
}

/// Academic-register vocabulary; three distinct words saturate.
pub fn academic_style(clean_text: &str) -> f64 {
    (containment_count(clean_text, ACADEMIC_WORDS) as f64 / 3.0).min(1.0)
}

/// Compute all thirteen indicators from one segmentation pass.
///
/// `clean_text` is the lower-cased, trimmed document; `original_text` keeps
/// its case for the grammar patterns.
pub fn compute_indicators(
    clean_text: &str,
    original_text: &str,
    words: &[String],
    sentences: &[String],
    paragraphs: &[String],
) -> Indicators {
    Indicators {
        repetitive_phrases: repetitive_phrases(words),
        formal_language: formal_language(clean_text),
        consistent_structure: consistent_structure(sentences),
        lack_of_personal_touch: lack_of_personal_touch(clean_text),
        technical_terminology: technical_terminology(clean_text),
        sentence_complexity: sentence_complexity(sentences),
        paragraph_uniformity: paragraph_uniformity(paragraphs),
        vocabulary_sophistication: vocabulary_sophistication(words),
        ai_patterns: ai_patterns(clean_text),
        emotional_expression: emotional_expression(clean_text),
        perfect_grammar: perfect_grammar(original_text),
        repetitive_structure: repetitive_structure(sentences),
        academic_style: academic_style(clean_text),
    }
}

fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::text_processor::{split_paragraphs, split_sentences, split_words};

    fn words_of(text: &str) -> Vec<String> {
        split_words(text)
    }

    #[test]
    fn test_repetitive_phrases_detects_repeats() {
        let repeated = words_of("the quick fox jumped and the quick fox ran");
        assert!(repetitive_phrases(&repeated) > 0.0);

        let varied = words_of("every single word differs across this short example");
        assert_eq!(repetitive_phrases(&varied), 0.0);
    }

    #[test]
    fn test_repetitive_phrases_short_input() {
        assert_eq!(repetitive_phrases(&words_of("one two three")), 0.0);
        assert_eq!(repetitive_phrases(&words_of("")), 0.0);
    }

    #[test]
    fn test_formal_language_monotonic_up_to_cap() {
        // Holding all else fixed, adding distinct formal phrases strictly
        // increases the score until five saturate it.
        let mut prev = formal_language("");
        let phrases = [
            "furthermore",
            "moreover",
            "additionally",
            "consequently",
            "therefore",
        ];
        let mut text = String::new();
        for p in phrases {
            text.push_str(p);
            text.push(' ');
            let score = formal_language(&text);
            assert!(score > prev);
            prev = score;
        }
        assert_eq!(prev, 1.0);
        text.push_str("thus ");
        assert_eq!(formal_language(&text), 1.0);
    }

    #[test]
    fn test_consistent_structure_uniform_vs_varied() {
        let uniform = split_sentences("Aaaa bbbb cccc. Dddd eeee ffff. Gggg hhhh iiii.");
        let varied =
            split_sentences("Hi. This one is a much longer sentence with many extra words in it. Ok.");
        assert!(consistent_structure(&uniform) > consistent_structure(&varied));
        assert_eq!(consistent_structure(&split_sentences("One sentence.")), 0.0);
    }

    #[test]
    fn test_personal_touch_and_emotion_invert_counts() {
        assert_eq!(lack_of_personal_touch("the report was filed"), 1.0);
        assert!(lack_of_personal_touch("i told you my thoughts") < 1.0);

        assert_eq!(emotional_expression("the quarterly report"), 1.0);
        assert!(emotional_expression("happy and excited and proud") < 1.0);
    }

    #[test]
    fn test_perfect_grammar_counts_patterns() {
        assert_eq!(perfect_grammar(""), 0.0);
        let text = "The system is running. The team has finished.";
        assert!(perfect_grammar(text) > 0.0);
    }

    #[test]
    fn test_repetitive_structure_same_word_counts() {
        let same = split_sentences("One two three. Four five six. Seven eight nine.");
        assert!(repetitive_structure(&same) > 0.5);
        let few = split_sentences("One two. Three four.");
        assert_eq!(repetitive_structure(&few), 0.0);
    }

    #[test]
    fn test_all_indicators_in_range() {
        let text = "Furthermore, the methodology demonstrates significant efficiency. \
                    Moreover, the framework facilitates optimization.\n\n\
                    I love this happy little paragraph. It makes me excited!";
        let clean = text.to_lowercase();
        let indicators = compute_indicators(
            clean.trim(),
            text,
            &split_words(text),
            &split_sentences(text),
            &split_paragraphs(text),
        );
        for (name, value) in indicators.as_pairs() {
            assert!(
                (0.0..=1.0).contains(&value),
                "{name} out of range: {value}"
            );
        }
    }
}
