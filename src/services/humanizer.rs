// Sentence-level humanizer.
// A per-sentence suspicion flagger, a human-likeness grade for user edits,
// and a rule-based rewrite pipeline. All functions here are total: any
// string input produces a result, never an error.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::SentenceReport;
use crate::services::lexicon::{containment_count, EMOTIONAL_WORDS, PERSONAL_PRONOUNS};
use crate::services::text_processor::split_sentences;

// The flagger keeps its own phrase lists. They overlap the extractor's
// lexicon but are scored differently, so they stay separate.
pub const TRANSITIONAL_PHRASES: &[&str] = &[
    "furthermore",
    "moreover",
    "additionally",
    "consequently",
    "therefore",
    "thus",
    "hence",
    "nevertheless",
    "nonetheless",
    "subsequently",
    "accordingly",
    "in conclusion",
    "in summary",
    "as a result",
    "on the other hand",
    "in addition",
    "for instance",
    "for example",
    "in contrast",
];

pub const FORMAL_FILLERS: &[&str] = &[
    "it is important to note",
    "it should be noted",
    "it is worth noting",
    "it is essential to",
    "one must consider",
    "it can be argued",
    "needless to say",
];

// Sentence starters stripped by the rewriter, with their trailing comma
// or "that" so the remainder reads as a complete sentence.
const STARTER_PHRASES: &[&str] = &[
    "it is important to note that",
    "it should be noted that",
    "it is worth noting that",
    "in conclusion,",
    "in summary,",
    "as a result,",
    "on the other hand,",
    "in addition,",
    "for instance,",
    "for example,",
    "furthermore,",
    "moreover,",
    "additionally,",
    "consequently,",
    "therefore,",
    "thus,",
    "hence,",
    "nevertheless,",
    "nonetheless,",
    "subsequently,",
    "accordingly,",
];

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static STARTER_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = STARTER_PHRASES.join("|");
    Regex::new(&format!(r"(?i)^(?:{alternation})\s*")).unwrap()
});

// Applied in order; later rules see the output of earlier ones.
static SUBSTITUTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\bit is\b", "it's"),
        (r"(?i)\bdo not\b", "don't"),
        (r"(?i)\bcannot\b", "can't"),
        (r"(?i)\bwe are\b", "we're"),
        (r"(?i)\bthey are\b", "they're"),
        (r"(?i)\bthere is\b", "there's"),
        (r"(?i)\b(?:moreover|furthermore|additionally)\b", "also"),
        (r"(?i)\butilize\b", "use"),
        (r"(?i)\butilization\b", "use"),
        (r"(?i)\bmethodology\b", "method"),
        (r"(?i)\b(?:thus|therefore)\b", "so"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

static FIRST_PERSON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:i|we|my|our)\b").unwrap());

/// Flag one sentence as AI-suspect. Cheaper than the document model and
/// independent of it; used for highlighting, not for the verdict.
pub fn is_sentence_suspect(sentence: &str) -> bool {
    let lower = sentence.trim().to_lowercase();
    if lower.split_whitespace().count() > 25 {
        return true;
    }
    TRANSITIONAL_PHRASES.iter().any(|p| lower.contains(p))
        || FORMAL_FILLERS.iter().any(|p| lower.contains(p))
}

/// Grade one sentence's human-likeness on a 0..=100 scale.
///
/// Rewards first-person voice, emotion words, lexical variety and brevity;
/// penalizes length past 30 words and formal/transitional phrasing.
pub fn score_human_likeness(sentence: &str) -> u8 {
    let lower = sentence.trim().to_lowercase();
    let tokens: Vec<&str> = lower.split_whitespace().collect();
    let word_count = tokens.len();

    // Pronouns match whole space-delimited tokens, unlike the document
    // indicators which use substring containment.
    let personal_hits = tokens
        .iter()
        .filter(|t| PERSONAL_PRONOUNS.contains(t))
        .count();
    let personal_score = (personal_hits as f64 / 3.0).min(1.0);

    let emotional_hits = containment_count(&lower, EMOTIONAL_WORDS);
    let emotional_score = (emotional_hits as f64 / 3.0).min(1.0);

    let diversity_score = if word_count == 0 {
        0.0
    } else {
        let unique: HashSet<&&str> = tokens.iter().collect();
        unique.len() as f64 / word_count as f64
    };

    let length_bonus = if word_count <= 25 { 0.2 } else { 0.1 };

    let mut score = personal_score * 0.3
        + emotional_score * 0.2
        + diversity_score * 0.3
        + length_bonus;

    if word_count > 30 {
        let length_penalty = ((word_count - 30) as f64 / 20.0).min(1.0);
        score -= length_penalty * 0.3;
    }
    if FORMAL_FILLERS.iter().any(|p| lower.contains(p)) {
        score -= 0.4;
    }
    if TRANSITIONAL_PHRASES.iter().any(|p| lower.contains(p)) {
        score -= 0.3;
    }

    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Rewrite one sentence to sound more personal and informal.
///
/// A fixed pipeline: whitespace normalization, one leading starter phrase
/// stripped, contraction and simplification substitutions, lossy truncation
/// past 28 words (everything after the second comma segment is dropped),
/// an "I think" prefix when no first-person pronoun survives, and a
/// guaranteed terminal punctuation mark.
pub fn rewrite_to_human(sentence: &str) -> String {
    let normalized = WHITESPACE_RE.replace_all(sentence.trim(), " ");
    let mut result = STARTER_RE.replace(&normalized, "").into_owned();

    for (re, replacement) in SUBSTITUTIONS.iter() {
        result = re.replace_all(&result, *replacement).into_owned();
    }

    if result.split_whitespace().count() > 28 {
        let segments: Vec<&str> = result.split(", ").collect();
        if segments.len() > 2 {
            result = segments[..2].join(", ");
            result.push('.');
        }
    }

    if !FIRST_PERSON_RE.is_match(&result) && !result.is_empty() {
        let mut chars = result.chars();
        if let Some(first) = chars.next() {
            result = format!("I think {}{}", first.to_lowercase(), chars.as_str());
        }
    }

    if !result.ends_with(['.', '!', '?']) && !result.is_empty() {
        result.push('.');
    }
    result
}

/// Per-sentence report over a whole document: flag, grade, and a rewrite
/// suggestion for each suspect sentence. Whitespace-only segments are
/// skipped but keep their index so edits line up with `apply_sentence_edits`.
pub fn sentence_reports(text: &str) -> Vec<SentenceReport> {
    split_sentences(text)
        .iter()
        .enumerate()
        .filter(|(_, sentence)| !sentence.trim().is_empty())
        .map(|(index, sentence)| {
            let trimmed = sentence.trim();
            let suspect = is_sentence_suspect(trimmed);
            SentenceReport {
                index,
                text: trimmed.to_string(),
                suspect,
                human_likeness: score_human_likeness(trimmed),
                rewrite: suspect.then(|| rewrite_to_human(trimmed)),
            }
        })
        .collect()
}

/// Rebuild the document with sentence overrides substituted in by index.
///
/// Untouched sentences pass through byte-for-byte. An overridden sentence
/// keeps the original's trailing whitespace so paragraph shape survives.
pub fn apply_sentence_edits(text: &str, edits: &HashMap<usize, String>) -> String {
    split_sentences(text)
        .iter()
        .enumerate()
        .map(|(index, sentence)| match edits.get(&index) {
            Some(replacement) => {
                let suffix_start = sentence.trim_end().len();
                format!("{replacement}{}", &sentence[suffix_start..])
            }
            None => sentence.clone(),
        })
        .collect()
}
