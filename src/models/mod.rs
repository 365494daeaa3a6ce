// EssayLens data models.

use serde::{Deserialize, Serialize};

/// Read-only document statistics, derived once per analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub avg_words_per_sentence: f64,
    pub avg_words_per_paragraph: f64,
    pub unique_word_count: usize,
    /// unique_word_count / word_count.
    pub vocabulary_diversity: f64,
    /// Mean sentence length in characters.
    pub avg_sentence_length: f64,
    /// Mean paragraph length in characters.
    pub avg_paragraph_length: f64,
}

/// The thirteen heuristic indicator scores, each in [0, 1].
///
/// Indicators are computed independently from the same segmented text; none
/// depends on another's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Indicators {
    pub repetitive_phrases: f64,
    pub formal_language: f64,
    pub consistent_structure: f64,
    pub lack_of_personal_touch: f64,
    pub technical_terminology: f64,
    pub sentence_complexity: f64,
    pub paragraph_uniformity: f64,
    pub vocabulary_sophistication: f64,
    pub ai_patterns: f64,
    pub emotional_expression: f64,
    pub perfect_grammar: f64,
    pub repetitive_structure: f64,
    pub academic_style: f64,
}

impl Indicators {
    /// Name/value pairs in the fixed scoring order.
    pub fn as_pairs(&self) -> [(&'static str, f64); 13] {
        [
            ("repetitivePhrases", self.repetitive_phrases),
            ("formalLanguage", self.formal_language),
            ("consistentStructure", self.consistent_structure),
            ("lackOfPersonalTouch", self.lack_of_personal_touch),
            ("technicalTerminology", self.technical_terminology),
            ("sentenceComplexity", self.sentence_complexity),
            ("paragraphUniformity", self.paragraph_uniformity),
            ("vocabularySophistication", self.vocabulary_sophistication),
            ("aiPatterns", self.ai_patterns),
            ("emotionalExpression", self.emotional_expression),
            ("perfectGrammar", self.perfect_grammar),
            ("repetitiveStructure", self.repetitive_structure),
            ("academicStyle", self.academic_style),
        ]
    }
}

/// Document-level verdict produced by `analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub is_ai: bool,
    /// Rounded percentage form of the final weighted score, 0..=100.
    pub confidence: u8,
    /// Human-readable rationale.
    pub details: String,
    pub metrics: Metrics,
    pub indicators: Indicators,
}

/// Per-sentence report produced by the sentence-level pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceReport {
    pub index: usize,
    pub text: String,
    pub suspect: bool,
    /// Human-likeness grade, 0..=100.
    pub human_likeness: u8,
    /// Suggested rewrite; only present for suspect sentences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<String>,
}

/// Cumulative usage counters kept by the analytics store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    pub total_analyses: u64,
    pub total_words_analyzed: u64,
    pub total_suspect_sentences: u64,
    pub total_rewrite_suggestions: u64,
}
