// Explanation generator.
// Deterministic, ordered rationale sentences gated on indicator and metric
// thresholds, closed by a verdict sentence that reuses the classifier cut.

use crate::models::{Indicators, Metrics};
use crate::services::detection::scoring::AI_THRESHOLD;

/// Build the human-readable rationale for one analysis.
pub fn generate_analysis_details(indicators: &Indicators, metrics: &Metrics, score: f64) -> String {
    let mut details: Vec<&str> = Vec::new();

    if indicators.repetitive_phrases > 0.1 {
        details.push("Repetitive phrase patterns detected, which is common in AI-generated text.");
    }
    if indicators.formal_language > 0.2 {
        details.push(
            "Extensive use of formal language and transitional phrases typical of AI writing.",
        );
    }
    if indicators.consistent_structure > 0.5 {
        details.push(
            "Very consistent sentence structure and length patterns suggest automated generation.",
        );
    }
    if indicators.lack_of_personal_touch > 0.4 {
        details.push("Limited use of personal pronouns and conversational language.");
    }
    if indicators.technical_terminology > 0.1 {
        details.push("Presence of technical terminology and formal academic language.");
    }
    if indicators.ai_patterns > 0.2 {
        details.push("Use of common AI writing patterns and transitional phrases.");
    }
    if metrics.vocabulary_diversity < 0.6 {
        details.push("Low vocabulary diversity indicates repetitive word usage.");
    }
    if metrics.avg_words_per_sentence > 15.0 {
        details.push("Long, complex sentences are characteristic of AI-generated content.");
    }
    if indicators.emotional_expression > 0.6 {
        details.push("Limited emotional expression and personal sentiment.");
    }
    if indicators.perfect_grammar > 0.3 {
        details.push("Overly perfect grammar patterns suggest automated generation.");
    }
    if indicators.repetitive_structure > 0.4 {
        details.push("Repetitive sentence structures indicate AI generation.");
    }
    if indicators.academic_style > 0.2 {
        details.push("Academic writing style with formal terminology.");
    }

    if details.is_empty() {
        details.push(
            "Text shows natural variation in structure and language use typical of human writing.",
        );
    }

    let conclusion = if score > AI_THRESHOLD {
        "Overall analysis suggests this text was likely generated by AI."
    } else {
        "Overall analysis suggests this text was likely written by a human."
    };

    let mut out = details.join(" ");
    out.push(' ');
    out.push_str(conclusion);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sentence_when_nothing_fires() {
        let indicators = Indicators::default();
        let metrics = Metrics {
            vocabulary_diversity: 0.9,
            avg_words_per_sentence: 10.0,
            ..Metrics::default()
        };
        let details = generate_analysis_details(&indicators, &metrics, 0.1);
        assert!(details.starts_with("Text shows natural variation"));
        assert!(details.ends_with("written by a human."));
    }

    #[test]
    fn test_conclusion_follows_threshold() {
        let indicators = Indicators::default();
        let metrics = Metrics {
            vocabulary_diversity: 0.9,
            ..Metrics::default()
        };
        let ai = generate_analysis_details(&indicators, &metrics, 0.36);
        assert!(ai.ends_with("generated by AI."));
        let human = generate_analysis_details(&indicators, &metrics, 0.35);
        assert!(human.ends_with("written by a human."));
    }

    #[test]
    fn test_fired_guards_appear_in_order() {
        let indicators = Indicators {
            formal_language: 0.5,
            ai_patterns: 0.5,
            ..Indicators::default()
        };
        let metrics = Metrics {
            vocabulary_diversity: 0.9,
            ..Metrics::default()
        };
        let details = generate_analysis_details(&indicators, &metrics, 0.5);
        let formal = details.find("formal language").unwrap();
        let patterns = details.find("AI writing patterns").unwrap();
        assert!(formal < patterns);
    }
}
