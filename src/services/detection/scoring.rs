// Scoring model.
// Combines the indicator scores through a fixed weight table, then applies
// metric-based multiplicative adjustments in a fixed order.

use crate::models::{Indicators, Metrics};

/// Classification cut. Shared with the explanation generator so the verdict
/// sentence and the boolean never disagree.
pub const AI_THRESHOLD: f64 = 0.35;

/// Indicator weights; the table sums to 1.0 and its order matches
/// `Indicators::as_pairs`.
const WEIGHTS: [(&str, f64); 13] = [
    ("repetitivePhrases", 0.10),
    ("formalLanguage", 0.18),
    ("consistentStructure", 0.12),
    ("lackOfPersonalTouch", 0.12),
    ("technicalTerminology", 0.10),
    ("sentenceComplexity", 0.08),
    ("paragraphUniformity", 0.08),
    ("vocabularySophistication", 0.08),
    ("aiPatterns", 0.15),
    ("emotionalExpression", 0.08),
    ("perfectGrammar", 0.05),
    ("repetitiveStructure", 0.08),
    ("academicStyle", 0.08),
];

type Adjustment = (fn(&Metrics, &Indicators) -> bool, f64);

/// Metric-conditioned multipliers, applied sequentially and unconditionally
/// (not else-if): several can fire on the same input and their effects
/// compound. The order is part of the model.
const ADJUSTMENTS: [Adjustment; 5] = [
    (|m, _| m.word_count < 20, 0.6),
    (|m, _| m.word_count > 100, 1.2),
    (|m, _| m.avg_words_per_sentence > 15.0, 1.25),
    (|m, _| m.vocabulary_diversity < 0.6, 1.3),
    (
        |m, i| m.sentence_count > 5 && i.consistent_structure > 0.4,
        1.2,
    ),
];

/// Weighted indicator sum with sequential adjustments, clamped to [0, 1].
pub fn compute_ai_score(indicators: &Indicators, metrics: &Metrics) -> f64 {
    let mut score: f64 = indicators
        .as_pairs()
        .iter()
        .zip(WEIGHTS.iter())
        .map(|((name, value), (weight_name, weight))| {
            debug_assert_eq!(name, weight_name);
            value * weight
        })
        .sum();

    for (applies, multiplier) in ADJUSTMENTS {
        if applies(metrics, indicators) {
            score *= multiplier;
        }
    }

    score.clamp(0.0, 1.0)
}

/// Rounded percentage form of a final score.
pub fn confidence_percent(score: f64) -> u8 {
    (score * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let sum: f64 = WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_zero_indicators() {
        let score = compute_ai_score(&Indicators::default(), &Metrics::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_clamped_to_one() {
        let indicators = Indicators {
            repetitive_phrases: 1.0,
            formal_language: 1.0,
            consistent_structure: 1.0,
            lack_of_personal_touch: 1.0,
            technical_terminology: 1.0,
            sentence_complexity: 1.0,
            paragraph_uniformity: 1.0,
            vocabulary_sophistication: 1.0,
            ai_patterns: 1.0,
            emotional_expression: 1.0,
            perfect_grammar: 1.0,
            repetitive_structure: 1.0,
            academic_style: 1.0,
        };
        let metrics = Metrics {
            word_count: 200,
            sentence_count: 10,
            avg_words_per_sentence: 20.0,
            vocabulary_diversity: 0.3,
            ..Metrics::default()
        };
        assert_eq!(compute_ai_score(&indicators, &metrics), 1.0);
    }

    #[test]
    fn test_adjustments_compound() {
        let indicators = Indicators {
            formal_language: 0.5,
            ..Indicators::default()
        };
        // Base: 0.5 * 0.18 = 0.09.
        let neutral = Metrics {
            word_count: 50,
            vocabulary_diversity: 0.9,
            ..Metrics::default()
        };
        assert!((compute_ai_score(&indicators, &neutral) - 0.09).abs() < 1e-9);

        // word_count > 100 and diversity < 0.6 both fire: 0.09 * 1.2 * 1.3.
        let boosted = Metrics {
            word_count: 150,
            vocabulary_diversity: 0.5,
            ..Metrics::default()
        };
        let expected = 0.09 * 1.2 * 1.3;
        assert!((compute_ai_score(&indicators, &boosted) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_short_text_damping() {
        let indicators = Indicators {
            formal_language: 1.0,
            ..Indicators::default()
        };
        let short = Metrics {
            word_count: 10,
            vocabulary_diversity: 0.9,
            ..Metrics::default()
        };
        let expected = 0.18 * 0.6;
        assert!((compute_ai_score(&indicators, &short) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_percent_rounds() {
        assert_eq!(confidence_percent(0.0), 0);
        assert_eq!(confidence_percent(0.354), 35);
        assert_eq!(confidence_percent(0.355), 36);
        assert_eq!(confidence_percent(1.0), 100);
    }
}
