// Document-level analysis entry point.

use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;
use tracing::debug;

use crate::models::AnalysisResult;
use crate::services::detection::explanation::generate_analysis_details;
use crate::services::detection::indicators::compute_indicators;
use crate::services::detection::scoring::{compute_ai_score, confidence_percent, AI_THRESHOLD};
use crate::services::text_processor::{
    compute_metrics, split_paragraphs, split_sentences, split_words,
};

/// Minimum trimmed length (in characters) accepted by `analyze`.
pub const MIN_ANALYSIS_CHARS: usize = 250;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Text is too short for accurate analysis. Please provide at least {MIN_ANALYSIS_CHARS} characters for reliable AI detection results.")]
    TooShort,
    #[error("Failed to analyze text: {0}")]
    Internal(String),
}

/// Estimate whether `text` was authored by a human or generated by an AI
/// model.
///
/// Fails with [`AnalysisError::TooShort`] below the 250-character floor. A
/// panic anywhere in extraction or scoring is caught at this boundary and
/// surfaced as [`AnalysisError::Internal`]; it should never happen on
/// well-formed strings and indicates a bug, not a retryable condition.
pub fn analyze(text: &str) -> Result<AnalysisResult, AnalysisError> {
    if text.trim().chars().count() < MIN_ANALYSIS_CHARS {
        return Err(AnalysisError::TooShort);
    }

    catch_unwind(AssertUnwindSafe(|| run_analysis(text)))
        .map_err(|panic| AnalysisError::Internal(panic_message(&panic)))
}

fn run_analysis(text: &str) -> AnalysisResult {
    let clean = text.to_lowercase();
    let clean = clean.trim();

    let words = split_words(text);
    let sentences = split_sentences(text);
    let paragraphs = split_paragraphs(text);
    let metrics = compute_metrics(text);

    let indicators = compute_indicators(clean, text, &words, &sentences, &paragraphs);
    let score = compute_ai_score(&indicators, &metrics);
    let details = generate_analysis_details(&indicators, &metrics, score);

    debug!(
        words = metrics.word_count,
        sentences = metrics.sentence_count,
        score = format!("{score:.3}"),
        "analysis complete"
    );

    AnalysisResult {
        is_ai: score > AI_THRESHOLD,
        confidence: confidence_percent(score),
        details,
        metrics,
        indicators,
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected panic during analysis".to_string()
    }
}
