// Detection Module
// Document-level AI text detection organized into specialized submodules:
// - indicators: the thirteen independent heuristic indicator scores
// - scoring: fixed-weight combination and metric-based adjustments
// - explanation: human-readable rationale for a verdict
// - analyzer: the public analyze() entry point and its error type

pub mod analyzer;
pub mod explanation;
pub mod indicators;
pub mod scoring;

pub use analyzer::{analyze, AnalysisError, MIN_ANALYSIS_CHARS};
pub use explanation::generate_analysis_details;
pub use indicators::compute_indicators;
pub use scoring::{compute_ai_score, AI_THRESHOLD};
