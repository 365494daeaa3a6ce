// EssayLens Core Services

pub mod analytics_store;
pub mod detection;
pub mod humanizer;
pub mod lexicon;
pub mod text_processor;

pub use analytics_store::*;
pub use humanizer::*;
pub use text_processor::*;

// Re-export detection module functions
pub use detection::{
    analyze,
    compute_ai_score,
    compute_indicators,
    generate_analysis_details,
    AnalysisError,
    AI_THRESHOLD,
    MIN_ANALYSIS_CHARS,
};
