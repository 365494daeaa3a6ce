// Lexical word and phrase lists shared by the detection indicators.
//
// The sentence-level humanizer keeps its own (smaller, partially overlapping)
// phrase lists in `services::humanizer`; the two sets are intentionally not
// merged because their counts feed different scoring formulas.

/// Formal/transitional phrases typical of machine-generated register.
pub const FORMAL_PHRASES: &[&str] = &[
    "furthermore",
    "moreover",
    "additionally",
    "consequently",
    "therefore",
    "thus",
    "hence",
    "subsequently",
    "accordingly",
    "nevertheless",
    "nonetheless",
    "however",
    "in conclusion",
    "to summarize",
    "as a result",
    "for instance",
    "specifically",
    "particularly",
    "notably",
    "significantly",
    "considerably",
    "substantially",
    "in addition",
    "it is important to note",
    "it should be noted",
    "it is worth mentioning",
    "it is crucial",
    "it is essential",
    "it is necessary",
    "it is vital",
    "it is imperative",
    "it is critical",
];

/// Connective phrases characteristic of AI writing.
pub const AI_PATTERNS: &[&str] = &[
    "in conclusion",
    "to summarize",
    "as a result",
    "therefore",
    "thus",
    "hence",
    "furthermore",
    "moreover",
    "additionally",
    "consequently",
    "accordingly",
    "it is important to note",
    "it should be noted",
    "it is worth mentioning",
    "on the other hand",
    "in contrast",
    "however",
    "nevertheless",
    "nonetheless",
    "for instance",
    "for example",
    "specifically",
    "particularly",
    "notably",
    "significantly",
    "considerably",
    "substantially",
    "remarkably",
    "in summary",
    "to conclude",
    "in essence",
    "in other words",
    "that is to say",
    "as mentioned earlier",
    "as stated previously",
    "as discussed above",
    "it is crucial to",
    "it is essential to",
    "it is necessary to",
    "it is vital to",
    "it is imperative to",
    "it is critical to",
    "it is fundamental to",
];

/// Personal pronouns; presence lowers the "lack of personal touch" signal.
pub const PERSONAL_PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Technical/jargon vocabulary.
pub const TECHNICAL_TERMS: &[&str] = &[
    "algorithm",
    "implementation",
    "methodology",
    "framework",
    "paradigm",
    "optimization",
    "efficiency",
    "scalability",
    "robustness",
    "reliability",
    "functionality",
    "capability",
    "utilization",
    "facilitation",
    "enhancement",
    "integration",
    "deployment",
    "configuration",
    "architecture",
    "infrastructure",
    "protocol",
    "mechanism",
    "strategy",
    "approach",
    "solution",
];

/// Emotion vocabulary; presence lowers the "limited emotional expression" signal.
pub const EMOTIONAL_WORDS: &[&str] = &[
    "love",
    "hate",
    "angry",
    "happy",
    "sad",
    "excited",
    "frustrated",
    "worried",
    "scared",
    "nervous",
    "confident",
    "proud",
    "ashamed",
    "embarrassed",
    "surprised",
    "shocked",
    "amazed",
    "disappointed",
    "relieved",
    "anxious",
    "calm",
    "peaceful",
    "joyful",
    "miserable",
    "ecstatic",
    "terrified",
    "thrilled",
    "devastated",
    "elated",
    "depressed",
];

/// Academic-register vocabulary.
pub const ACADEMIC_WORDS: &[&str] = &[
    "research",
    "study",
    "analysis",
    "investigation",
    "examination",
    "evaluation",
    "assessment",
    "review",
    "literature",
    "methodology",
    "framework",
    "theoretical",
    "empirical",
    "quantitative",
    "qualitative",
    "statistical",
    "correlation",
    "significance",
    "hypothesis",
    "conclusion",
    "recommendation",
    "implication",
];

/// Count how many list entries appear somewhere in `text`.
///
/// Naive substring containment, no word-boundary check: "analysis" matches
/// inside "analyses". The original detector behaved this way and the scoring
/// thresholds were tuned against it, so it is kept rather than fixed.
pub fn containment_count(text: &str, list: &[&str]) -> usize {
    list.iter().filter(|entry| text.contains(*entry)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containment_counts_each_entry_once() {
        let text = "furthermore, and furthermore again, moreover";
        assert_eq!(containment_count(text, FORMAL_PHRASES), 2);
    }

    #[test]
    fn test_containment_matches_substrings() {
        // Known false positive kept for fidelity.
        assert_eq!(containment_count("several analyses", ACADEMIC_WORDS), 1);
    }

    #[test]
    fn test_lists_are_lowercase() {
        for list in [
            FORMAL_PHRASES,
            AI_PATTERNS,
            PERSONAL_PRONOUNS,
            TECHNICAL_TERMS,
            EMOTIONAL_WORDS,
            ACADEMIC_WORDS,
        ] {
            for entry in list {
                assert_eq!(*entry, entry.to_lowercase());
            }
        }
    }
}
