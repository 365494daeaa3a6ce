// Usage Analytics Storage Service
// Persists cumulative usage counters under the user's config directory.
// Submitted text is never stored, only aggregate counts.

use std::fs;
use std::path::PathBuf;

use crate::models::UsageStats;

pub struct AnalyticsStore {
    stats_dir: PathBuf,
    stats_file: PathBuf,
}

impl AnalyticsStore {
    pub fn new(stats_dir: PathBuf) -> Self {
        let stats_file = stats_dir.join("stats.json");
        Self { stats_dir, stats_file }
    }

    /// Get default stats directory
    pub fn default_stats_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("essaylens"))
    }

    /// Ensure stats directory exists
    pub fn ensure_dir(&self) -> Result<(), String> {
        fs::create_dir_all(&self.stats_dir)
            .map_err(|e| format!("Failed to create stats dir: {}", e))
    }

    /// Load counters from file; a missing file reads as all-zero counters
    pub fn load(&self) -> Result<UsageStats, String> {
        if !self.stats_file.exists() {
            return Ok(UsageStats::default());
        }

        let content = fs::read_to_string(&self.stats_file)
            .map_err(|e| format!("Failed to read stats: {}", e))?;

        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse stats: {}", e))
    }

    /// Save counters to file
    pub fn save(&self, stats: &UsageStats) -> Result<(), String> {
        self.ensure_dir()?;

        let content = serde_json::to_string_pretty(stats)
            .map_err(|e| format!("Failed to serialize stats: {}", e))?;

        fs::write(&self.stats_file, content)
            .map_err(|e| format!("Failed to write stats: {}", e))
    }

    /// Add one run's counts to the stored totals and return the new snapshot
    pub fn increment(&self, delta: &UsageStats) -> Result<UsageStats, String> {
        let mut stats = self.load()?;
        stats.total_analyses += delta.total_analyses;
        stats.total_words_analyzed += delta.total_words_analyzed;
        stats.total_suspect_sentences += delta.total_suspect_sentences;
        stats.total_rewrite_suggestions += delta.total_rewrite_suggestions;
        self.save(&stats)?;
        Ok(stats)
    }
}
