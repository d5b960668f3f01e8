//! Explicit pipeline configuration (§4.9, §9 Design Note "Global state").
//!
//! Every tuning knob the distilled source read from CLI flags is threaded here instead,
//! as a plain value passed by reference into [`crate::candidate::score_candidates`] and
//! the lifting stage — never read from environment or process-global state.

/// Tuning knobs for the candidate scorer and the rule lifter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Candidates with a Levenshtein distance above this are dropped.
    pub max_word_distance: usize,
    /// At most this many candidates survive truncation, unless `more_words` is set.
    pub max_words: usize,
    /// Skip the `max_words` truncation; stop only once a candidate is strictly worse
    /// than the best distance seen so far.
    pub more_words: bool,
    /// Rules longer than this many tokens are pruned, unless `more_rules` is set.
    pub max_rule_len: usize,
    /// At most this many rules per candidate survive truncation, unless `more_rules`.
    pub max_rules: usize,
    /// Disables the length cutoff entirely.
    pub more_rules: bool,
    /// Extends pre-analysis with the `reverse` transform in addition to `identity`.
    pub brute_rules: bool,
    /// Uses [`crate::lift::lift_simple`] instead of the full cascade.
    pub simple_rules: bool,
    /// Reserved for a simplified candidate-generation strategy; unused by the in-memory
    /// speller but threaded through so a richer `Speller` can honor it.
    pub simple_words: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            max_word_distance: 10,
            max_words: 5,
            more_words: false,
            max_rule_len: 15,
            max_rules: 5,
            more_rules: false,
            brute_rules: false,
            simple_rules: false,
            simple_words: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_word_distance, 10);
        assert_eq!(config.max_words, 5);
        assert_eq!(config.max_rule_len, 15);
        assert_eq!(config.max_rules, 5);
        assert!(!config.more_words);
        assert!(!config.more_rules);
        assert!(!config.brute_rules);
    }
}
