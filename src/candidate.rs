//! Candidate scoring and selection (§4.6).
//!
//! Mirrors the distilled source's `generateWords`/`generateHashcatRules` pair: a
//! [`Speller`] proposes source words for a password (optionally pre-transformed by a
//! handful of cheap rule-like rewrites), candidates are ranked by edit distance and
//! truncated per [`PipelineConfig`], and each surviving candidate is expanded into every
//! lifted rule its minimum-cost edit scripts produce.

use std::collections::HashSet;

use crate::config::PipelineConfig;
use crate::distance;
use crate::enumerate::enumerate_scripts;
use crate::error::PipelineError;
use crate::lift::lift;
use crate::matrix::Matrix;
use crate::speller::Speller;
use crate::token::{render_rule, RuleToken};

/// A cheap, reversible rewrite applied to the password before it's handed to the speller.
///
/// `Identity` always runs; `Reverse` only runs when [`PipelineConfig::brute_rules`] is set,
/// mirroring the distilled source's `preanalysisRules` list of `":"` and `"r"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreRule {
    /// The password is used as-is.
    Identity,
    /// The password is reversed before lookup.
    Reverse,
}

impl PreRule {
    fn apply(self, password: &str) -> String {
        match self {
            PreRule::Identity => password.to_string(),
            PreRule::Reverse => password.chars().rev().collect(),
        }
    }
}

/// A single source-word candidate for a password, ranked by edit distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The dictionary word the speller suggested.
    pub source_word: String,
    /// The (possibly pre-rewritten) password this candidate was scored against.
    pub password: String,
    /// The [`PreRule`] applied to reach `password` from the original probe.
    pub pre_rule: PreRule,
    /// The Levenshtein distance between `source_word` and `password`.
    pub distance: usize,
}

/// Proposes and ranks candidates for `password`, per §4.6.
///
/// Suggestions are deduplicated after stripping spaces and hyphens (mirroring the
/// distilled source's despaced/dehyphenated variants), sorted ascending by distance, and
/// truncated to [`PipelineConfig::max_words`] unless [`PipelineConfig::more_words`] is set,
/// in which case truncation instead stops at the first candidate strictly worse than the
/// best distance seen.
pub fn score_candidates(
    password: &str,
    speller: &impl Speller,
    config: &PipelineConfig,
) -> Vec<Candidate> {
    let pre_rules: &[PreRule] = if config.brute_rules {
        &[PreRule::Identity, PreRule::Reverse]
    } else {
        &[PreRule::Identity]
    };

    let mut candidates = Vec::new();

    for &pre_rule in pre_rules {
        let rewritten = pre_rule.apply(password);
        let suggestions = dedupe_suggestions(speller.suggest(&rewritten));

        for source_word in suggestions {
            let distance = distance::fast(
                &source_word.chars().collect::<Vec<_>>(),
                &rewritten.chars().collect::<Vec<_>>(),
            );
            candidates.push(Candidate {
                source_word,
                password: rewritten.clone(),
                pre_rule,
                distance,
            });
        }
    }

    candidates.sort_by_key(|c| c.distance);
    truncate_by_distance(&mut candidates, config);
    candidates
}

fn dedupe_suggestions(suggestions: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for word in suggestions {
        if seen.insert(word.clone()) {
            out.push(word.clone());
        }
        let collapsed: String = word.chars().filter(|c| *c != ' ' && *c != '-').collect();
        if collapsed != word && seen.insert(collapsed.clone()) {
            out.push(collapsed);
        }
    }
    out
}

fn truncate_by_distance(candidates: &mut Vec<Candidate>, config: &PipelineConfig) {
    let mut best: Option<usize> = None;
    let mut cutoff = candidates.len();

    for (idx, candidate) in candidates.iter().enumerate() {
        match best {
            None => best = Some(candidate.distance),
            Some(b) if !config.more_words && candidate.distance > b => {
                cutoff = idx;
                break;
            }
            _ => {}
        }
    }
    candidates.truncate(cutoff);
    candidates.retain(|c| c.distance <= config.max_word_distance);

    if !config.more_words && candidates.len() > config.max_words {
        candidates.truncate(config.max_words);
    }
}

/// One minimum-cost edit script for a candidate, lifted into mangling-rule tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftedRule {
    /// The tokens making up the rule, in application order.
    pub tokens: Vec<RuleToken>,
    /// The rendered rule text, ready to write to a `.rule` file.
    pub rendered: String,
}

/// Expands a candidate into every rule its minimum-cost edit scripts lift to, per §4.5/§4.6.
///
/// Rules are sorted ascending by token count and truncated to
/// [`PipelineConfig::max_rules`] unless [`PipelineConfig::more_rules`] is set; rules longer
/// than [`PipelineConfig::max_rule_len`] are dropped unless `more_rules` is set. A
/// [`PipelineError::LiftFailure`] for one script is logged and skipped rather than failing
/// the whole candidate, matching the distilled source's `processing failed` log-and-skip.
pub fn lift_candidate(candidate: &Candidate, config: &PipelineConfig) -> Vec<LiftedRule> {
    let word: Vec<char> = candidate.source_word.chars().collect();
    let password: Vec<char> = candidate.password.chars().collect();

    let matrix = Matrix::build(&password, &word);
    let scripts = enumerate_scripts(&matrix);

    let mut rules: Vec<LiftedRule> = scripts
        .iter()
        .filter_map(|script| match lift(&word, &password, script, config.simple_rules) {
            Ok(tokens) => {
                let rendered = render_rule(&tokens);
                Some(LiftedRule { tokens, rendered })
            }
            Err(err) => {
                log::warn!("skipping unliftable script: {err}");
                None
            }
        })
        .collect();

    rules.sort_by_key(|r| r.tokens.len());

    if !config.more_rules {
        if let Some(best_len) = rules.first().map(|r| r.tokens.len()) {
            rules.retain(|r| r.tokens.len() == best_len);
        }
        rules.retain(|r| r.tokens.len() <= config.max_rule_len);
        rules.truncate(config.max_rules);
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speller::WordListSpeller;

    fn config() -> PipelineConfig {
        PipelineConfig::default()
    }

    #[test]
    fn identity_pre_rule_is_always_present() {
        let mut speller = WordListSpeller::new();
        speller.insert("California", vec!["california".to_string()]);
        let candidates = score_candidates("California", &speller, &config());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].pre_rule, PreRule::Identity);
        assert_eq!(candidates[0].source_word, "california");
    }

    #[test]
    fn reverse_pre_rule_only_runs_when_brute_rules_is_set() {
        let mut speller = WordListSpeller::new();
        speller.insert("olleh", vec!["hello".to_string()]);
        let candidates = score_candidates("hello", &speller, &config());
        assert!(candidates.is_empty());

        let mut config = config();
        config.brute_rules = true;
        let candidates = score_candidates("hello", &speller, &config);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].pre_rule, PreRule::Reverse);
    }

    #[test]
    fn candidates_are_sorted_by_ascending_distance() {
        let mut speller = WordListSpeller::new();
        speller.insert(
            "password1",
            vec!["password".to_string(), "pass".to_string()],
        );
        let candidates = score_candidates("password1", &speller, &config());
        assert!(candidates[0].distance <= candidates.last().unwrap().distance);
    }

    #[test]
    fn max_words_truncates_the_candidate_list() {
        let mut speller = WordListSpeller::new();
        speller.insert(
            "abcdef",
            vec![
                "abcde".to_string(),
                "abcd".to_string(),
                "abc".to_string(),
                "ab".to_string(),
                "a".to_string(),
                "".to_string(),
            ],
        );
        let mut config = config();
        config.max_words = 2;
        let candidates = score_candidates("abcdef", &speller, &config);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn lifting_a_candidate_reproduces_the_password() {
        let candidate = Candidate {
            source_word: "california".to_string(),
            password: "California".to_string(),
            pre_rule: PreRule::Identity,
            distance: 1,
        };
        let rules = lift_candidate(&candidate, &config());
        assert!(!rules.is_empty());
        assert!(rules.iter().any(|r| r.rendered == "c"));
    }

    #[test]
    fn lifted_rules_never_exceed_max_rule_len() {
        let candidate = Candidate {
            source_word: "x".to_string(),
            password: "completely-different-password".to_string(),
            pre_rule: PreRule::Identity,
            distance: 29,
        };
        let mut config = config();
        config.max_rule_len = 4;
        let rules = lift_candidate(&candidate, &config);
        for rule in &rules {
            assert!(rule.tokens.len() <= 4);
        }
    }
}
