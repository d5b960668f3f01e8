//! The data-parallel pipeline runner (§4.10, §5).
//!
//! This is deliberately thin: a `rayon` parallel map from password to [`PasswordReport`],
//! no channels, no thread-count flag, no file I/O. Fanning work out across a thread pool,
//! batching input from a file, and writing `.word`/`.rule` output are collaborator
//! concerns the distilled source's CLI owned directly; here they stay outside the crate.

use rayon::prelude::*;

use crate::candidate::{lift_candidate, score_candidates, Candidate, LiftedRule};
use crate::classify::is_reversible_password;
use crate::config::PipelineConfig;
use crate::speller::Speller;

/// One candidate's ranking alongside every rule lifted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateReport {
    /// The ranked candidate itself.
    pub candidate: Candidate,
    /// Every rule lifted from the candidate's minimum-cost edit scripts, after truncation.
    pub rules: Vec<LiftedRule>,
}

/// The full analysis of a single password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordReport {
    /// The password this report is for.
    pub password: String,
    /// `false` if the password was rejected before candidate generation, per
    /// [`is_reversible_password`]; `candidates` is always empty in that case.
    pub reversible: bool,
    /// Ranked candidates with their lifted rules, empty if `reversible` is `false` or the
    /// speller had nothing to offer.
    pub candidates: Vec<CandidateReport>,
}

/// Runs the full candidate-scoring and rule-lifting pipeline over `passwords`, in parallel.
///
/// Passwords that fail [`is_reversible_password`] are reported with `reversible: false` and
/// skipped rather than dropped silently, so a caller can still account for every input.
pub fn run_pipeline(
    passwords: &[String],
    speller: &(impl Speller + Sync),
    config: &PipelineConfig,
) -> Vec<PasswordReport> {
    passwords
        .par_iter()
        .map(|password| analyze_password(password, speller, config))
        .collect()
}

fn analyze_password(
    password: &str,
    speller: &impl Speller,
    config: &PipelineConfig,
) -> PasswordReport {
    if !is_reversible_password(password) {
        log::debug!("skipping password unlikely to be reversible: {password:?}");
        return PasswordReport {
            password: password.to_string(),
            reversible: false,
            candidates: Vec::new(),
        };
    }

    let candidates = score_candidates(password, speller, config);
    let reports = candidates
        .into_iter()
        .map(|candidate| {
            let rules = lift_candidate(&candidate, config);
            CandidateReport { candidate, rules }
        })
        .collect();

    PasswordReport {
        password: password.to_string(),
        reversible: true,
        candidates: reports,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speller::WordListSpeller;

    #[test]
    fn unreversible_passwords_are_reported_but_not_scored() {
        let speller = WordListSpeller::new();
        let config = PipelineConfig::default();
        let reports = run_pipeline(&["123456".to_string()], &speller, &config);
        assert_eq!(reports.len(), 1);
        assert!(!reports[0].reversible);
        assert!(reports[0].candidates.is_empty());
    }

    #[test]
    fn a_known_candidate_produces_at_least_one_rule() {
        let mut speller = WordListSpeller::new();
        speller.insert("California", vec!["california".to_string()]);
        let config = PipelineConfig::default();
        let reports = run_pipeline(&["California".to_string()], &speller, &config);
        assert_eq!(reports.len(), 1);
        assert!(reports[0].reversible);
        assert_eq!(reports[0].candidates.len(), 1);
        assert!(!reports[0].candidates[0].rules.is_empty());
    }

    #[test]
    fn every_password_in_the_batch_gets_its_own_report_in_order() {
        let mut speller = WordListSpeller::new();
        speller.insert("California", vec!["california".to_string()]);
        speller.insert("password1", vec!["password".to_string()]);
        let config = PipelineConfig::default();
        let passwords = vec!["California".to_string(), "password1".to_string(), "000".to_string()];
        let reports = run_pipeline(&passwords, &speller, &config);
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].password, "California");
        assert_eq!(reports[1].password, "password1");
        assert_eq!(reports[2].password, "000");
        assert!(!reports[2].reversible);
    }
}
