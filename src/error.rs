//! The error taxonomy for the rule-synthesis pipeline.
//!
//! `UnreversiblePassword` and `NoCandidate` are not represented here: they're silent
//! skips (`bool`/empty `Vec`), not failures, per the taxonomy this crate follows. The
//! only failure a caller needs to handle is [`PipelineError::LiftFailure`]; dropping the
//! offending rule and continuing with any other rules for the same password is the
//! expected recovery.

use thiserror::Error;

/// Errors surfaced by the rule-synthesis pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The lifter's post-check found `cur != password` after applying every emitted
    /// instruction. Carries enough context to diagnose which step went wrong.
    #[error("lift failed: word {word:?}, password {password:?}, got {got:?}, rule so far {rule_so_far}")]
    LiftFailure {
        /// The source word the lift was attempted from.
        word: String,
        /// The target password the lift was attempted against.
        password: String,
        /// The buffer the lifter actually produced, when available.
        got: String,
        /// The rule text emitted before the mismatch was detected, when available.
        rule_so_far: String,
    },
}
