//! Recovers hashcat mangling rules that turn a dictionary word into a password.
//!
//! Given a password and a source word a [speller](speller) suggests for it, this crate
//! computes every minimum-cost Levenshtein edit script between the two and lifts each one
//! into the shortest, richest rule the hashcat rule language can express for it. Wiring a
//! real speller, a CLI, and parallel file processing around [`run_pipeline`] is left to the
//! caller; this crate only owns the scoring and lifting.
//!
//! # Example
//!
//! ```
//! use rulegen::{run_pipeline, PipelineConfig, WordListSpeller};
//!
//! let mut speller = WordListSpeller::new();
//! speller.insert("California", vec!["california".to_string()]);
//!
//! let reports = run_pipeline(
//!     &["California".to_string()],
//!     &speller,
//!     &PipelineConfig::default(),
//! );
//! let rule = &reports[0].candidates[0].rules[0];
//! assert_eq!(rule.rendered, "c");
//! ```

#![deny(missing_docs)]

pub mod candidate;
pub mod classify;
pub mod config;
pub mod distance;
pub mod enumerate;
pub mod error;
pub mod lift;
pub mod matrix;
pub mod ops;
pub mod pipeline;
pub mod script;
pub mod speller;
pub mod token;

pub use candidate::{lift_candidate, score_candidates, Candidate, LiftedRule, PreRule};
pub use classify::{is_reversible_password, leet_normalize};
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::{run_pipeline, CandidateReport, PasswordReport};
pub use speller::{Speller, WordListSpeller};
pub use token::{render_rule, Position, RuleToken};
