//! Lifts a low-level edit script into the richest, shortest equivalent rule-language
//! instruction sequence that still rewrites `word` into `password`.
//!
//! This is the order-sensitive, greedy rewriter at the heart of the pipeline: for every
//! `Replace` step it tries a cascade of structural rewrites (swap, case-fold, leet
//! substitution, propagation, ASCII/bit arithmetic) before falling back to a plain
//! positional overwrite, always verifying the rewrite by simulating the rest of the
//! script against the candidate instruction's result (see [`script::apply_ops`]).

use crate::error::PipelineError;
use crate::ops;
use crate::script::{apply_ops, EditOp};
use crate::token::{render_rule, Position, RuleToken};

/// The lifter's state at the point a lift gave up: whatever buffer and tokens had been
/// produced so far, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialLift {
    /// The mangled buffer as of the failing step.
    pub buffer: Vec<char>,
    /// The tokens emitted before the failing step.
    pub tokens: Vec<RuleToken>,
}

/// Lifts `script` using only the three raw primitives (`iXc`, `DX`, `oXc`), with no
/// cascade of richer rewrites. Mirrors the source's `SimpleHashcatRules`.
pub fn lift_simple(
    word: &[char],
    password: &[char],
    script: &[EditOp],
) -> Result<Vec<RuleToken>, PartialLift> {
    if word == password {
        return Ok(vec![RuleToken::Noop]);
    }

    let mut cur: Vec<char> = word.to_vec();
    let mut tokens = Vec::with_capacity(script.len());

    for op in script {
        match *op {
            EditOp::Insert { p, .. } => {
                let Some(pos) = Position::new(p) else {
                    return Err(PartialLift { buffer: cur, tokens });
                };
                tokens.push(RuleToken::InsertAt(pos, password[p]));
                ops::insert_at(&mut cur, p, password[p]);
            }
            EditOp::Delete { p, .. } => {
                let Some(pos) = Position::new(p) else {
                    return Err(PartialLift { buffer: cur, tokens });
                };
                tokens.push(RuleToken::DeleteAt(pos));
                ops::delete_at(&mut cur, p);
            }
            EditOp::Replace { p, .. } => {
                let Some(pos) = Position::new(p) else {
                    return Err(PartialLift { buffer: cur, tokens });
                };
                tokens.push(RuleToken::OverwriteAt(pos, password[p]));
                ops::overwrite_at(&mut cur, p, password[p]);
            }
        }
    }

    if cur == password {
        Ok(tokens)
    } else {
        Err(PartialLift { buffer: cur, tokens })
    }
}

/// Lifts `script` with the full cascade of structural rewrites described in §4.5,
/// followed by the prefix/suffix/truncate post-pass. Mirrors the source's
/// `AdvancedHashcatRules`.
pub fn lift_advanced(
    word: &[char],
    password: &[char],
    script: &[EditOp],
) -> Result<Vec<RuleToken>, PartialLift> {
    if word == password {
        return Ok(vec![RuleToken::Noop]);
    }

    let password_has_upper = password.iter().any(|c| c.is_uppercase());
    let password_has_lower = password.iter().any(|c| c.is_lowercase());

    let mut cur: Vec<char> = word.to_vec();
    let mut tokens: Vec<RuleToken> = Vec::with_capacity(script.len());

    for (i, op) in script.iter().enumerate() {
        match *op {
            EditOp::Insert { p, .. } => {
                let Some(pos) = Position::new(p) else {
                    return Err(PartialLift { buffer: cur, tokens });
                };
                tokens.push(RuleToken::InsertAt(pos, password[p]));
                ops::insert_at(&mut cur, p, password[p]);
            }
            EditOp::Delete { p, .. } => {
                let Some(pos) = Position::new(p) else {
                    return Err(PartialLift { buffer: cur, tokens });
                };
                tokens.push(RuleToken::DeleteAt(pos));
                ops::delete_at(&mut cur, p);
            }
            EditOp::Replace { p, w } => {
                let remaining = &script[i + 1..];
                let ok = lift_replace(
                    &mut cur,
                    word,
                    password,
                    p,
                    w,
                    remaining,
                    password_has_upper,
                    password_has_lower,
                    &mut tokens,
                );
                if ok.is_none() {
                    return Err(PartialLift { buffer: cur, tokens });
                }
            }
        }
    }

    compact(&mut tokens, password.len());

    if cur == password {
        Ok(tokens)
    } else {
        Err(PartialLift { buffer: cur, tokens })
    }
}

/// Runs the cascade of §4.5's `Replace` rewrites, pushing the chosen token(s) and
/// applying the matching primitive to `cur` in place. Returns `None` if a positional
/// token would need an out-of-range position.
#[allow(clippy::too_many_arguments)]
fn lift_replace(
    cur: &mut Vec<char>,
    word: &[char],
    password: &[char],
    p: usize,
    w: usize,
    remaining: &[EditOp],
    password_has_upper: bool,
    password_has_lower: bool,
    tokens: &mut Vec<RuleToken>,
) -> Option<()> {
    // 1. Obsolete: a prior global rewrite already produced the right character here.
    if cur.len() >= password.len() && cur[p] == password[p] {
        return Some(());
    }

    // 2. Adjacent swap, checked against the *original* word's alignment.
    if p < word.len().min(password.len()).saturating_sub(1)
        && word[p] == password[p + 1]
        && word[p + 1] == password[p]
    {
        if p == 0 {
            let mut trial = cur.clone();
            ops::swap_front(&mut trial);
            if apply_ops(&trial, password, remaining) == password {
                ops::swap_front(cur);
                tokens.push(RuleToken::SwapFront);
                return Some(());
            }
        } else if p == cur.len().saturating_sub(2) {
            let mut trial = cur.clone();
            ops::swap_back(&mut trial);
            if apply_ops(&trial, password, remaining) == password {
                ops::swap_back(cur);
                tokens.push(RuleToken::SwapBack);
                return Some(());
            }
        }
        {
            let mut trial = cur.clone();
            ops::swap_adjacent(&mut trial, p);
            if apply_ops(&trial, password, remaining) == password {
                ops::swap_adjacent(cur, p);
                let x = Position::new(p)?;
                let y = Position::new(p + 1)?;
                tokens.push(RuleToken::SwapAt(x, y));
                return Some(());
            }
        }
        let pos = Position::new(p)?;
        tokens.push(RuleToken::OverwriteAt(pos, password[p]));
        ops::overwrite_at(cur, p, password[p]);
        return Some(());
    }

    // 3. Upper-case toggle.
    if cur[p].is_lowercase() && cur[p].to_uppercase().next() == Some(password[p]) {
        if password_has_upper && password_has_lower {
            let mut trial = cur.clone();
            ops::toggle_case(&mut trial);
            if apply_ops(&trial, password, remaining) == password {
                ops::toggle_case(cur);
                tokens.push(RuleToken::ToggleAll);
                return Some(());
            }
        }
        {
            let mut trial = cur.clone();
            ops::uppercase(&mut trial);
            if apply_ops(&trial, password, remaining) == password {
                ops::uppercase(cur);
                tokens.push(RuleToken::UppercaseAll);
                return Some(());
            }
        }
        if p == 0 {
            let mut trial = cur.clone();
            ops::capitalize(&mut trial);
            if apply_ops(&trial, password, remaining) == password {
                ops::capitalize(cur);
                tokens.push(RuleToken::Capitalize);
                return Some(());
            }
        }
        let pos = Position::new(p)?;
        tokens.push(RuleToken::ToggleAt(pos));
        ops::toggle_at(cur, p);
        return Some(());
    }

    // 4. Lower-case toggle.
    if cur[p].is_uppercase() && cur[p].to_lowercase().next() == Some(password[p]) {
        if password_has_upper && password_has_lower {
            let mut trial = cur.clone();
            ops::toggle_case(&mut trial);
            if apply_ops(&trial, password, remaining) == password {
                ops::toggle_case(cur);
                tokens.push(RuleToken::ToggleAll);
                return Some(());
            }
        }
        {
            let mut trial = cur.clone();
            ops::lowercase(&mut trial);
            if apply_ops(&trial, password, remaining) == password {
                ops::lowercase(cur);
                tokens.push(RuleToken::LowercaseAll);
                return Some(());
            }
        }
        if p == 0 {
            let mut trial = cur.clone();
            ops::invert_capitalize(&mut trial);
            if apply_ops(&trial, password, remaining) == password {
                ops::invert_capitalize(cur);
                tokens.push(RuleToken::InvertCapitalize);
                return Some(());
            }
        }
        let pos = Position::new(p)?;
        tokens.push(RuleToken::ToggleAt(pos));
        ops::toggle_at(cur, p);
        return Some(());
    }

    // 5. Global leet substitution.
    if cur[p].is_alphabetic() && !password[p].is_alphabetic() {
        let mut trial = cur.clone();
        ops::replace_all(&mut trial, cur[p], password[p]);
        if apply_ops(&trial, password, remaining) == password {
            let from = cur[p];
            ops::replace_all(cur, from, password[p]);
            tokens.push(RuleToken::ReplaceAll(from, password[p]));
            return Some(());
        }
    }

    // 6. Propagate right.
    if p + 1 < password.len() && p + 1 < cur.len() && password[p] == password[p + 1] && password[p] == cur[p + 1] {
        let pos = Position::new(p)?;
        tokens.push(RuleToken::PropagateRight(pos));
        ops::propagate_right(cur, p);
        return Some(());
    }

    // 7. Propagate left.
    if p > 0 && w > 0 && p - 1 < password.len() && p - 1 < cur.len() && password[p] == password[p - 1] && password[p] == cur[p - 1] {
        let pos = Position::new(p)?;
        tokens.push(RuleToken::PropagateLeft(pos));
        ops::propagate_left(cur, p);
        return Some(());
    }

    // 8. ASCII +/-1.
    if cur[p] as u32 + 1 == password[p] as u32 {
        let pos = Position::new(p)?;
        tokens.push(RuleToken::AsciiPlus(pos));
        ops::ascii_plus(cur, p);
        return Some(());
    }
    if (cur[p] as u32).checked_sub(1) == Some(password[p] as u32) {
        let pos = Position::new(p)?;
        tokens.push(RuleToken::AsciiMinus(pos));
        ops::ascii_minus(cur, p);
        return Some(());
    }

    // 9. Bitwise shift.
    if (cur[p] as u32) << 1 == password[p] as u32 {
        let pos = Position::new(p)?;
        tokens.push(RuleToken::ShiftLeft(pos));
        ops::shift_left(cur, p);
        return Some(());
    }
    if (cur[p] as u32) >> 1 == password[p] as u32 {
        let pos = Position::new(p)?;
        tokens.push(RuleToken::ShiftRight(pos));
        ops::shift_right(cur, p);
        return Some(());
    }

    // 10. Default: positional overwrite.
    let pos = Position::new(p)?;
    tokens.push(RuleToken::OverwriteAt(pos, password[p]));
    ops::overwrite_at(cur, p, password[p]);
    Some(())
}

/// Runs the four post-pass rewrites (§4.5): prefix compaction, suffix compaction, head
/// truncate, tail truncate, each scanning from the front of `tokens` and stopping at the
/// first non-matching instruction.
fn compact(tokens: &mut [RuleToken], password_len: usize) {
    compact_prefix(tokens);
    compact_suffix(tokens, password_len);
    compact_truncate_left(tokens);
    compact_truncate_right(tokens, password_len);
}

fn compact_prefix(tokens: &mut [RuleToken]) {
    let mut cursor = 0usize;
    for tok in tokens.iter_mut() {
        match *tok {
            RuleToken::InsertAt(pos, c) if pos.0 == cursor => {
                *tok = RuleToken::Prepend(c);
                cursor += 1;
            }
            _ => break,
        }
    }
}

fn compact_suffix(tokens: &mut [RuleToken], password_len: usize) {
    if password_len == 0 {
        return;
    }
    let mut cursor = password_len - 1;
    for tok in tokens.iter_mut() {
        match *tok {
            RuleToken::InsertAt(pos, c) if pos.0 == cursor => {
                *tok = RuleToken::Append(c);
                if cursor == 0 {
                    break;
                }
                cursor -= 1;
            }
            _ => break,
        }
    }
}

fn compact_truncate_left(tokens: &mut [RuleToken]) {
    for tok in tokens.iter_mut() {
        match *tok {
            RuleToken::DeleteAt(pos) if pos.0 == 0 => *tok = RuleToken::TruncateLeft,
            _ => break,
        }
    }
}

fn compact_truncate_right(tokens: &mut [RuleToken], password_len: usize) {
    for tok in tokens.iter_mut() {
        match *tok {
            RuleToken::DeleteAt(pos) if pos.0 >= password_len => *tok = RuleToken::TruncateRight,
            _ => break,
        }
    }
}

/// Lifts `script`, verifying the result and turning a mismatch into a
/// [`PipelineError::LiftFailure`] rather than silently dropping it.
///
/// `simple` selects [`lift_simple`] over the full cascade; see [`lift_advanced`].
pub fn lift(
    word: &[char],
    password: &[char],
    script: &[EditOp],
    simple: bool,
) -> Result<Vec<RuleToken>, PipelineError> {
    let lifted = if simple {
        lift_simple(word, password, script)
    } else {
        lift_advanced(word, password, script)
    };

    match lifted {
        // `lift_simple`/`lift_advanced` already re-verify `cur == password` before
        // returning `Ok`, so there's nothing left to check here.
        Ok(tokens) => Ok(tokens),
        Err(partial) => {
            let word_s: String = word.iter().collect();
            let password_s: String = password.iter().collect();
            let got: String = partial.buffer.iter().collect();
            let rule_so_far = render_rule(&partial.tokens);
            log::warn!(
                "lift failed for word {word_s:?} -> password {password_s:?}, got {got:?}, rule so far {rule_so_far}"
            );
            Err(PipelineError::LiftFailure {
                word: word_s,
                password: password_s,
                got,
                rule_so_far,
            })
        }
    }
}
