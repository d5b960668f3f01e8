//! The edit-script data model shared between the [enumerator](crate::enumerate) and the
//! [lifter](crate::lift).

/// A single step of a minimum-cost edit script.
///
/// `p` indexes the password (the target) at the position this step produces or consumes;
/// `w` indexes the word (the source) at the position the step conceptually applies to.
/// A `Replace` where the two characters already match is never constructed: it is a
/// no-cost diagonal step in the matrix and carries no information for the lifter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Insert `password[p]` so the result's position `p` holds it.
    Insert { p: usize, w: usize },
    /// Delete the word's position `w`.
    Delete { p: usize, w: usize },
    /// Replace the word's position `w` with `password[p]`.
    Replace { p: usize, w: usize },
}

impl EditOp {
    /// The password-side index this step is defined against.
    pub fn p(&self) -> usize {
        match *self {
            EditOp::Insert { p, .. } | EditOp::Delete { p, .. } | EditOp::Replace { p, .. } => p,
        }
    }

    /// The word-side index this step is defined against.
    pub fn w(&self) -> usize {
        match *self {
            EditOp::Insert { w, .. } | EditOp::Delete { w, .. } | EditOp::Replace { w, .. } => w,
        }
    }
}

/// An ordered, forward-application sequence of [`EditOp`]s.
///
/// Applying every step in order to the source word yields the target password, and
/// `script.len()` equals the Levenshtein distance between the two.
pub type EditScript = Vec<EditOp>;

/// Applies a sequence of edit ops on top of a starting buffer, returning the result.
///
/// This is the literal, non-lifted ground truth: every step is applied with its raw
/// §4.1 primitive, never collapsed into a richer instruction. The rule lifter uses this
/// to simulate "does the remainder of the script still work" when it's deciding whether
/// a candidate instruction can replace several raw steps at once.
pub fn apply_ops(start: &[char], password: &[char], ops: &[EditOp]) -> Vec<char> {
    let mut cur: Vec<char> = start.to_vec();
    for op in ops {
        match *op {
            EditOp::Insert { p, .. } => crate::ops::insert_at(&mut cur, p, password[p]),
            EditOp::Delete { p, .. } => crate::ops::delete_at(&mut cur, p),
            EditOp::Replace { p, .. } => crate::ops::overwrite_at(&mut cur, p, password[p]),
        }
    }
    cur
}

/// Applies a full edit script to `word`, returning the resulting buffer.
pub fn apply_script(word: &[char], password: &[char], script: &[EditOp]) -> Vec<char> {
    apply_ops(word, password, script)
}
