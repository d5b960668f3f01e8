//! Recursive reverse traversal of the [`Matrix`] that yields every minimum-cost edit script.
//!
//! Starting from the bottom-right corner, [`enumerate_scripts`] walks back toward `(0, 0)`,
//! branching at every cell whose insert, delete, or diagonal neighbour ties for the
//! minimum. The traversal is naturally exponential in the number of tied neighbours, so
//! branches are pruned as soon as their partial path length exceeds the known minimum
//! distance.

use crate::matrix::Matrix;
use crate::script::{EditOp, EditScript};

/// Enumerates every minimum-cost edit script transforming `word` into `password`.
///
/// Duplicate scripts reachable via different recursion orders are not deduplicated: the
/// lifter is deterministic per script, so a caller that wants uniqueness can dedup the
/// returned scripts itself.
pub fn enumerate_scripts(matrix: &Matrix) -> Vec<EditScript> {
    let i = matrix.rows() - 1;
    let j = matrix.cols() - 1;
    let distance = matrix.distance() as usize;
    let mut scripts = Vec::new();
    reverse_recurse(matrix, i, j, 0, distance, &mut Vec::new(), &mut scripts);
    scripts
}

/// Walks backward from `(i, j)`, appending onto `tail` as the recursion unwinds and
/// pushing a completed, reversed script into `out` whenever it reaches the origin.
fn reverse_recurse(
    matrix: &Matrix,
    i: usize,
    j: usize,
    path_len: usize,
    distance: usize,
    tail: &mut EditScript,
    out: &mut Vec<EditScript>,
) {
    if i == 0 && j == 0 {
        let mut script = tail.clone();
        script.reverse();
        out.push(script);
        return;
    }
    if path_len > distance {
        return;
    }

    let insert_cost = if i > 0 { Some(matrix.get(i - 1, j)) } else { None };
    let delete_cost = if j > 0 { Some(matrix.get(i, j - 1)) } else { None };
    let diag_cost = if i > 0 && j > 0 {
        Some(matrix.get(i - 1, j - 1))
    } else {
        None
    };

    let cost_min = [insert_cost, delete_cost, diag_cost]
        .into_iter()
        .flatten()
        .min()
        .expect("at least one neighbour exists while (i, j) != (0, 0)");

    if insert_cost == Some(cost_min) {
        tail.push(EditOp::Insert { p: i - 1, w: j });
        reverse_recurse(matrix, i - 1, j, path_len + 1, distance, tail, out);
        tail.pop();
    }

    if delete_cost == Some(cost_min) {
        tail.push(EditOp::Delete { p: i, w: j - 1 });
        reverse_recurse(matrix, i, j - 1, path_len + 1, distance, tail, out);
        tail.pop();
    }

    if diag_cost == Some(cost_min) {
        if cost_min == matrix.get(i, j) {
            // No-cost diagonal: the characters matched, nothing to emit.
            reverse_recurse(matrix, i - 1, j - 1, path_len, distance, tail, out);
        } else {
            tail.push(EditOp::Replace { p: i - 1, w: j - 1 });
            reverse_recurse(matrix, i - 1, j - 1, path_len + 1, distance, tail, out);
            tail.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::apply_script;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn scripts_for(word: &str, password: &str) -> Vec<EditScript> {
        let matrix = Matrix::build(&chars(password), &chars(word));
        enumerate_scripts(&matrix)
    }

    #[test]
    fn every_script_has_minimum_length_and_applies_correctly() {
        for (word, password) in [
            ("california", "California"),
            ("rules", "ralse"),
            ("hello", "olleh"),
            ("password", "password1"),
            ("leet", "l33t"),
        ] {
            let matrix = Matrix::build(&chars(password), &chars(word));
            let distance = matrix.distance() as usize;
            let scripts = enumerate_scripts(&matrix);
            assert!(!scripts.is_empty(), "no scripts for {word} -> {password}");
            for script in &scripts {
                assert_eq!(script.len(), distance, "{word} -> {password}");
                let result: String = apply_script(&chars(word), &chars(password), script)
                    .into_iter()
                    .collect();
                assert_eq!(result, password);
            }
        }
    }

    #[test]
    fn identical_strings_yield_a_single_empty_script() {
        let scripts = scripts_for("same", "same");
        assert_eq!(scripts, vec![Vec::new()]);
    }

    #[test]
    fn reversal_produces_at_least_one_script() {
        let scripts = scripts_for("hello", "olleh");
        assert!(!scripts.is_empty());
    }
}
