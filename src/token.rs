//! The hashcat-compatible mangling instruction alphabet (§6 of the rule language).
//!
//! A [`RuleToken`]'s [`Display`](std::fmt::Display) impl renders exactly the textual
//! grammar the rule engine expects; there is deliberately no parser, since this crate
//! only ever emits rules, it never consumes them.

use std::fmt;

/// A position within a word or password, encoded as hashcat does: `0`-`9` for the first
/// ten positions, then `A`-`Z` for positions 10 through 35.
///
/// Positions beyond 35 cannot be represented positionally; callers should fall back to
/// the affix-compacted operators (`^`, `$`, `[`, `]`) in that case, per the lifter's
/// out-of-range handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position(pub usize);

impl Position {
    /// The largest position `Position` can encode as a single base-36 digit.
    pub const MAX: usize = 35;

    /// Encodes `index` as a position, if it fits in a single base-36 digit.
    pub fn new(index: usize) -> Option<Position> {
        (index <= Self::MAX).then_some(Position(index))
    }

    fn to_alpha(self) -> char {
        let n = self.0 as u32;
        if n < 10 {
            char::from_digit(n, 10).expect("n < 10 is a valid base-10 digit")
        } else {
            (b'A' + (n - 10) as u8) as char
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_alpha())
    }
}

/// A single mangling instruction in the rule language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleToken {
    /// `:` no-op.
    Noop,
    /// `iXc` insert `c` at position `X`.
    InsertAt(Position, char),
    /// `oXc` overwrite position `X` with `c`.
    OverwriteAt(Position, char),
    /// `DX` delete position `X`.
    DeleteAt(Position),
    /// `^c` prepend `c`.
    Prepend(char),
    /// `$c` append `c`.
    Append(char),
    /// `[` delete first.
    TruncateLeft,
    /// `]` delete last.
    TruncateRight,
    /// `TX` toggle case at `X`.
    ToggleAt(Position),
    /// `t` toggle case of every letter.
    ToggleAll,
    /// `u` uppercase every letter.
    UppercaseAll,
    /// `l` lowercase every letter.
    LowercaseAll,
    /// `c` capitalize.
    Capitalize,
    /// `C` invert-capitalize.
    InvertCapitalize,
    /// `sAB` replace every `A` with `B`.
    ReplaceAll(char, char),
    /// `k` swap the first two characters.
    SwapFront,
    /// `K` swap the last two characters.
    SwapBack,
    /// `*XY` swap positions `X` and `Y`.
    SwapAt(Position, Position),
    /// `.X` position `X` takes the value of position `X + 1`.
    PropagateRight(Position),
    /// `,X` position `X` takes the value of position `X - 1`.
    PropagateLeft(Position),
    /// `+X` ASCII-increment position `X`.
    AsciiPlus(Position),
    /// `-X` ASCII-decrement position `X`.
    AsciiMinus(Position),
    /// `LX` bitwise shift-left position `X`.
    ShiftLeft(Position),
    /// `RX` bitwise shift-right position `X`.
    ShiftRight(Position),
}

impl fmt::Display for RuleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RuleToken::Noop => write!(f, ":"),
            RuleToken::InsertAt(p, c) => write!(f, "i{p}{c}"),
            RuleToken::OverwriteAt(p, c) => write!(f, "o{p}{c}"),
            RuleToken::DeleteAt(p) => write!(f, "D{p}"),
            RuleToken::Prepend(c) => write!(f, "^{c}"),
            RuleToken::Append(c) => write!(f, "${c}"),
            RuleToken::TruncateLeft => write!(f, "["),
            RuleToken::TruncateRight => write!(f, "]"),
            RuleToken::ToggleAt(p) => write!(f, "T{p}"),
            RuleToken::ToggleAll => write!(f, "t"),
            RuleToken::UppercaseAll => write!(f, "u"),
            RuleToken::LowercaseAll => write!(f, "l"),
            RuleToken::Capitalize => write!(f, "c"),
            RuleToken::InvertCapitalize => write!(f, "C"),
            RuleToken::ReplaceAll(a, b) => write!(f, "s{a}{b}"),
            RuleToken::SwapFront => write!(f, "k"),
            RuleToken::SwapBack => write!(f, "K"),
            RuleToken::SwapAt(x, y) => write!(f, "*{x}{y}"),
            RuleToken::PropagateRight(p) => write!(f, ".{p}"),
            RuleToken::PropagateLeft(p) => write!(f, ",{p}"),
            RuleToken::AsciiPlus(p) => write!(f, "+{p}"),
            RuleToken::AsciiMinus(p) => write!(f, "-{p}"),
            RuleToken::ShiftLeft(p) => write!(f, "L{p}"),
            RuleToken::ShiftRight(p) => write!(f, "R{p}"),
        }
    }
}

/// Renders a full rule, tokens separated by spaces, per §6.
pub fn render_rule(tokens: &[RuleToken]) -> String {
    tokens
        .iter()
        .map(RuleToken::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_encodes_like_hashcat() {
        assert_eq!(Position::new(0).unwrap().to_string(), "0");
        assert_eq!(Position::new(9).unwrap().to_string(), "9");
        assert_eq!(Position::new(10).unwrap().to_string(), "A");
        assert_eq!(Position::new(35).unwrap().to_string(), "Z");
        assert!(Position::new(36).is_none());
    }

    #[test]
    fn tokens_render_to_the_documented_grammar() {
        assert_eq!(RuleToken::Noop.to_string(), ":");
        assert_eq!(
            RuleToken::InsertAt(Position(1), 'a').to_string(),
            "i1a"
        );
        assert_eq!(RuleToken::DeleteAt(Position(0)).to_string(), "D0");
        assert_eq!(RuleToken::Append('1').to_string(), "$1");
        assert_eq!(RuleToken::Capitalize.to_string(), "c");
        assert_eq!(
            RuleToken::ReplaceAll('e', '3').to_string(),
            "se3"
        );
        assert_eq!(
            RuleToken::SwapAt(Position(1), Position(2)).to_string(),
            "*12"
        );
    }

    #[test]
    fn render_rule_joins_with_spaces() {
        let rule = vec![
            RuleToken::OverwriteAt(Position(1), 'a'),
            RuleToken::OverwriteAt(Position(2), 'l'),
        ];
        assert_eq!(render_rule(&rule), "o1a o2l");
    }
}
