//! Move sequences in standard cube notation.
//!
//! A sequence is whitespace-separated tokens, each a slice letter
//! (`U D L R F B M E S`) optionally followed by `'` for the inverse or `2`
//! for a half turn. One token is some number of the slice's quarter turns.

use std::fmt;

use crate::error::{KubeError, Result};
use crate::permutation::Permutation;
use crate::slices::{apply_move, Slice};

/// A slice turned by one, two, or three quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Twist {
    pub slice: Slice,
    /// Always in `1..=3`.
    quarter_turns: u8,
}

impl Twist {
    pub fn quarter(slice: Slice) -> Self {
        Self {
            slice,
            quarter_turns: 1,
        }
    }

    pub fn half(slice: Slice) -> Self {
        Self {
            slice,
            quarter_turns: 2,
        }
    }

    /// Three quarter turns, which undo one.
    pub fn inverse(slice: Slice) -> Self {
        Self {
            slice,
            quarter_turns: 3,
        }
    }

    pub fn quarter_turns(&self) -> u8 {
        self.quarter_turns
    }

    /// The twist that undoes this one.
    pub fn reversed(&self) -> Self {
        Self {
            slice: self.slice,
            quarter_turns: 4 - self.quarter_turns,
        }
    }

    pub fn apply(&self, permutation: &Permutation) -> Permutation {
        (0..self.quarter_turns).fold(*permutation, |p, _| apply_move(&p, self.slice))
    }
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quarter_turns {
            1 => write!(f, "{}", self.slice),
            2 => write!(f, "{}2", self.slice),
            _ => write!(f, "{}'", self.slice),
        }
    }
}

/// Parses one token such as `R`, `U'`, or `M2`.
pub fn parse_twist(token: &str) -> Result<Twist> {
    let unknown = || KubeError::UnknownMove(token.to_string());

    let mut chars = token.chars();
    let letter = chars.next().ok_or_else(unknown)?;
    let slice = Slice::from_letter(letter).map_err(|_| unknown())?;
    let twist = match (chars.next(), chars.next()) {
        (None, _) => Twist::quarter(slice),
        (Some('\''), None) => Twist::inverse(slice),
        (Some('2'), None) => Twist::half(slice),
        _ => return Err(unknown()),
    };
    Ok(twist)
}

/// Parses a whitespace-separated move sequence.
pub fn parse_sequence(text: &str) -> Result<Vec<Twist>> {
    let twists = text
        .split_whitespace()
        .map(parse_twist)
        .collect::<Result<Vec<_>>>()?;
    if twists.is_empty() {
        return Err(KubeError::EmptySequence);
    }
    Ok(twists)
}

/// Applies `twists` in order.
pub fn apply_sequence(permutation: &Permutation, twists: &[Twist]) -> Permutation {
    twists
        .iter()
        .fold(*permutation, |p, twist| twist.apply(&p))
}

/// Number of times `twists` must be repeated from solved to return to solved.
pub fn sequence_order(twists: &[Twist]) -> u64 {
    apply_sequence(&Permutation::IDENTITY, twists).order()
}

/// Formats a sequence back into notation.
pub fn format_sequence(twists: &[Twist]) -> String {
    twists
        .iter()
        .map(Twist::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(parse_twist("R"), Ok(Twist::quarter(Slice::Right)));
        assert_eq!(parse_twist("U'"), Ok(Twist::inverse(Slice::Up)));
        assert_eq!(parse_twist("M2"), Ok(Twist::half(Slice::Middle)));
        for bad in ["", "X", "u", "R''", "R3", "RU"] {
            assert_eq!(
                parse_twist(bad),
                Err(KubeError::UnknownMove(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_sequence() {
        let twists = parse_sequence("  U R\tU' R'  ").unwrap();
        assert_eq!(format_sequence(&twists), "U R U' R'");
        assert_eq!(parse_sequence("   "), Err(KubeError::EmptySequence));
        assert!(parse_sequence("U Q").is_err());
    }

    #[test]
    fn test_commutator_has_order_six() {
        let twists = parse_sequence("U R U' R'").unwrap();
        assert_eq!(sequence_order(&twists), 6);

        let mut permutation = Permutation::IDENTITY;
        for repetition in 1..=6 {
            permutation = apply_sequence(&permutation, &twists);
            assert_eq!(permutation.is_identity(), repetition == 6);
        }
    }

    #[test]
    fn test_inverse_undoes_quarter_turn() {
        for slice in Slice::ALL {
            let turned = Twist::quarter(slice).apply(&Permutation::IDENTITY);
            let back = Twist::quarter(slice).reversed().apply(&turned);
            assert!(back.is_identity(), "{slice}");
            assert_eq!(Twist::half(slice).reversed(), Twist::half(slice));
        }
    }

    #[test]
    fn test_sequence_then_reverse_is_identity() {
        let twists = parse_sequence("R U2 F' M E S' D B L2").unwrap();
        let undo: Vec<Twist> = twists.iter().rev().map(Twist::reversed).collect();
        let scrambled = apply_sequence(&Permutation::IDENTITY, &twists);
        assert!(!scrambled.is_identity());
        assert!(apply_sequence(&scrambled, &undo).is_identity());
    }

    #[test]
    fn test_single_turn_orders() {
        for slice in Slice::ALL {
            assert_eq!(sequence_order(&[Twist::quarter(slice)]), 4);
            assert_eq!(sequence_order(&[Twist::half(slice)]), 2);
        }
    }
}
