//! Structured error types for molmass.

use thiserror::Error;

/// Which formula rule a rejected input broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SyntaxErrorKind {
    /// Nothing left to parse once ignorable characters are removed.
    #[error("formula is empty")]
    Empty,

    /// The formula starts with a lowercase letter, a digit or a closing bracket.
    #[error("formula must start with an uppercase letter or an opening bracket")]
    InvalidStart,

    /// A quantity is directly followed by a lowercase letter.
    #[error("lowercase letter after a quantity")]
    LowercaseAfterQuantity,

    /// An opening bracket is directly followed by a lowercase letter or a digit.
    #[error("group must start with an uppercase letter or an opening bracket")]
    InvalidGroupStart,

    /// An opening bracket is directly followed by a closing bracket.
    #[error("empty group")]
    EmptyGroup,

    /// A closing bracket is directly followed by a lowercase letter.
    #[error("lowercase letter after a closing bracket")]
    LowercaseAfterGroup,

    /// A lowercase letter does not complete a known two-letter symbol.
    #[error("lowercase letter does not continue a known element symbol")]
    UnexpectedLowercase,

    /// An opening bracket is never closed.
    #[error("unclosed group")]
    UnclosedGroup,

    /// A closing bracket has no opening bracket.
    #[error("closing bracket without a matching opening bracket")]
    UnmatchedClose,

    /// A closing bracket closes a group opened with the other bracket kind.
    #[error("closing bracket does not match the opening bracket kind")]
    MismatchedClose,

    /// A character outside letters, digits and `()[]`.
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),

    /// A quantity, or the product of nested group quantities, does not fit in `u64`.
    #[error("quantity overflow")]
    QuantityOverflow,

    /// Groups nested deeper than the parser accepts.
    #[error("groups nested too deeply")]
    NestingTooDeep,
}

/// Unified error type for molmass operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MolmassError {
    /// The formula does not follow the formula grammar.
    ///
    /// `position` is a byte offset into `formula`, the normalized input.
    #[error("invalid formula {formula:?} at position {position}: {kind}")]
    Syntax {
        kind: SyntaxErrorKind,
        position: usize,
        formula: String,
    },
}

impl MolmassError {
    /// Build a syntax error for `formula` at byte offset `position`.
    pub fn syntax(kind: SyntaxErrorKind, position: usize, formula: &str) -> Self {
        MolmassError::Syntax {
            kind,
            position,
            formula: formula.to_string(),
        }
    }

    /// The violated rule.
    pub fn kind(&self) -> SyntaxErrorKind {
        match self {
            MolmassError::Syntax { kind, .. } => *kind,
        }
    }

    /// Byte offset of the offending character in the normalized formula.
    pub fn position(&self) -> usize {
        match self {
            MolmassError::Syntax { position, .. } => *position,
        }
    }

    /// The normalized formula from the offending character to the end.
    ///
    /// Empty when the error points past the end of the input (e.g. an unclosed group).
    pub fn context(&self) -> &str {
        match self {
            MolmassError::Syntax {
                position, formula, ..
            } => formula.get(*position..).unwrap_or(""),
        }
    }
}

/// Convenience alias used throughout molmass.
pub type Result<T> = std::result::Result<T, MolmassError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_formula_position_and_rule() {
        let err = MolmassError::syntax(SyntaxErrorKind::InvalidCharacter('^'), 2, "Cl^2");
        assert_eq!(
            err.to_string(),
            "invalid formula \"Cl^2\" at position 2: invalid character '^'"
        );
    }

    #[test]
    fn context_slices_from_position() {
        let err = MolmassError::syntax(SyntaxErrorKind::LowercaseAfterQuantity, 2, "C2h4o2");
        assert_eq!(err.kind(), SyntaxErrorKind::LowercaseAfterQuantity);
        assert_eq!(err.position(), 2);
        assert_eq!(err.context(), "h4o2");
    }

    #[test]
    fn context_past_end_is_empty() {
        let err = MolmassError::syntax(SyntaxErrorKind::UnclosedGroup, 6, "K2SO4(");
        assert_eq!(err.context(), "");
    }
}
