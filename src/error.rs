use thiserror::Error;

/// Everything that can go wrong while reading, multiplying, normalizing or
/// inverting a permutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    #[error("cycle form cannot be empty or blank")]
    EmptyInput,

    #[error("cycle form must begin with '(' and end with ')'")]
    MissingParenthesis,

    #[error("close parenthesis at position {position} has no matching open parenthesis")]
    UnmatchedClose { position: usize },

    #[error("open parenthesis at position {position} appears inside another cycle")]
    NestedOpen { position: usize },

    #[error("empty cycle at position {position}")]
    EmptyCycle { position: usize },

    #[error("cycle opened at position {position} is never closed")]
    UnclosedCycle { position: usize },

    #[error("symbol '{symbol}' at position {position} appears twice in the same cycle")]
    RepeatedSymbol { symbol: char, position: usize },

    #[error("symbol '{symbol}' at position {position} is not inside any cycle")]
    SymbolOutsideCycle { symbol: char, position: usize },

    #[error("cycle form could not be normalized: it contains an empty cycle")]
    Normalization,

    #[error("cannot invert an empty array")]
    EmptyArray,
}

impl PermutationError {
    /// Whether the error comes from malformed bracketing or symbol layout.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            PermutationError::MissingParenthesis
                | PermutationError::UnmatchedClose { .. }
                | PermutationError::NestedOpen { .. }
                | PermutationError::EmptyCycle { .. }
                | PermutationError::UnclosedCycle { .. }
                | PermutationError::RepeatedSymbol { .. }
                | PermutationError::SymbolOutsideCycle { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_grouping() {
        assert!(PermutationError::MissingParenthesis.is_syntax());
        assert!(PermutationError::UnmatchedClose { position: 4 }.is_syntax());
        assert!(!PermutationError::EmptyInput.is_syntax());
        assert!(!PermutationError::Normalization.is_syntax());
        assert!(!PermutationError::EmptyArray.is_syntax());
    }

    #[test]
    fn test_messages_name_the_construct() {
        let err = PermutationError::UnmatchedClose { position: 4 };
        assert_eq!(
            err.to_string(),
            "close parenthesis at position 4 has no matching open parenthesis"
        );
    }
}
