pub type MinifakeResult<T> = std::result::Result<T, MinifakeError>;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternErrorKind {
    /// A closed `[...]` token whose content is not `min-max`.
    MalformedRange {
        token: String,
    },
    InvertedRange {
        min: u64,
        max: u64,
    },
    InvertedRepeat {
        min: u64,
        max: u64,
    },
    RepeatTooLarge {
        count: u64,
        limit: u64,
    },
}

impl std::fmt::Display for PatternErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRange { token } => {
                write!(f, "Malformed range token '{}', expected '[min-max]'", token)
            }
            Self::InvertedRange { min, max } => {
                write!(f, "Range lower bound {} exceeds upper bound {}", min, max)
            }
            Self::InvertedRepeat { min, max } => {
                write!(f, "Repeat lower bound {} exceeds upper bound {}", min, max)
            }
            Self::RepeatTooLarge { count, limit } => {
                write!(f, "Repeat count {} exceeds the limit of {}", count, limit)
            }
        }
    }
}

impl std::error::Error for PatternErrorKind {}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternError {
    /// 1-indexed character column at which the offending token starts.
    pub column: usize,
    pub kind: PatternErrorKind,
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid pattern at column {}: {}", self.column, self.kind)
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MinifakeError {
    InvalidPattern(PatternError),
    EmptyInput { operation: String },
}

impl MinifakeError {
    pub(crate) fn empty_input(operation: &str) -> Self {
        Self::EmptyInput {
            operation: operation.to_string(),
        }
    }
}

impl std::fmt::Display for MinifakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern(pattern_error) => {
                write!(f, "{}", pattern_error)
            }
            Self::EmptyInput { operation } => {
                write!(f, "Cannot {} from an empty input", operation)
            }
        }
    }
}

impl std::error::Error for MinifakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern(pattern_error) => Some(pattern_error),
            Self::EmptyInput { .. } => None,
        }
    }
}

impl From<PatternError> for MinifakeError {
    fn from(error: PatternError) -> Self {
        Self::InvalidPattern(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ntest::timeout(100)]
    fn test_display_includes_column_and_bounds() {
        let error = MinifakeError::from(PatternError {
            column: 6,
            kind: PatternErrorKind::InvertedRange { min: 9, max: 4 },
        });
        assert_eq!(
            error.to_string(),
            "Invalid pattern at column 6: Range lower bound 9 exceeds upper bound 4"
        );
    }

    #[test]
    #[ntest::timeout(100)]
    fn test_empty_input_has_no_source() {
        use std::error::Error;

        let error = MinifakeError::empty_input("pick a key");
        assert_eq!(error.to_string(), "Cannot pick a key from an empty input");
        assert!(error.source().is_none());
    }
}
