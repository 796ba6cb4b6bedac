//! Error types for the layout engine

use thiserror::Error;

use crate::types::Position;

/// Conditions raised while deriving layout values.
///
/// All of them are local: a renderer can substitute an empty layout or a
/// zero percentage and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("No chromosomes to scale: the input set is empty")]
    EmptyInputSet,

    #[error("Invalid coordinate: {start}-{end} does not fit a chromosome of length {length}")]
    InvalidCoordinate {
        start: Position,
        end: Position,
        length: Position,
    },

    #[error("Division by zero: percentage of an empty total")]
    DivisionByZero,
}

pub type LayoutResult<T> = Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_coordinate_message() {
        let err = LayoutError::InvalidCoordinate { start: 10, end: 5, length: 100 };
        assert_eq!(
            err.to_string(),
            "Invalid coordinate: 10-5 does not fit a chromosome of length 100"
        );
    }
}
