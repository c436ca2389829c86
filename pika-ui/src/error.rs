//! Error types for the Pika UI library

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregationError {
    /// The raw string names no known aggregation kind
    #[error("Aggregation error: unknown kind {0:?}")]
    UnknownKind(String),
}

#[cfg(test)]
mod tests {
    use super::AggregationError;

    #[test]
    fn test_display() {
        let err = AggregationError::UnknownKind("median".to_string());
        assert_eq!(err.to_string(), "Aggregation error: unknown kind \"median\"");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(AggregationError::UnknownKind(String::new()));
        assert_eq!(err.to_string(), "Aggregation error: unknown kind \"\"");
    }
}
