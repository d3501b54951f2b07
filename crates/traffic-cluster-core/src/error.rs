//! Error types for pattern loading, clustering, and evaluation.
//!
//! All failures surface synchronously to the caller; the engine never
//! recovers silently. A failure indicates bad input or an unmet
//! precondition, not a transient condition.

use thiserror::Error;

/// Result alias for all operations in this crate.
pub type ClusterResult<T> = Result<T, ClusterError>;

/// Errors that can occur while loading patterns, clustering, or scoring.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// Malformed input record.
    ///
    /// Raised when a record's field count matches no known view, the
    /// identifier is empty, or a value field is not numeric.
    #[error("parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number of the offending record
        line: usize,
        /// Description of what is wrong with the record
        reason: String,
    },

    /// Unrecognized pattern view name.
    #[error("unknown pattern view {name:?} (expected daily, weekly, or combined)")]
    InvalidView {
        /// The name that failed to parse
        name: String,
    },

    /// Requested cluster count is outside the valid range for the view.
    #[error("k must be between 2 and the entity count ({entities}), got {k}")]
    InvalidK {
        /// Requested number of clusters
        k: usize,
        /// Number of distinct entities in the selected view
        entities: usize,
    },

    /// Invalid caller-supplied parameter.
    #[error("invalid parameter: {message}")]
    InvalidParameter {
        /// Description of what's wrong with the parameter
        message: String,
    },

    /// Correlation requires equal-length vectors.
    ///
    /// A hard precondition: mismatched lengths are rejected rather than
    /// silently truncated or padded.
    #[error("vector length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first vector
        left: usize,
        /// Length of the second vector
        right: usize,
    },

    /// A vector has zero standard deviation (constant vector).
    ///
    /// Standardization divides by the standard deviation, so temporal
    /// correlation is undefined for constant vectors. Surfaced to the
    /// caller instead of producing NaN/Inf.
    #[error("zero standard deviation makes temporal correlation undefined")]
    DegenerateVector,

    /// A produced partition and a reference partition cover different
    /// entity sets.
    #[error(
        "partitions cover different entity sets ({missing} missing from partition, \
         {unexpected} not in reference)"
    )]
    MismatchedUniverse {
        /// Entities present in the reference but absent from the partition
        missing: usize,
        /// Entities present in the partition but absent from the reference
        unexpected: usize,
    },

    /// Both partitions have zero entropy, so NMI's denominator is zero.
    ///
    /// Occurs only in the degenerate single-group vs single-group case.
    #[error("both partitions have zero entropy; NMI is undefined")]
    ZeroEntropy,

    /// Reading the input source failed.
    #[error("I/O error reading input: {0}")]
    Io(#[from] std::io::Error),
}

impl ClusterError {
    /// Create a Parse error.
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let errors: Vec<ClusterError> = vec![
            ClusterError::parse(3, "empty identifier"),
            ClusterError::InvalidView {
                name: "monthly".to_string(),
            },
            ClusterError::InvalidK { k: 1, entities: 8 },
            ClusterError::invalid_parameter("max_iterations must be > 0"),
            ClusterError::LengthMismatch { left: 24, right: 70 },
            ClusterError::DegenerateVector,
            ClusterError::MismatchedUniverse {
                missing: 2,
                unexpected: 1,
            },
            ClusterError::ZeroEntropy,
        ];

        let expected_substrings = [
            "line 3",
            "monthly",
            "got 1",
            "max_iterations",
            "24 vs 70",
            "zero standard deviation",
            "2 missing",
            "zero entropy",
        ];

        for (err, expected) in errors.iter().zip(expected_substrings.iter()) {
            let display = err.to_string();
            assert!(
                display.contains(expected),
                "Display for {:?} should contain '{}', got: {}",
                err,
                expected,
                display
            );
        }
    }
}
