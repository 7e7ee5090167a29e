use std::error::Error;
use std::fmt;
use std::io;

/// Shape of a matrix, as `(rows, columns)`.
pub type Shape = (usize, usize);

/// An error type for every fallible network, layer
/// and data set operation.
///
/// Failed operations never leave a layer or network with
/// invalid sizes; at most the stored values are stale.
#[derive(Debug)]
pub enum NetworkError {
    /// A matrix or vector did not have the required dimensions.
    ShapeMismatch {
        operation: &'static str,
        expected: Shape,
        found: Shape,
    },
    /// A network was requested with no layers, or with an empty layer.
    EmptyStructure,
    /// Two networks with different structures were combined.
    StructureMismatch(Vec<usize>, Vec<usize>),
    /// Training samples and labels differ in number.
    SampleLabelCountMismatch { samples: usize, labels: usize },
    /// The batch size is zero or exceeds the number of samples.
    InvalidBatchSize { batch_size: usize, samples: usize },
    /// A per-sample derivative was requested for a sample that
    /// was not part of the last backward pass.
    SampleIndexOutOfRange { index: usize, count: usize },
    /// A data element has no label to generate an output from.
    LabelNotSet,
    /// A test label never occurs among the training labels.
    UnknownLabel(i64),
    /// Reading or writing a persisted network failed.
    Io(io::Error),
    /// A persisted network could not be (de)serialized.
    Format(serde_json::Error),
    /// A persisted network is inconsistent.
    InvalidRecord(String),
}

impl NetworkError {
    pub(crate) fn shape_mismatch(operation: &'static str, expected: Shape, found: Shape) -> Self {
        Self::ShapeMismatch {
            operation,
            expected,
            found,
        }
    }

    /// Returns whether the error is a dimension disagreement.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                operation,
                expected,
                found,
            } => write!(
                f,
                "{} expected a {}x{} matrix, got {}x{}",
                operation, expected.0, expected.1, found.0, found.1
            ),
            Self::EmptyStructure => write!(f, "network structure contains no or empty layers"),
            Self::StructureMismatch(first, second) => write!(
                f,
                "network structures {:?} and {:?} differ",
                first, second
            ),
            Self::SampleLabelCountMismatch { samples, labels } => write!(
                f,
                "number of samples ({}) and labels ({}) mismatch",
                samples, labels
            ),
            Self::InvalidBatchSize {
                batch_size,
                samples,
            } => write!(
                f,
                "batch size {} invalid for {} available samples",
                batch_size, samples
            ),
            Self::SampleIndexOutOfRange { index, count } => write!(
                f,
                "sample index {} out of range for {} derivatives",
                index, count
            ),
            Self::LabelNotSet => write!(f, "label not set"),
            Self::UnknownLabel(label) => write!(f, "unknown label {}", label),
            Self::Io(e) => write!(f, "network i/o failed: {}", e),
            Self::Format(e) => write!(f, "network format error: {}", e),
            Self::InvalidRecord(reason) => write!(f, "invalid network record: {}", reason),
        }
    }
}

impl Error for NetworkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for NetworkError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e)
    }
}
