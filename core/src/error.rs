//! The error type shared by all polychrome crates.

/// Errors reported by blueprint generation, validation, and coloring.
///
/// All operations in polychrome are deterministic, so every error denotes
/// invalid input rather than a transient condition. None of them is retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An argument was outside its valid domain, such as a negative
    /// subdivision level or an unknown shape name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A face refers to a vertex that does not exist.
    #[error(
        "vertex index {index} out of range at faces[{face}] \
         (vertex count {len})"
    )]
    IndexOutOfRange {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: usize,
        /// Number of vertices in the blueprint.
        len: usize,
    },

    /// Mesh input text could not be parsed.
    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },
}

/// Result type alias defaulting to [`enum@Error`] as the error type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    /// Convenience constructor for [`Error::InvalidArgument`].
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
