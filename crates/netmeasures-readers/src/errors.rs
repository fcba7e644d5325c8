use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a graph file
#[derive(Error, Debug)]
pub enum ReaderError {
    /// A header line has the wrong number of tokens
    #[error("Line {line}: expected {expected} header tokens, found {found}")]
    HeaderArity {
        /// 1-based line number
        line: usize,
        /// Required token count
        expected: usize,
        /// Tokens present
        found: usize,
    },

    /// A header token is not one of the recognized keywords
    #[error("Line {line}: invalid {role} '{token}'")]
    InvalidKeyword {
        /// 1-based line number
        line: usize,
        /// Which header slot the token occupies (e.g. "symmetry")
        role: &'static str,
        /// The offending token
        token: String,
    },

    /// Recognized keywords in a combination the format does not allow
    #[error("Unsupported header combination '{header}'")]
    UnsupportedHeader {
        /// The header as written
        header: String,
    },

    /// Input ended where a required line was expected
    #[error("Line {line}: missing {what}")]
    MissingLine {
        /// 1-based line number that was expected
        line: usize,
        /// What the line should have contained
        what: &'static str,
    },

    /// The dimension line has the wrong number of tokens
    #[error("Line {line}: expected {expected} dimension values, found {found}")]
    DimensionArity {
        /// 1-based line number
        line: usize,
        /// Required token count
        expected: usize,
        /// Tokens present
        found: usize,
    },

    /// A data line has the wrong number of tokens
    #[error("Line {line}: expected {expected} items for entry, found {found}")]
    EntryArity {
        /// 1-based line number
        line: usize,
        /// Required token count
        expected: usize,
        /// Tokens present
        found: usize,
    },

    /// A token that should be numeric is not
    #[error("Line {line}: invalid {what} '{token}'")]
    InvalidNumber {
        /// 1-based line number
        line: usize,
        /// What the token was meant to be (e.g. "row index")
        what: &'static str,
        /// The offending token
        token: String,
    },

    /// An endpoint token does not convert to the requested node identifier type
    #[error("Line {line}: invalid node identifier '{token}'")]
    InvalidNodeId {
        /// 1-based line number
        line: usize,
        /// The offending token
        token: String,
    },

    /// Input ended before the declared number of entries
    #[error("Missing {missing} entries (declared {declared})")]
    MissingEntries {
        /// How many entries are absent
        missing: usize,
        /// How many entries the dimension line declared
        declared: usize,
    },

    /// The edge-list body disagrees with the declared edge count
    #[error("Declared {declared} edges, found {found}")]
    DeclaredCountMismatch {
        /// Count from the header
        declared: usize,
        /// Records in the body
        found: usize,
    },

    /// A grammatically valid construct whose decoding is not implemented
    #[error("Not implemented: {feature}")]
    Unimplemented {
        /// Description of the unsupported path
        feature: &'static str,
    },

    /// File extension does not map to a known reader
    #[error("Unsupported graph file format: {path}")]
    UnsupportedFormat {
        /// The rejected path
        path: PathBuf,
    },

    /// Failed to read file
    #[error("IO error reading {path}: {source}")]
    Io {
        /// The file being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a [`ReaderError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input; permanent
    Format,
    /// Valid input on a path that is not implemented
    Unimplemented,
    /// Filesystem failure
    Io,
}

impl ReaderError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReaderError::Unimplemented { .. } => ErrorKind::Unimplemented,
            ReaderError::Io { .. } => ErrorKind::Io,
            _ => ErrorKind::Format,
        }
    }

    pub(crate) fn invalid_number(line: usize, what: &'static str, token: &str) -> Self {
        ReaderError::InvalidNumber {
            line,
            what,
            token: token.to_string(),
        }
    }

    pub(crate) fn invalid_keyword(line: usize, role: &'static str, token: &str) -> Self {
        ReaderError::InvalidKeyword {
            line,
            role,
            token: token.to_string(),
        }
    }

    pub(crate) fn invalid_node_id(line: usize, token: &str) -> Self {
        ReaderError::InvalidNodeId {
            line,
            token: token.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReaderError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for reader operations
pub type ReaderResult<T> = Result<T, ReaderError>;
