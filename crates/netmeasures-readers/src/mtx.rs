//! Matrix Market coordinate format.
//!
//! ```text
//! %%MatrixMarket matrix coordinate real general
//! % comments
//! 3 3 2
//! 1 2 0.5
//! 2 3 1.5
//! ```
//!
//! The first line names the storage format, the field type of the values and
//! the symmetry of the matrix. Only the combinations listed in
//! [`SUPPORTED_HEADERS`] are accepted, and the header is validated before any
//! data line is looked at. Indices are kept exactly as written (1-based).

use crate::config::ReaderConfig;
use crate::errors::{ReaderError, ReaderResult};
use crate::traits::GraphReader;
use log::{debug, trace};
use netmeasures::{CanonicalGraph, GraphKind, NodeKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Magic identifier opening every Matrix Market file.
pub const MATRIX_MARKET_ID: &str = "%%MatrixMarket";

/// The only object kind this reader understands.
pub const MATRIX_OBJECT: &str = "matrix";

/// How entries are laid out in the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Storage {
    /// One `row column [value]` line per nonzero entry
    Coordinate,
    /// Dense column-major values
    Array,
}

/// Type of the stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    /// Floating point
    Real,
    /// Integer
    Integer,
    /// Pair of floating point numbers
    Complex,
    /// No value; presence only
    Pattern,
}

/// Symmetry structure of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Symmetry {
    /// No symmetry
    General,
    /// `a(i,j) = a(j,i)`
    Symmetric,
    /// `a(i,j) = -a(j,i)`
    SkewSymmetric,
    /// `a(i,j) = conj(a(j,i))`
    Hermitian,
}

impl Storage {
    /// Keyword as written in headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Storage::Coordinate => "coordinate",
            Storage::Array => "array",
        }
    }

    fn from_keyword(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "coordinate" => Some(Storage::Coordinate),
            "array" => Some(Storage::Array),
            _ => None,
        }
    }
}

impl Field {
    /// Keyword as written in headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Real => "real",
            Field::Integer => "integer",
            Field::Complex => "complex",
            Field::Pattern => "pattern",
        }
    }

    /// Tokens on a coordinate data line: two indices plus the value parts.
    pub fn entry_width(&self) -> usize {
        match self {
            Field::Pattern => 2,
            Field::Integer | Field::Real => 3,
            Field::Complex => 4,
        }
    }

    fn from_keyword(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "real" => Some(Field::Real),
            "integer" => Some(Field::Integer),
            "complex" => Some(Field::Complex),
            "pattern" => Some(Field::Pattern),
            _ => None,
        }
    }
}

impl Symmetry {
    /// Keyword as written in headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Symmetry::General => "general",
            Symmetry::Symmetric => "symmetric",
            Symmetry::SkewSymmetric => "skew-symmetric",
            Symmetry::Hermitian => "hermitian",
        }
    }

    /// General matrices become directed graphs, every symmetric form undirected.
    pub fn graph_kind(&self) -> GraphKind {
        match self {
            Symmetry::General => GraphKind::Directed,
            Symmetry::Symmetric | Symmetry::SkewSymmetric | Symmetry::Hermitian => {
                GraphKind::Undirected
            }
        }
    }

    fn from_keyword(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "general" => Some(Symmetry::General),
            "symmetric" => Some(Symmetry::Symmetric),
            "skew-symmetric" => Some(Symmetry::SkewSymmetric),
            "hermitian" => Some(Symmetry::Hermitian),
            _ => None,
        }
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every accepted `(storage, field, symmetry)` header.
pub const SUPPORTED_HEADERS: &[(Storage, Field, Symmetry)] = {
    use Field::{Complex, Integer, Pattern, Real};
    use Storage::{Array, Coordinate};
    use Symmetry::{General, Hermitian, SkewSymmetric, Symmetric};
    &[
        (Coordinate, Real, General),
        (Coordinate, Real, Symmetric),
        (Coordinate, Real, SkewSymmetric),
        (Coordinate, Integer, General),
        (Coordinate, Integer, Symmetric),
        (Coordinate, Integer, SkewSymmetric),
        (Coordinate, Complex, General),
        (Coordinate, Complex, Symmetric),
        (Coordinate, Complex, SkewSymmetric),
        (Coordinate, Complex, Hermitian),
        (Coordinate, Pattern, General),
        (Coordinate, Pattern, Symmetric),
        (Array, Real, General),
        (Array, Real, Symmetric),
        (Array, Real, SkewSymmetric),
        (Array, Integer, General),
        (Array, Integer, Symmetric),
        (Array, Integer, SkewSymmetric),
        (Array, Complex, General),
        (Array, Complex, Symmetric),
        (Array, Complex, SkewSymmetric),
        (Array, Complex, Hermitian),
    ]
};

/// Decoded header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixHeader {
    /// Body layout
    pub storage: Storage,
    /// Value type
    pub field: Field,
    /// Matrix symmetry
    pub symmetry: Symmetry,
}

impl MatrixHeader {
    /// Whether this combination appears in [`SUPPORTED_HEADERS`].
    pub fn is_supported(&self) -> bool {
        SUPPORTED_HEADERS.contains(&(self.storage, self.field, self.symmetry))
    }

    /// Kind of graph this matrix describes.
    pub fn graph_kind(&self) -> GraphKind {
        self.symmetry.graph_kind()
    }

    /// Type of the values carried by each entry.
    pub fn value_kind(&self) -> Field {
        self.field
    }
}

impl fmt::Display for MatrixHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{MATRIX_MARKET_ID} {MATRIX_OBJECT} {} {} {}",
            self.storage, self.field, self.symmetry
        )
    }
}

/// Decoded dimension line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Row count
    pub rows: usize,
    /// Column count
    pub columns: usize,
    /// Number of data lines that follow
    pub entries: usize,
}

/// Value of one coordinate entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntryValue {
    /// Presence only
    Pattern,
    /// Integer value
    Integer(i64),
    /// Real value
    Real(f64),
    /// Complex value
    Complex {
        /// Real part
        re: f64,
        /// Imaginary part
        im: f64,
    },
}

/// One coordinate entry, indices as written (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// 1-based source line
    pub line: usize,
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
    /// Decoded value
    pub value: EntryValue,
}

/// A parsed Matrix Market document.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixMarket {
    /// Header line
    pub header: MatrixHeader,
    /// Dimension line
    pub dimensions: Dimensions,
    /// Entries in file order
    pub entries: Vec<Entry>,
}

impl MatrixMarket {
    /// Parse a document held in memory.
    pub fn parse_str(source: &str) -> ReaderResult<Self> {
        let mut lines = source.lines().enumerate().map(|(i, line)| (i + 1, line));

        let (_, first) = lines.next().ok_or(ReaderError::MissingLine {
            line: 1,
            what: "Matrix Market header",
        })?;
        let header = parse_header(first)?;
        debug!(
            "Matrix Market header: {} {} {} ({})",
            header.storage,
            header.field,
            header.symmetry,
            header.graph_kind()
        );

        let mut last_line = 1;
        let (dimension_line, dimension_text) = loop {
            match lines.next() {
                Some((number, line)) => {
                    last_line = number;
                    let trimmed = line.trim();
                    if !trimmed.is_empty() && !trimmed.starts_with('%') {
                        break (number, trimmed);
                    }
                }
                None => {
                    return Err(ReaderError::MissingLine {
                        line: last_line + 1,
                        what: "dimension line",
                    })
                }
            }
        };
        let dimensions = parse_dimensions(&header, dimension_line, dimension_text)?;
        debug!(
            "Dimensions {}x{}, {} entries",
            dimensions.rows, dimensions.columns, dimensions.entries
        );

        let mut entries = Vec::with_capacity(dimensions.entries.min(1 << 16));
        for (number, line) in lines.take(dimensions.entries) {
            let entry = parse_entry(&header, number, line)?;
            trace!("Line {number}: {entry:?}");
            entries.push(entry);
        }
        if entries.len() < dimensions.entries {
            if header.storage == Storage::Array {
                return Err(array_unimplemented());
            }
            return Err(ReaderError::MissingEntries {
                missing: dimensions.entries - entries.len(),
                declared: dimensions.entries,
            });
        }

        Ok(Self {
            header,
            dimensions,
            entries,
        })
    }

    /// Read and parse a file.
    pub fn from_file(path: &Path) -> ReaderResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| ReaderError::io(path, e))?;
        Self::parse_str(&source)
    }
}

fn parse_header(line: &str) -> ReaderResult<MatrixHeader> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 5 {
        return Err(ReaderError::HeaderArity {
            line: 1,
            expected: 5,
            found: tokens.len(),
        });
    }

    if tokens[0] != MATRIX_MARKET_ID {
        return Err(ReaderError::invalid_keyword(1, "format id", tokens[0]));
    }
    if !tokens[1].eq_ignore_ascii_case(MATRIX_OBJECT) {
        return Err(ReaderError::invalid_keyword(1, "object", tokens[1]));
    }
    let storage = Storage::from_keyword(tokens[2])
        .ok_or_else(|| ReaderError::invalid_keyword(1, "storage format", tokens[2]))?;
    let field = Field::from_keyword(tokens[3])
        .ok_or_else(|| ReaderError::invalid_keyword(1, "field", tokens[3]))?;
    let symmetry = Symmetry::from_keyword(tokens[4])
        .ok_or_else(|| ReaderError::invalid_keyword(1, "symmetry", tokens[4]))?;

    let header = MatrixHeader {
        storage,
        field,
        symmetry,
    };
    if !header.is_supported() {
        return Err(ReaderError::UnsupportedHeader {
            header: tokens.join(" "),
        });
    }
    Ok(header)
}

fn parse_dimensions(header: &MatrixHeader, line: usize, text: &str) -> ReaderResult<Dimensions> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let expected = match header.storage {
        Storage::Coordinate => 3,
        Storage::Array => 2,
    };
    if tokens.len() != expected {
        return Err(ReaderError::DimensionArity {
            line,
            expected,
            found: tokens.len(),
        });
    }

    let parse = |token: &str| {
        token
            .parse::<usize>()
            .map_err(|_| ReaderError::invalid_number(line, "dimension", token))
    };
    let rows = parse(tokens[0])?;
    let columns = parse(tokens[1])?;
    let entries = match header.storage {
        Storage::Coordinate => parse(tokens[2])?,
        Storage::Array => rows.saturating_mul(columns),
    };

    Ok(Dimensions {
        rows,
        columns,
        entries,
    })
}

pub(crate) fn array_unimplemented() -> ReaderError {
    ReaderError::Unimplemented {
        feature: "array storage entry decoding",
    }
}

fn parse_entry(header: &MatrixHeader, line: usize, text: &str) -> ReaderResult<Entry> {
    if header.storage == Storage::Array {
        return Err(array_unimplemented());
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let expected = header.field.entry_width();
    if tokens.len() != expected {
        return Err(ReaderError::EntryArity {
            line,
            expected,
            found: tokens.len(),
        });
    }

    let index = |token: &str, what: &'static str| {
        token
            .parse::<usize>()
            .map_err(|_| ReaderError::invalid_number(line, what, token))
    };
    let real = |token: &str| {
        token
            .parse::<f64>()
            .map_err(|_| ReaderError::invalid_number(line, "value", token))
    };

    let row = index(tokens[0], "row index")?;
    let column = index(tokens[1], "column index")?;
    let value = match header.field {
        Field::Pattern => EntryValue::Pattern,
        Field::Integer => EntryValue::Integer(
            tokens[2]
                .parse::<i64>()
                .map_err(|_| ReaderError::invalid_number(line, "value", tokens[2]))?,
        ),
        Field::Real => EntryValue::Real(real(tokens[2])?),
        Field::Complex => EntryValue::Complex {
            re: real(tokens[2])?,
            im: real(tokens[3])?,
        },
    };

    Ok(Entry {
        line,
        row,
        column,
        value,
    })
}

/// [`GraphReader`] for `.mtx` files.
///
/// The format fixes its own comment marker (`%`) and whitespace separation, so
/// the carried [`ReaderConfig`] is only reported through
/// [`GraphReader::config`] and never consulted while parsing.
#[derive(Debug, Clone, Default)]
pub struct MatrixMarketReader {
    config: ReaderConfig,
}

impl MatrixMarketReader {
    /// Create a reader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with the given configuration.
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }
}

impl GraphReader for MatrixMarketReader {
    fn format(&self) -> &str {
        "matrix-market"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".mtx"]
    }

    fn read_source<N: NodeKey>(&self, source: &str, name: &str) -> ReaderResult<CanonicalGraph<N>> {
        crate::builder::build_from_mtx_str(source, name)
    }

    fn config(&self) -> &ReaderConfig {
        &self.config
    }
}
