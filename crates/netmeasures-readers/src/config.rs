use serde::{Deserialize, Serialize};

/// Configuration for reader behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Character that starts a comment or header line in edge lists
    pub comment_marker: char,

    /// Field separator for edge-list records
    /// (None = any run of whitespace)
    pub delimiter: Option<char>,

    /// Fail when the edge-list body disagrees with the declared edge count
    /// instead of logging a warning
    pub enforce_declared_counts: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            comment_marker: '%',
            delimiter: None,
            enforce_declared_counts: false,
        }
    }
}

impl ReaderConfig {
    /// Create config that rejects edge lists whose declared counts are wrong
    pub fn strict() -> Self {
        Self {
            enforce_declared_counts: true,
            ..Default::default()
        }
    }

    /// Set the comment marker
    pub fn with_comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    /// Set the record delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Enable or disable declared-count enforcement
    pub fn with_enforce_declared_counts(mut self, enforce: bool) -> Self {
        self.enforce_declared_counts = enforce;
        self
    }

    /// Split a record into tokens according to the delimiter.
    pub(crate) fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self.delimiter {
            Some(delimiter) => line
                .split(delimiter)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect(),
            None => line.split_whitespace().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();
        assert_eq!(config.comment_marker, '%');
        assert_eq!(config.delimiter, None);
        assert!(!config.enforce_declared_counts);
    }

    #[test]
    fn test_builders() {
        let config = ReaderConfig::strict()
            .with_comment_marker('#')
            .with_delimiter(',');
        assert!(config.enforce_declared_counts);
        assert_eq!(config.comment_marker, '#');
        assert_eq!(config.tokenize("1, 2,0.5"), vec!["1", "2", "0.5"]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ReaderConfig::default().with_delimiter('\t');
        let json = serde_json::to_string(&config).unwrap();
        let back: ReaderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
