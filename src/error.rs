use std::fmt;

/// Which of the two comment markers an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Prefix,
    Suffix,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Prefix => f.write_str("prefix"),
            Marker::Suffix => f.write_str("suffix"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleError {
    #[error("comment {0} must not be empty")]
    EmptyMarker(Marker),
    /// Line numbers are 1-based, columns are 0-based byte offsets.
    #[error("line {line}: expected comment prefix {prefix:?} at column {column}")]
    MissingPrefix {
        line: usize,
        column: usize,
        prefix: String,
    },
    #[error("line {line}: expected comment suffix {suffix:?} at end of line")]
    MissingSuffix { line: usize, suffix: String },
}
