use crate::error::{Marker, ToggleError};

/// The comment markers to toggle.
///
/// - A prefix alone selects single-line style (`//`, `#`, `--`): every
///   non-blank line gets its own marker.
/// - A prefix plus suffix selects block style (`/*` `*/`, `<!--` `-->`): the
///   markers wrap the whole non-blank span once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSpec {
    prefix: Vec<u8>,
    suffix: Option<Vec<u8>>,
}

impl CommentSpec {
    pub fn new(prefix: impl Into<Vec<u8>>, suffix: Option<Vec<u8>>) -> Result<Self, ToggleError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(ToggleError::EmptyMarker(Marker::Prefix));
        }
        if suffix.as_ref().is_some_and(|s| s.is_empty()) {
            return Err(ToggleError::EmptyMarker(Marker::Suffix));
        }

        Ok(Self { prefix, suffix })
    }

    pub fn single_line(prefix: impl Into<Vec<u8>>) -> Result<Self, ToggleError> {
        Self::new(prefix, None)
    }

    pub fn block(
        prefix: impl Into<Vec<u8>>,
        suffix: impl Into<Vec<u8>>,
    ) -> Result<Self, ToggleError> {
        Self::new(prefix, Some(suffix.into()))
    }

    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Empty for single-line style.
    pub fn suffix(&self) -> &[u8] {
        self.suffix.as_deref().unwrap_or_default()
    }

    pub fn is_block_style(&self) -> bool {
        self.suffix.is_some()
    }

    pub(crate) fn prefix_lossy(&self) -> String {
        String::from_utf8_lossy(&self.prefix).into_owned()
    }

    pub(crate) fn suffix_lossy(&self) -> String {
        String::from_utf8_lossy(self.suffix()).into_owned()
    }
}
