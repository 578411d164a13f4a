use std::fmt;

/// An alignment or placement keyword that does not name a known value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseAlignError(pub String);

impl ParseAlignError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for ParseAlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alignment parse error: {}", self.0)
    }
}

impl std::error::Error for ParseAlignError {}
