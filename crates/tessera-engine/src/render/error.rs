use std::fmt;

/// Misuse of a [`RenderContext`](super::RenderContext)'s pass state machine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderError {
    /// `begin_pass` was called while a pass was already in progress.
    AlreadyPainting,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::AlreadyPainting => {
                write!(f, "render context is already painting; use a separate context per pass")
            }
        }
    }
}

impl std::error::Error for RenderError {}
