//! Error kinds for cocoagraph operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// This enum categorizes errors to help users write clear error handling logic.
/// Users can match on ErrorKind to decide how to handle specific error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid configuration or parameters
    ConfigInvalid,

    /// Invalid argument passed to function
    InvalidArgument,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Render errors
    // =========================================================================
    /// The graphviz `dot` executable could not be found
    GraphvizNotFound,

    /// The graphviz `dot` executable failed to produce the artifact
    RenderFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::RenderFailed.to_string(), "RenderFailed");
        assert_eq!(ErrorKind::GraphvizNotFound.to_string(), "GraphvizNotFound");
    }

    #[test]
    fn test_as_str() {
        assert_eq!(ErrorKind::ConfigInvalid.as_str(), "ConfigInvalid");
        assert_eq!(ErrorKind::IoFailed.as_str(), "IoFailed");
    }
}
