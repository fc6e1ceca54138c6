//! Error types for the styling system.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the styling system.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A widget-kind name did not match any known kind.
    #[error("unknown widget kind '{name}'")]
    UnknownWidgetKind { name: String },
}

impl Error {
    /// Create an unknown-widget-kind error.
    pub fn unknown_widget_kind(name: impl Into<String>) -> Self {
        Self::UnknownWidgetKind { name: name.into() }
    }
}
