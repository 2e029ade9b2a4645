//! Error handling for weather rendering

use thiserror::Error;

/// Errors that can occur when constructing or configuring a renderer
#[derive(Debug, Error)]
pub enum Error {
    /// Renderer was given a degenerate drawing area
    #[error("Invalid dimensions: {width}x{height} (both must be non-zero)")]
    InvalidDimensions {
        /// Resolved width in pixels
        width: u32,
        /// Resolved height in pixels
        height: u32,
    },

    /// Frame rate of zero cannot gate a frame loop
    #[error("Invalid fps: must be non-zero")]
    InvalidFps,

    /// A custom weather registration collides with a built-in type
    #[error("Reserved weather name: '{0}' is a built-in type")]
    ReservedName(String),

    /// A custom weather config failed validation
    #[error("Invalid custom weather config: {0}")]
    Config(String),

    /// A custom weather config could not be parsed from JSON
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A color literal could not be parsed
    #[error("Invalid color literal: '{0}' (expected #rgb or #rrggbb)")]
    InvalidColor(String),
}

/// Type alias for Results from renderer operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::InvalidDimensions { width: 0, height: 400 };
        assert_eq!(
            format!("{}", error),
            "Invalid dimensions: 0x400 (both must be non-zero)"
        );

        let error = Error::ReservedName("sunny".to_string());
        assert_eq!(
            format!("{}", error),
            "Reserved weather name: 'sunny' is a built-in type"
        );
    }
}
