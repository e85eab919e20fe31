//! Configuration errors surfaced at property-assignment time.

use thiserror::Error;

/// Invalid configuration value for a layout property.
///
/// All of these fail synchronously at the point a value is parsed or assigned,
/// before any layout pass runs, so the previously valid geometry stays intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Unknown `direction` keyword.
    #[error("invalid flex direction '{0}', expected one of row, row-reverse, column, column-reverse")]
    InvalidDirection(String),
    /// Unknown `align-items` (or `align-self`) keyword.
    #[error("invalid align-items value '{0}', expected one of flex-start, flex-end, center, stretch")]
    InvalidAlignItems(String),
    /// Unknown `align-content` keyword.
    #[error("invalid align-content value '{0}', expected one of flex-start, flex-end, center, space-between, space-around, space-evenly, stretch")]
    InvalidAlignContent(String),
    /// Unknown `justify-content` keyword.
    #[error("invalid justify-content value '{0}', expected one of flex-start, flex-end, center, space-between, space-around, space-evenly")]
    InvalidJustifyContent(String),
}
