//! Error types for locale registration and rendering.

use thiserror::Error;

/// Errors that can occur when registering or selecting a locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale identifier is empty")]
    EmptyIdentifier,

    #[error("locale '{locale}' has no weekday names")]
    EmptyWeekdays { locale: String },

    #[error("locale '{locale}' has no month names")]
    EmptyMonths { locale: String },

    #[error("locale '{locale}' needs 7 weekday names, got {got}")]
    WeekdayCount { locale: String, got: usize },

    #[error("locale '{locale}' needs 12 month names, got {got}")]
    MonthCount { locale: String, got: usize },

    #[error("locale '{locale}' is not registered")]
    Unregistered { locale: String },
}

/// Errors that can occur when rendering a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("no name tables registered for locale '{locale}'")]
    MissingLocaleData { locale: String },
}
