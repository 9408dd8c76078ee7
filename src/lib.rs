//! dtfmt - locale-aware date/time rendering from `$TOKEN$` layouts
//!
//! A layout is ordinary text with tokens such as `$YYYY$`, `$MMMM$` or `$hh$`
//! embedded in it. Rendering replaces each recognized token with the value
//! computed from an instant, using the weekday and month names of the
//! formatter's current locale. Text that is not a recognized token, including
//! unknown `$...$` sequences, is copied to the output unchanged.
//!
//! ```
//! use dtfmt::{CivilFields, Formatter};
//!
//! let instant = CivilFields {
//!     year: 2013,
//!     month: 2,
//!     day: 4,
//!     weekday: 1,
//!     hour: 21,
//!     minute: 28,
//!     ..CivilFields::default()
//! };
//!
//! let mut formatter = Formatter::new();
//! assert_eq!(
//!     formatter.render(&instant, "$DDDD$ $D$ $MMM$, $h$:$mm$ $a$").unwrap(),
//!     "Mon 4 Feb, 9:28 pm"
//! );
//!
//! formatter.change_locale("tr");
//! assert_eq!(formatter.render(&instant, "$D$ $MMMM$ $YYYY$").unwrap(), "4 Şubat 2013");
//! ```

pub mod civil;
pub mod error;
pub mod layout;
pub mod options;
pub mod token;

mod cache;
mod formatter;
mod locale;

pub use civil::{CivilFields, CivilTime};
pub use error::{FormatError, LocaleError};
pub use formatter::Formatter;
pub use layout::{Layout, Segment};
pub use locale::{LocaleCatalog, LocaleId, LocaleNames};
pub use options::{FormatOptions, ZoneStyle};
pub use token::Token;

/// Render an instant with a default formatter (global catalog, `en`).
pub fn render<T: CivilTime + ?Sized>(instant: &T, layout: &str) -> Result<String, FormatError> {
    Formatter::new().render(instant, layout)
}

/// Render an instant in a given locale of the global catalog.
pub fn render_in<T: CivilTime + ?Sized>(
    instant: &T,
    layout: &str,
    locale: impl Into<LocaleId>,
) -> Result<String, FormatError> {
    let mut formatter = Formatter::new();
    formatter.change_locale(locale);
    formatter.render(instant, layout)
}
