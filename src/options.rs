//! Formatting options and configuration.

use crate::locale::LocaleId;

/// How the `$Z$` and `$ZZ$` tokens render the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneStyle {
    /// Zone name with `:00` / `00` appended (`+03` -> `+03:00`, `UTC` -> `UTC:00`)
    #[default]
    Abbreviation,
    /// Numeric offset from UTC (`+05:30` / `+0530`)
    Offset,
}

/// Options for a formatter.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Zone rendering for `$Z$` and `$ZZ$`.
    pub zone_style: ZoneStyle,
    /// Locale a new formatter starts with.
    pub default_locale: LocaleId,
    /// Whether compiled layouts are kept in the shared layout cache.
    pub cache_layouts: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            zone_style: ZoneStyle::default(),
            default_locale: LocaleId::EN,
            cache_layouts: true,
        }
    }
}
