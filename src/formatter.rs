//! The formatter facade.

use std::sync::Arc;

use log::{debug, warn};

use crate::cache;
use crate::civil::CivilTime;
use crate::error::{FormatError, LocaleError};
use crate::layout::Layout;
use crate::locale::{LocaleCatalog, LocaleId};
use crate::options::FormatOptions;

/// Renders instants through `$...$` layouts in a selected locale.
///
/// The locale name tables live in a shared [`LocaleCatalog`]; each formatter
/// only owns which locale it currently renders with.
#[derive(Debug, Clone)]
pub struct Formatter {
    catalog: Arc<LocaleCatalog>,
    locale: LocaleId,
    options: FormatOptions,
}

impl Formatter {
    /// A formatter over the global catalog, starting in `en`.
    pub fn new() -> Self {
        Self::with_options(FormatOptions::default())
    }

    /// A formatter over the global catalog.
    pub fn with_options(options: FormatOptions) -> Self {
        Self::with_catalog(LocaleCatalog::global(), options)
    }

    /// A formatter over its own catalog.
    pub fn with_catalog(catalog: Arc<LocaleCatalog>, options: FormatOptions) -> Self {
        Formatter {
            catalog,
            locale: options.default_locale.clone(),
            options,
        }
    }

    /// Register a locale in the global catalog and return a formatter using it.
    pub fn from_locale<W, M>(
        locale: impl Into<LocaleId>,
        weekdays: W,
        months: M,
    ) -> Result<Self, LocaleError>
    where
        W: IntoIterator,
        W::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        let mut formatter = Formatter::new();
        let locale = locale.into();
        formatter.add_locale(locale.clone(), weekdays, months)?;
        formatter.change_locale(locale);
        Ok(formatter)
    }

    /// Select the locale used by later renders.
    ///
    /// The identifier is not checked; rendering with an unregistered locale
    /// fails with [`FormatError::MissingLocaleData`].
    pub fn change_locale(&mut self, locale: impl Into<LocaleId>) {
        let locale = locale.into();
        if !self.catalog.contains(&locale) {
            warn!("switching to unregistered locale '{}'", locale);
        }
        debug!("locale changed from '{}' to '{}'", self.locale, locale);
        self.locale = locale;
    }

    /// Select a locale, failing if the catalog does not have it.
    pub fn try_change_locale(&mut self, locale: impl Into<LocaleId>) -> Result<(), LocaleError> {
        let locale = locale.into();
        if !self.catalog.contains(&locale) {
            return Err(LocaleError::Unregistered {
                locale: locale.to_string(),
            });
        }
        self.change_locale(locale);
        Ok(())
    }

    pub fn current_locale(&self) -> &LocaleId {
        &self.locale
    }

    /// Register or replace a locale in the shared catalog.
    ///
    /// The current locale is left unchanged.
    pub fn add_locale<W, M>(
        &self,
        locale: impl Into<LocaleId>,
        weekdays: W,
        months: M,
    ) -> Result<(), LocaleError>
    where
        W: IntoIterator,
        W::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        self.catalog.register(locale, weekdays, months)
    }

    pub fn catalog(&self) -> &Arc<LocaleCatalog> {
        &self.catalog
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Render an instant through a layout.
    ///
    /// Recognized tokens are replaced by their values; everything else,
    /// including unknown `$...$` text, is copied unchanged.
    pub fn render<T: CivilTime + ?Sized>(
        &self,
        instant: &T,
        layout: &str,
    ) -> Result<String, FormatError> {
        let names = self.catalog.names(&self.locale).ok_or_else(|| {
            warn!("no name tables for locale '{}'", self.locale);
            FormatError::MissingLocaleData {
                locale: self.locale.to_string(),
            }
        })?;

        let compiled = if self.options.cache_layouts {
            cache::get_or_parse(layout)
        } else {
            Arc::new(Layout::parse(layout))
        };

        let fields = instant.decompose();
        let zone = self.options.zone_style;
        Ok(compiled.render_with(|token| token.render(&fields, &names, zone)))
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::new()
    }
}
