//! Locale identifiers, name tables and the catalog that holds them.
//!
//! A [`LocaleCatalog`] maps each [`LocaleId`] to one [`LocaleNames`] entry
//! holding both the weekday and the month names, so the two tables can never
//! disagree about which locales exist. Catalogs are shared between formatters
//! through an `Arc`; [`LocaleCatalog::global`] is the process-wide default and
//! tests can build their own with [`LocaleCatalog::with_builtins`].

mod builtin;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use log::debug;

use crate::error::LocaleError;

/// Opaque name of a set of weekday and month names, e.g. `"en"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleId(Cow<'static, str>);

impl LocaleId {
    /// English
    pub const EN: LocaleId = LocaleId(Cow::Borrowed("en"));
    /// Turkish
    pub const TR: LocaleId = LocaleId(Cow::Borrowed("tr"));

    pub fn new(id: impl Into<String>) -> Self {
        LocaleId(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for LocaleId {
    fn default() -> Self {
        LocaleId::EN
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleId {
    fn from(id: &str) -> Self {
        LocaleId::new(id)
    }
}

impl From<String> for LocaleId {
    fn from(id: String) -> Self {
        LocaleId(Cow::Owned(id))
    }
}

impl From<&LocaleId> for LocaleId {
    fn from(id: &LocaleId) -> Self {
        id.clone()
    }
}

impl PartialEq<str> for LocaleId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for LocaleId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Full weekday and month names for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleNames {
    weekdays: [String; 7],
    months: [String; 12],
}

impl LocaleNames {
    /// Build a validated name table.
    ///
    /// Weekdays start at Sunday and there must be exactly 7 of them; months
    /// start at January and there must be exactly 12.
    pub fn new<W, M>(locale: &LocaleId, weekdays: W, months: M) -> Result<Self, LocaleError>
    where
        W: IntoIterator,
        W::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        if locale.is_empty() {
            return Err(LocaleError::EmptyIdentifier);
        }

        let weekdays: Vec<String> = weekdays.into_iter().map(Into::into).collect();
        let months: Vec<String> = months.into_iter().map(Into::into).collect();

        if weekdays.is_empty() {
            return Err(LocaleError::EmptyWeekdays {
                locale: locale.to_string(),
            });
        }
        if months.is_empty() {
            return Err(LocaleError::EmptyMonths {
                locale: locale.to_string(),
            });
        }

        let got = weekdays.len();
        let weekdays: [String; 7] = weekdays.try_into().map_err(|_| LocaleError::WeekdayCount {
            locale: locale.to_string(),
            got,
        })?;

        let got = months.len();
        let months: [String; 12] = months.try_into().map_err(|_| LocaleError::MonthCount {
            locale: locale.to_string(),
            got,
        })?;

        Ok(LocaleNames { weekdays, months })
    }

    pub(crate) fn from_arrays(weekdays: [&str; 7], months: [&str; 12]) -> Self {
        LocaleNames {
            weekdays: weekdays.map(str::to_string),
            months: months.map(str::to_string),
        }
    }

    /// Full weekday name, 0 = Sunday.
    pub fn weekday(&self, index: u32) -> Option<&str> {
        self.weekdays.get(index as usize).map(String::as_str)
    }

    /// Full month name, 1 = January.
    pub fn month(&self, number: u32) -> Option<&str> {
        let index = number.checked_sub(1)?;
        self.months.get(index as usize).map(String::as_str)
    }

    pub fn weekdays(&self) -> &[String; 7] {
        &self.weekdays
    }

    pub fn months(&self) -> &[String; 12] {
        &self.months
    }
}

/// Shared, additive store of locale name tables.
#[derive(Debug)]
pub struct LocaleCatalog {
    tables: RwLock<HashMap<LocaleId, Arc<LocaleNames>>>,
}

/// Process-wide catalog used by formatters that are not given one.
static GLOBAL: OnceLock<Arc<LocaleCatalog>> = OnceLock::new();

impl LocaleCatalog {
    /// An empty catalog with no locales at all.
    pub fn new() -> Self {
        LocaleCatalog {
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// A catalog holding the built-in `en` and `tr` locales.
    pub fn with_builtins() -> Self {
        let catalog = LocaleCatalog::new();
        for (id, names) in builtin::builtin_locales() {
            catalog.insert(id, names);
        }
        catalog
    }

    /// The process-wide catalog, created with the built-in locales on first use.
    pub fn global() -> Arc<LocaleCatalog> {
        GLOBAL
            .get_or_init(|| Arc::new(LocaleCatalog::with_builtins()))
            .clone()
    }

    /// Validate and register a locale, replacing any previous entry.
    ///
    /// Nothing is stored unless both name lists are valid.
    pub fn register<W, M>(
        &self,
        id: impl Into<LocaleId>,
        weekdays: W,
        months: M,
    ) -> Result<(), LocaleError>
    where
        W: IntoIterator,
        W::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        let id = id.into();
        let names = LocaleNames::new(&id, weekdays, months)?;
        self.insert(id, names);
        Ok(())
    }

    /// Store an already validated name table.
    pub fn insert(&self, id: LocaleId, names: LocaleNames) {
        debug!("registering locale '{}'", id);
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        tables.insert(id, Arc::new(names));
    }

    /// Name tables for a locale, if registered.
    pub fn names(&self, id: &LocaleId) -> Option<Arc<LocaleNames>> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.get(id).cloned()
    }

    pub fn contains(&self, id: &LocaleId) -> bool {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.contains_key(id)
    }

    /// All registered identifiers, sorted.
    pub fn locales(&self) -> Vec<LocaleId> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        let mut ids: Vec<LocaleId> = tables.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for LocaleCatalog {
    fn default() -> Self {
        LocaleCatalog::with_builtins()
    }
}
