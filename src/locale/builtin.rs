//! Built-in locale data.

use super::{LocaleId, LocaleNames};

const EN_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const TR_WEEKDAYS: [&str; 7] = [
    "Pazar",
    "Pazartesi",
    "Salı",
    "Çarşamba",
    "Perşembe",
    "Cuma",
    "Cumartesi",
];

const TR_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Locales every catalog built with `with_builtins` starts with.
pub(crate) fn builtin_locales() -> [(LocaleId, LocaleNames); 2] {
    [
        (LocaleId::EN, LocaleNames::from_arrays(EN_WEEKDAYS, EN_MONTHS)),
        (LocaleId::TR, LocaleNames::from_arrays(TR_WEEKDAYS, TR_MONTHS)),
    ]
}
