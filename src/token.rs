//! The closed catalog of layout tokens and their rendering rules.

use std::fmt;
use std::str::FromStr;

use crate::civil::CivilFields;
use crate::locale::LocaleNames;
use crate::options::ZoneStyle;

/// A recognized `$...$` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // Month
    Month,     // $M$     1 2 ... 12
    Month2,    // $MM$    01 02 ... 12
    MonthAbbr, // $MMM$   Jan Feb ... Dec
    MonthFull, // $MMMM$  January ... December

    // Day
    Day,     // $D$     1 2 ... 31
    Day2,    // $DD$    01 02 ... 31
    YearDay, // $DDD$   1 2 ... 366
    DayAbbr, // $DDDD$  Sun Mon ... Sat
    DayFull, // $DDDDD$ Sunday ... Saturday

    // Year
    Year2, // $YY$
    Year4, // $YYYY$

    Quarter, // $Q$

    // AM/PM
    AmPmUpper, // $A$
    AmPmLower, // $a$

    // Hour
    Hour,      // $H$   0 ... 23
    Hour2,     // $HH$  00 ... 23
    HourAmPm,  // $h$   0 ... 12
    HourAmPm2, // $hh$  00 ... 12

    Minute,  // $m$
    Minute2, // $mm$

    Second,  // $s$
    Second2, // $ss$

    // Zone
    Zone,        // $Z$
    ZoneCompact, // $ZZ$

    Unix, // $X$
}

impl Token {
    /// Every token, in catalog order.
    pub const ALL: [Token; 25] = [
        Token::Month,
        Token::Month2,
        Token::MonthAbbr,
        Token::MonthFull,
        Token::Day,
        Token::Day2,
        Token::YearDay,
        Token::DayAbbr,
        Token::DayFull,
        Token::Year2,
        Token::Year4,
        Token::Quarter,
        Token::AmPmUpper,
        Token::AmPmLower,
        Token::Hour,
        Token::Hour2,
        Token::HourAmPm,
        Token::HourAmPm2,
        Token::Minute,
        Token::Minute2,
        Token::Second,
        Token::Second2,
        Token::Zone,
        Token::ZoneCompact,
        Token::Unix,
    ];

    /// The literal text of this token, delimiters included.
    pub fn as_str(self) -> &'static str {
        match self {
            Token::Month => "$M$",
            Token::Month2 => "$MM$",
            Token::MonthAbbr => "$MMM$",
            Token::MonthFull => "$MMMM$",
            Token::Day => "$D$",
            Token::Day2 => "$DD$",
            Token::YearDay => "$DDD$",
            Token::DayAbbr => "$DDDD$",
            Token::DayFull => "$DDDDD$",
            Token::Year2 => "$YY$",
            Token::Year4 => "$YYYY$",
            Token::Quarter => "$Q$",
            Token::AmPmUpper => "$A$",
            Token::AmPmLower => "$a$",
            Token::Hour => "$H$",
            Token::Hour2 => "$HH$",
            Token::HourAmPm => "$h$",
            Token::HourAmPm2 => "$hh$",
            Token::Minute => "$m$",
            Token::Minute2 => "$mm$",
            Token::Second => "$s$",
            Token::Second2 => "$ss$",
            Token::Zone => "$Z$",
            Token::ZoneCompact => "$ZZ$",
            Token::Unix => "$X$",
        }
    }

    /// Look up a token by its literal text, delimiters included.
    pub fn from_literal(literal: &str) -> Option<Token> {
        let token = match literal {
            "$M$" => Token::Month,
            "$MM$" => Token::Month2,
            "$MMM$" => Token::MonthAbbr,
            "$MMMM$" => Token::MonthFull,
            "$D$" => Token::Day,
            "$DD$" => Token::Day2,
            "$DDD$" => Token::YearDay,
            "$DDDD$" => Token::DayAbbr,
            "$DDDDD$" => Token::DayFull,
            "$YY$" => Token::Year2,
            "$YYYY$" => Token::Year4,
            "$Q$" => Token::Quarter,
            "$A$" => Token::AmPmUpper,
            "$a$" => Token::AmPmLower,
            "$H$" => Token::Hour,
            "$HH$" => Token::Hour2,
            "$h$" => Token::HourAmPm,
            "$hh$" => Token::HourAmPm2,
            "$m$" => Token::Minute,
            "$mm$" => Token::Minute2,
            "$s$" => Token::Second,
            "$ss$" => Token::Second2,
            "$Z$" => Token::Zone,
            "$ZZ$" => Token::ZoneCompact,
            "$X$" => Token::Unix,
            _ => return None,
        };
        Some(token)
    }

    /// Render this token for one instant.
    ///
    /// Every rule is total: a weekday or month outside the name tables renders
    /// as an empty string instead of failing.
    pub fn render(self, fields: &CivilFields, names: &LocaleNames, zone: ZoneStyle) -> String {
        match self {
            Token::Month => format!("{}", fields.month),
            Token::Month2 => format!("{:02}", fields.month),
            Token::MonthAbbr => abbreviate(names.month(fields.month).unwrap_or_default()),
            Token::MonthFull => names.month(fields.month).unwrap_or_default().to_string(),

            Token::Day => format!("{}", fields.day),
            Token::Day2 => format!("{:02}", fields.day),
            Token::YearDay => format!("{}", fields.year_day),
            Token::DayAbbr => abbreviate(names.weekday(fields.weekday).unwrap_or_default()),
            Token::DayFull => names.weekday(fields.weekday).unwrap_or_default().to_string(),

            Token::Year2 => format!("{:02}", fields.year.unsigned_abs() % 100),
            Token::Year4 => format!("{}", fields.year),

            Token::Quarter => format!("{}", quarter(fields.month)),

            Token::AmPmUpper => meridiem(fields.hour).to_string(),
            Token::AmPmLower => meridiem(fields.hour).to_lowercase(),

            Token::Hour => format!("{}", fields.hour),
            Token::Hour2 => format!("{:02}", fields.hour),
            Token::HourAmPm => format!("{}", to_12_hour(fields.hour)),
            Token::HourAmPm2 => format!("{:02}", to_12_hour(fields.hour)),

            Token::Minute => format!("{}", fields.minute),
            Token::Minute2 => format!("{:02}", fields.minute),

            Token::Second => format!("{}", fields.second),
            Token::Second2 => format!("{:02}", fields.second),

            Token::Zone => match zone {
                ZoneStyle::Abbreviation => format!("{}:00", fields.zone_name),
                ZoneStyle::Offset => format_offset(fields.utc_offset, ":"),
            },
            Token::ZoneCompact => match zone {
                ZoneStyle::Abbreviation => format!("{}00", fields.zone_name),
                ZoneStyle::Offset => format_offset(fields.utc_offset, ""),
            },

            Token::Unix => format!("{}", fields.unix_timestamp),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Token {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Token::from_literal(s).ok_or(())
    }
}

/// First three characters of a name.
fn abbreviate(name: &str) -> String {
    name.chars().take(3).collect()
}

/// Convert 24-hour time to 12-hour time.
/// 0 -> 0, 1-12 -> 1-12, 13-23 -> 1-11
fn to_12_hour(hour: u32) -> u32 {
    if hour > 12 {
        hour - 12
    } else {
        hour
    }
}

fn meridiem(hour: u32) -> &'static str {
    if hour >= 12 {
        "PM"
    } else {
        "AM"
    }
}

/// Quarter as `month / 4 + 1`: Jan-Mar -> 1, Apr-Jul -> 2, Aug-Nov -> 3, Dec -> 4.
fn quarter(month: u32) -> u32 {
    month / 4 + 1
}

/// Numeric UTC offset, `+05:30` or `+0530`.
fn format_offset(utc_offset: i32, separator: &str) -> String {
    let sign = if utc_offset < 0 { '-' } else { '+' };
    let minutes = utc_offset.unsigned_abs() / 60;
    format!("{}{:02}{}{:02}", sign, minutes / 60, separator, minutes % 60)
}
