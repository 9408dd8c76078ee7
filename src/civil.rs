//! Civil time decomposition.
//!
//! The formatter never does calendar arithmetic itself. Anything that can be
//! broken down into calendar and clock fields implements [`CivilTime`], and the
//! rendering rules only ever look at the resulting [`CivilFields`] snapshot.
//!
//! With the `chrono` feature (on by default) the common chrono date-time types
//! implement the trait:
//! - `DateTime<Utc>` reports the zone name `"UTC"`
//! - `DateTime<FixedOffset>` and `DateTime<Local>` report the numeric name an
//!   unnamed fixed zone gets, such as `"+03"` or `"-0530"`
//! - `NaiveDateTime` is treated as UTC

/// Calendar and clock fields of a single instant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CivilFields {
    /// Full year, e.g. 2024
    pub year: i32,
    /// Month number, 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
    /// Day of year, 1-366
    pub year_day: u32,
    /// Weekday index, 0 = Sunday through 6 = Saturday
    pub weekday: u32,
    /// Hour, 0-23
    pub hour: u32,
    /// Minute, 0-59
    pub minute: u32,
    /// Second, 0-59
    pub second: u32,
    /// Zone name as reported by the time source
    pub zone_name: String,
    /// Offset east of UTC in seconds
    pub utc_offset: i32,
    /// Seconds since the Unix epoch
    pub unix_timestamp: i64,
}

/// A point in time that can be broken down into civil fields.
pub trait CivilTime {
    /// Decompose this instant into calendar and clock fields.
    fn decompose(&self) -> CivilFields;
}

impl CivilTime for CivilFields {
    fn decompose(&self) -> CivilFields {
        self.clone()
    }
}

impl<T: CivilTime + ?Sized> CivilTime for &T {
    fn decompose(&self) -> CivilFields {
        (**self).decompose()
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::{CivilFields, CivilTime};
    use chrono::{
        DateTime, Datelike, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Timelike, Utc,
    };

    /// Name given to a zone that only has a numeric offset: `+03`, `-0530`.
    pub(super) fn fixed_zone_name(utc_offset: i32) -> String {
        let sign = if utc_offset < 0 { '-' } else { '+' };
        let minutes = utc_offset.unsigned_abs() / 60;
        let (hours, minutes) = (minutes / 60, minutes % 60);
        if minutes == 0 {
            format!("{}{:02}", sign, hours)
        } else {
            format!("{}{:02}{:02}", sign, hours, minutes)
        }
    }

    fn fields<Tz: TimeZone>(dt: &DateTime<Tz>, zone_name: String) -> CivilFields {
        CivilFields {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            year_day: dt.ordinal(),
            weekday: dt.weekday().num_days_from_sunday(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            zone_name,
            utc_offset: dt.offset().fix().local_minus_utc(),
            unix_timestamp: dt.timestamp(),
        }
    }

    impl CivilTime for DateTime<Utc> {
        fn decompose(&self) -> CivilFields {
            fields(self, "UTC".to_string())
        }
    }

    impl CivilTime for DateTime<FixedOffset> {
        fn decompose(&self) -> CivilFields {
            fields(self, fixed_zone_name(self.offset().local_minus_utc()))
        }
    }

    impl CivilTime for DateTime<Local> {
        fn decompose(&self) -> CivilFields {
            fields(self, fixed_zone_name(self.offset().fix().local_minus_utc()))
        }
    }

    impl CivilTime for NaiveDateTime {
        fn decompose(&self) -> CivilFields {
            self.and_utc().decompose()
        }
    }
}

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::chrono_impls::fixed_zone_name;
    use super::*;

    #[test]
    fn test_fixed_zone_name() {
        assert_eq!(fixed_zone_name(0), "+00");
        assert_eq!(fixed_zone_name(3 * 3600), "+03");
        assert_eq!(fixed_zone_name(-7 * 3600), "-07");
        assert_eq!(fixed_zone_name(5 * 3600 + 30 * 60), "+0530");
        assert_eq!(fixed_zone_name(-(3 * 3600 + 30 * 60)), "-0330");
    }

    #[test]
    fn test_decompose_fixed_offset() {
        use chrono::{FixedOffset, TimeZone};

        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        // Tuesday
        let dt = tz.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        let fields = dt.decompose();

        assert_eq!(fields.year, 2024);
        assert_eq!(fields.month, 3);
        assert_eq!(fields.day, 5);
        assert_eq!(fields.year_day, 65);
        assert_eq!(fields.weekday, 2);
        assert_eq!(fields.hour, 14);
        assert_eq!(fields.minute, 7);
        assert_eq!(fields.second, 9);
        assert_eq!(fields.zone_name, "+03");
        assert_eq!(fields.utc_offset, 10800);
        assert_eq!(fields.unix_timestamp, 1_709_636_829);
    }

    #[test]
    fn test_decompose_utc_and_naive() {
        use chrono::{NaiveDate, TimeZone, Utc};

        let dt = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        let fields = dt.decompose();
        assert_eq!(fields.zone_name, "UTC");
        assert_eq!(fields.unix_timestamp, 0);
        assert_eq!(fields.weekday, 4);

        let naive = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(naive.decompose(), fields);
    }
}
