//! Per-entry metadata recorded next to each name:
//! Unix permission bits and an MS-DOS modification time.

use std::fs::Metadata;
use std::time::SystemTime;

use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike};
use zip::DateTime as DosDateTime;

/// Only these bits make it out of an archive.
/// setuid, setgid, and sticky bits from somebody else's ZIP file are a hard pass.
pub const PERMISSION_BITS: u32 = 0o777;

/// Returns the Unix mode bits of a file, if the host has such a thing.
#[cfg(unix)]
pub fn unix_mode(metadata: &Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(metadata.permissions().mode())
}

#[cfg(not(unix))]
pub fn unix_mode(_metadata: &Metadata) -> Option<u32> {
    None
}

/// Converts a modification time into the timestamp stored in the archive.
///
/// MS-DOS time has no time zone, so like most ZIP tools,
/// we record local time.
pub fn dos_timestamp(modified: SystemTime) -> DosDateTime {
    let local: DateTime<Local> = modified.into();
    from_naive(local.naive_local())
}

/// MS-DOS timestamps cover 1980 through 2107 with 2-second precision.
/// Anything outside that range is clamped to the nearest end.
fn from_naive(time: NaiveDateTime) -> DosDateTime {
    match time.year() {
        y if y < 1980 => DosDateTime::default(),
        y if y > 2107 => DosDateTime::from_date_and_time(2107, 12, 31, 23, 59, 58)
            .unwrap_or_default(),
        y => DosDateTime::from_date_and_time(
            y as u16,
            time.month() as u8,
            time.day() as u8,
            time.hour() as u8,
            time.minute() as u8,
            time.second() as u8,
        )
        .unwrap_or_default(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_in_range() {
        let stamp = from_naive(naive(2024, 5, 6, 7, 8, 10));
        assert_eq!(stamp.year(), 2024);
        assert_eq!(stamp.month(), 5);
        assert_eq!(stamp.day(), 6);
        assert_eq!(stamp.hour(), 7);
        assert_eq!(stamp.minute(), 8);
        assert_eq!(stamp.second(), 10);
    }

    #[test]
    fn test_before_1980() {
        let stamp = from_naive(naive(1970, 1, 1, 0, 0, 0));
        assert_eq!(stamp.year(), 1980);
        assert_eq!(stamp.month(), 1);
        assert_eq!(stamp.day(), 1);
    }

    #[test]
    fn test_after_2107() {
        let stamp = from_naive(naive(2200, 6, 1, 12, 0, 0));
        assert_eq!(stamp.year(), 2107);
        assert_eq!(stamp.month(), 12);
        assert_eq!(stamp.day(), 31);
    }
}
