//! `datetime-local` 入力値の解析
//!
//! タイムゾーン変換は行わず、入力された壁時計の値から暦フィールドを
//! そのまま取り出す。

use crate::error::{Error, Result};
use crate::types::DateParts;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// 受け付ける書式（ブラウザは秒が0のとき `HH:MM` で送ることがある）
const FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// 日時文字列を解析
pub fn parse_local_datetime(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidDate("empty".to_string()));
    }

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| Error::InvalidDate(trimmed.to_string()))
}

impl From<NaiveDateTime> for DateParts {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            annee: dt.year(),
            mois: dt.month(),
            jour: dt.day(),
            heure: dt.hour(),
            minute: dt.minute(),
            seconde: dt.second(),
        }
    }
}

/// 日時文字列を暦フィールドに分解
pub fn date_parts(input: &str) -> Result<DateParts> {
    parse_local_datetime(input).map(DateParts::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_seconds() {
        let parts = date_parts("2023-10-10T10:00:00").unwrap();
        assert_eq!(
            parts,
            DateParts { annee: 2023, mois: 10, jour: 10, heure: 10, minute: 0, seconde: 0 }
        );
    }

    #[test]
    fn test_without_seconds() {
        let parts = date_parts("2024-02-29T23:59").unwrap();
        assert_eq!(parts.annee, 2024);
        assert_eq!(parts.mois, 2);
        assert_eq!(parts.jour, 29);
        assert_eq!(parts.heure, 23);
        assert_eq!(parts.minute, 59);
        assert_eq!(parts.seconde, 0);
    }

    #[test]
    fn test_fraction_truncated() {
        let parts = date_parts("2015-05-13T23:53:07.750").unwrap();
        assert_eq!(parts.seconde, 7);
    }

    #[test]
    fn test_space_separator() {
        let parts = date_parts("2015-05-13 23:53:00").unwrap();
        assert_eq!(parts.heure, 23);
        assert_eq!(parts.minute, 53);
    }

    #[test]
    fn test_dst_transition_kept_as_entered() {
        // 2024-03-31 02:30 はヨーロッパの夏時間切替で存在しないが、壁時計の値をそのまま使う
        let parts = date_parts("2024-03-31T02:30:00").unwrap();
        assert_eq!(parts.heure, 2);
        assert_eq!(parts.minute, 30);
    }

    #[test]
    fn test_midnight_is_hour_zero() {
        let parts = date_parts("2023-01-01T00:00:01").unwrap();
        assert_eq!(parts.heure, 0);
        assert_eq!(parts.seconde, 1);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(date_parts("   "), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_invalid_calendar_date_rejected() {
        assert!(matches!(date_parts("2023-02-30T10:00:00"), Err(Error::InvalidDate(_))));
        assert!(matches!(date_parts("10/10/2023 10:00"), Err(Error::InvalidDate(_))));
    }
}
