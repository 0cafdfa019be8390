//! Date and time formatting for notification and record timestamps

use chrono::{DateTime, Utc};
use contracts::shared::Language;

/// Example: 2024-03-15T14:02:26Z -> "2024-03-15 14:02"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Coarse "time ago" label; older than a week falls back to the date
pub fn relative_time(value: &DateTime<Utc>, now: DateTime<Utc>, lang: Language) -> String {
    let seconds = (now - *value).num_seconds().max(0);
    let (amount, en_unit, ar_unit) = match seconds {
        0..=59 => {
            return match lang {
                Language::En => "just now".to_string(),
                Language::Ar => "الآن".to_string(),
            }
        }
        60..=3599 => (seconds / 60, "min", "دقيقة"),
        3600..=86_399 => (seconds / 3600, "h", "ساعة"),
        86_400..=604_799 => (seconds / 86_400, "d", "يوم"),
        _ => return value.format("%Y-%m-%d").to_string(),
    };
    match lang {
        Language::En => format!("{} {} ago", amount, en_unit),
        Language::Ar => format!("منذ {} {}", amount, ar_unit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt), "2024-03-15 14:02");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(relative_time(&(now - Duration::seconds(10)), now, Language::En), "just now");
        assert_eq!(relative_time(&(now - Duration::minutes(5)), now, Language::En), "5 min ago");
        assert_eq!(relative_time(&(now - Duration::hours(3)), now, Language::Ar), "منذ 3 ساعة");
        assert_eq!(relative_time(&(now - Duration::days(2)), now, Language::En), "2 d ago");
        assert_eq!(relative_time(&(now - Duration::days(30)), now, Language::En), "2024-02-14");
        // clock skew never yields a negative age
        assert_eq!(relative_time(&(now + Duration::minutes(1)), now, Language::En), "just now");
    }
}
