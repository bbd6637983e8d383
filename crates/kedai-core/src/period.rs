//! # Report Periods
//!
//! Time windows used by the reports screen.
//!
//! ```text
//!   All         ─────────────────────────────────────────────────► now
//!   Last30Days                      now - 30d ─────────────────────► now
//!   Last7Days                                   now - 7d ──────────► now
//!   Today                                         local 00:00 ─────► now
//! ```
//!
//! Every window is inclusive on both ends. "Today" is measured in the
//! caller's time zone, which is why the functions here are generic over
//! [`chrono::TimeZone`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Expense, Sale};

/// A reporting period relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Period {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "week")]
    Last7Days,
    #[serde(rename = "month")]
    Last30Days,
}

impl Period {
    /// Start of the window, or `None` for [`Period::All`].
    pub fn start<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        match self {
            Period::All => None,
            Period::Today => Some(local_midnight(now)),
            Period::Last7Days => Some(now.clone() - Duration::days(7)),
            Period::Last30Days => Some(now.clone() - Duration::days(30)),
        }
    }

    /// Whether `date` falls inside the window ending at `now`.
    pub fn contains<Tz: TimeZone>(&self, date: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
        match self.start(now) {
            None => true,
            Some(start) => {
                let start = start.with_timezone(&Utc);
                let end = now.with_timezone(&Utc);
                start <= *date && *date <= end
            }
        }
    }

    /// Keeps the records dated inside the window, in their original order.
    pub fn filter<'a, T, Tz>(&self, records: &'a [T], now: &DateTime<Tz>) -> Vec<&'a T>
    where
        T: Dated,
        Tz: TimeZone,
    {
        records
            .iter()
            .filter(|record| self.contains(&record.date(), now))
            .collect()
    }

    fn code(&self) -> &'static str {
        match self {
            Period::All => "all",
            Period::Today => "today",
            Period::Last7Days => "week",
            Period::Last30Days => "month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown period code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown period: {0}")]
pub struct UnknownPeriod(pub String);

impl FromStr for Period {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(Period::All),
            "today" => Ok(Period::Today),
            "week" => Ok(Period::Last7Days),
            "month" => Ok(Period::Last30Days),
            other => Err(UnknownPeriod(other.to_string())),
        }
    }
}

/// Midnight at the start of `now`'s local day.
///
/// When midnight does not exist locally (a DST gap), the elapsed
/// wall-clock time since 00:00 is subtracted instead.
fn local_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(start) => start,
        None => now.clone() - (now.time() - NaiveTime::MIN),
    }
}

/// Records that carry a date and can be filtered by period.
pub trait Dated {
    fn date(&self) -> DateTime<Utc>;
}

impl Dated for Sale {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl Dated for Expense {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::ExpenseCategory;
    use chrono::FixedOffset;

    fn expense(id: &str, date: DateTime<Utc>) -> Expense {
        Expense {
            id: id.to_string(),
            description: id.to_string(),
            amount: Money::from_cents(100),
            category: ExpenseCategory::Other,
            date,
        }
    }

    #[test]
    fn test_today_excludes_yesterday_and_includes_now() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 15, 30, 0).unwrap();
        let yesterday = Utc.with_ymd_and_hms(2026, 3, 13, 23, 59, 59).unwrap();
        let midnight = Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap();

        assert!(Period::Today.contains(&now, &now));
        assert!(Period::Today.contains(&midnight, &now));
        assert!(!Period::Today.contains(&yesterday, &now));
    }

    #[test]
    fn test_today_uses_local_midnight() {
        // 01:00 in UTC+7 is 18:00 UTC the previous calendar day.
        let tz = FixedOffset::east_opt(7 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
        let early_local = Utc.with_ymd_and_hms(2026, 3, 13, 18, 0, 0).unwrap();
        let before_local_midnight = Utc.with_ymd_and_hms(2026, 3, 13, 16, 59, 0).unwrap();

        assert!(Period::Today.contains(&early_local, &now));
        assert!(!Period::Today.contains(&before_local_midnight, &now));
    }

    #[test]
    fn test_rolling_windows_are_inclusive() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();

        assert!(Period::Last7Days.contains(&(now - Duration::days(7)), &now));
        assert!(!Period::Last7Days.contains(&(now - Duration::days(7) - Duration::seconds(1)), &now));
        assert!(Period::Last30Days.contains(&(now - Duration::days(30)), &now));
        assert!(!Period::Last30Days.contains(&(now - Duration::days(31)), &now));
        assert!(!Period::Last30Days.contains(&(now + Duration::seconds(1)), &now));
    }

    #[test]
    fn test_all_keeps_everything() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let records = vec![
            expense("old", now - Duration::days(400)),
            expense("future", now + Duration::days(1)),
        ];
        assert_eq!(Period::All.filter(&records, &now).len(), 2);
        assert!(Period::All.start(&now).is_none());
    }

    #[test]
    fn test_filter_preserves_order() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let records = vec![
            expense("a", now - Duration::days(2)),
            expense("b", now - Duration::days(10)),
            expense("c", now - Duration::hours(1)),
        ];
        let ids: Vec<_> = Period::Last7Days
            .filter(&records, &now)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_period_codes() {
        assert_eq!("week".parse::<Period>(), Ok(Period::Last7Days));
        assert_eq!(" month ".parse::<Period>(), Ok(Period::Last30Days));
        assert!("year".parse::<Period>().is_err());
        assert_eq!(Period::Today.to_string(), "today");
        assert_eq!(serde_json::to_string(&Period::All).unwrap(), "\"all\"");
    }
}
