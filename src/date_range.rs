//! Report date ranges.
//!
//! A selector resolves to inclusive wall-clock bounds: the start day widened
//! to 00:00:00.000, the end day widened to 23:59:59.999. A missing bound
//! leaves that side open.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RangeSelector {
    Today,
    Yesterday,
    ThisWeek,
    Custom,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("23:59:59.999 is a valid time");
    date.and_time(last)
}

impl DateRange {
    pub fn unbounded() -> Self {
        DateRange {
            start: None,
            end: None,
        }
    }

    pub fn from_days(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        DateRange {
            start: start.map(start_of_day),
            end: end.map(end_of_day),
        }
    }

    /// Resolve `selector` relative to `today`. Custom bounds are taken as
    /// given; an inverted custom range simply matches nothing.
    pub fn resolve(
        selector: RangeSelector,
        custom_start: Option<NaiveDate>,
        custom_end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        match selector {
            RangeSelector::Today => Self::from_days(Some(today), Some(today)),
            RangeSelector::Yesterday => {
                let yesterday = today - Duration::days(1);
                Self::from_days(Some(yesterday), Some(yesterday))
            }
            RangeSelector::ThisWeek => {
                let since_sunday = today.weekday().num_days_from_sunday() as i64;
                Self::from_days(Some(today - Duration::days(since_sunday)), Some(today))
            }
            RangeSelector::Custom => Self::from_days(custom_start, custom_end),
        }
    }

    pub fn resolve_now(
        selector: RangeSelector,
        custom_start: Option<NaiveDate>,
        custom_end: Option<NaiveDate>,
    ) -> Self {
        Self::resolve(selector, custom_start, custom_end, Local::now().date_naive())
    }

    /// Bounds compare against the timestamp's local wall-clock time.
    pub fn contains<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> bool {
        let at = at.naive_local();
        if let Some(start) = self.start {
            if at < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if at > end {
                return false;
            }
        }
        true
    }
}
