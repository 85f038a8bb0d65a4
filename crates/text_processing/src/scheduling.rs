//! Appointment scheduling
//!
//! Every imported customer gets an automatic appointment at their preferred
//! time of day. Customers of the same batch are spread over successive days
//! (the n-th customer is placed n+1 days from now), and a date that lands on
//! a weekend is pushed to the following Monday.

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use transporte_config::SchedulingConfig;
use transporte_core::{Clock, Error, Result, ScheduledSlot, SystemClock};

const DEFAULT_HOUR: u32 = 9;
const DEFAULT_MINUTE: u32 = 0;

static TIME_OF_DAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2}):?(\d{0,2})").unwrap());

#[derive(Clone)]
pub struct Scheduler {
    clock: Arc<dyn Clock>,
    /// Used when the preferred time can't be read
    fallback: NaiveTime,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl Scheduler {
    /// Scheduler with the default 09:00 fallback
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            fallback: NaiveTime::from_hms_opt(DEFAULT_HOUR, DEFAULT_MINUTE, 0).unwrap_or_default(),
        }
    }

    /// Scheduler with a custom fallback time of day
    pub fn with_fallback(clock: Arc<dyn Clock>, hour: u32, minute: u32) -> Result<Self> {
        let fallback =
            NaiveTime::from_hms_opt(hour, minute, 0).ok_or(Error::InvalidTime { hour, minute })?;
        Ok(Self { clock, fallback })
    }

    pub fn from_config(config: &SchedulingConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        Self::with_fallback(clock, config.default_hour, config.default_minute)
    }

    pub fn fallback(&self) -> NaiveTime {
        self.fallback
    }

    /// Appointment for the customer at `batch_index` among the successful
    /// extractions of a batch.
    pub fn schedule_for(&self, time_token: &str, batch_index: usize) -> ScheduledSlot {
        let time = parse_time_of_day(time_token).unwrap_or_else(|| {
            tracing::debug!(
                time_token,
                fallback = %self.fallback,
                "Unreadable time, using fallback"
            );
            self.fallback
        });

        let days = u64::try_from(batch_index)
            .unwrap_or(u64::MAX)
            .saturating_add(1);
        let date = next_working_day(self.clock.now().date(), days);
        ScheduledSlot::at(date, time)
    }
}

/// Hour and minute of a time token; `None` when absent or out of range.
///
/// Only `:` is accepted between hour and minute, so "9h30" reads as 09:00.
pub fn parse_time_of_day(token: &str) -> Option<NaiveTime> {
    let caps = TIME_OF_DAY.captures(token)?;
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(2).map(|m| m.as_str()) {
        Some(digits) if !digits.is_empty() => digits.parse().ok()?,
        _ => 0,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// `from` plus `days`, moved forward past any weekend.
///
/// Saturates at the last working day of the calendar instead of overflowing.
fn next_working_day(from: NaiveDate, days: u64) -> NaiveDate {
    let mut date = from.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    while is_weekend(date) {
        match date.succ_opt() {
            Some(next) => date = next,
            None => return last_working_day(),
        }
    }
    date
}

fn last_working_day() -> NaiveDate {
    let mut date = NaiveDate::MAX;
    while is_weekend(date) {
        match date.pred_opt() {
            Some(previous) => date = previous,
            None => break,
        }
    }
    date
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
