//! Working-day arithmetic over chrono dates.
//!
//! A working day is Monday through Friday. There is no holiday calendar.
//! Every function is generic over the chrono value it advances, so a
//! `NaiveDateTime` or `DateTime<Tz>` keeps its time-of-day.
//!
//! None of these functions panic. Advancing past the end of chrono's
//! representable range saturates: working-day results stop at the last
//! representable weekday, calendar-day results at the last representable day.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use tracing::trace;

/// Dates the working-day functions can advance.
///
/// Implemented for `NaiveDate`, `NaiveDateTime` and `DateTime<Tz>`.
pub trait CalendarDate: Datelike + Copy + PartialOrd {
    /// Shift by whole days, or `None` if the result is out of range.
    fn shift_days(self, days: i64) -> Option<Self>;
}

impl CalendarDate for NaiveDate {
    fn shift_days(self, days: i64) -> Option<Self> {
        self.checked_add_signed(Duration::try_days(days)?)
    }
}

impl CalendarDate for NaiveDateTime {
    fn shift_days(self, days: i64) -> Option<Self> {
        self.checked_add_signed(Duration::try_days(days)?)
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz>
where
    DateTime<Tz>: Copy,
{
    fn shift_days(self, days: i64) -> Option<Self> {
        self.checked_add_signed(Duration::try_days(days)?)
    }
}

/// Returns true if the date falls on a Saturday or Sunday.
pub fn is_weekend<D: Datelike>(date: &D) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Shift forward by up to `days`, stopping at the last representable date.
fn shift_saturating<D: CalendarDate>(date: D, days: i64) -> (D, i64) {
    if let Some(shifted) = date.shift_days(days) {
        return (shifted, days);
    }

    // largest reachable offset in [0, days)
    let (mut lo, mut hi) = (0, days - 1);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if date.shift_days(mid).is_some() {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    (date.shift_days(lo).unwrap_or(date), lo)
}

/// Advance `date` by `n` working days.
///
/// Counts one calendar day at a time and only weekdays count. The starting
/// date is never counted, so the result is at least one calendar day later
/// whenever `n > 0`, and `n == 0` returns `date` unchanged.
pub fn add_working_days<D: CalendarDate>(date: D, n: u32) -> D {
    if n == 0 {
        return date;
    }

    // Any 7 consecutive days hold exactly 5 weekdays and end on the same
    // weekday, so whole weeks can be skipped. Keep at least one day for the
    // stepping loop below.
    let weeks = i64::from((n - 1) / 5);
    let (mut current, advanced) = shift_saturating(date, weeks * 7);
    let mut remaining = if advanced == weeks * 7 {
        n - (n - 1) / 5 * 5
    } else {
        // within a week of the end of the range; stepping will saturate
        n
    };

    while remaining > 0 {
        match current.shift_days(1) {
            Some(next) => current = next,
            None => break,
        }
        if !is_weekend(&current) {
            remaining -= 1;
        }
    }

    if remaining == 0 {
        return current;
    }

    trace!(remaining, "working-day advance saturated at end of date range");
    while is_weekend(&current) {
        match current.shift_days(-1) {
            Some(previous) => current = previous,
            None => break,
        }
    }
    current
}

/// Shift `date` forward by exactly `n` calendar days, weekends included.
pub fn add_calendar_days<D: CalendarDate>(date: D, n: u32) -> D {
    shift_saturating(date, i64::from(n)).0
}

/// Count the weekdays in the half-open range `(from, to]`.
///
/// Returns 0 when `to` is not after `from`. Inverse of [`add_working_days`]
/// away from the end of the date range:
/// `working_days_between(d, add_working_days(d, n)) == n`.
pub fn working_days_between<D: CalendarDate>(from: D, to: D) -> u32 {
    let mut current = from;
    let mut count = 0;

    while current < to {
        match current.shift_days(1) {
            Some(next) => current = next,
            None => break,
        }
        if !is_weekend(&current) {
            count += 1;
        }
    }

    count
}
