//! Due-date calculation for recurring task series.
//!
//! Two cadences are supported:
//!
//! - **initial** (ramp-up): cycle 1 is due `initial_first_offset` working days
//!   after the anchor; every later cycle is due `initial_step` working days
//!   after the *previous cycle's due date*.
//! - **renewal** (steady): cycle `n` is due
//!   `renewal_first_offset + (n - 1) * renewal_interval` working days after
//!   the anchor.
//!
//! With the default rules that is 10 then +5 for initial, and 1 + 7(n-1) for
//! renewal. Nothing here can fail: cycle numbers are normalized by [`Cycle`].

mod cycle;
mod rules;
mod series;

pub use cycle::Cycle;
pub use rules::*;
pub use series::CadenceSeries;

use crate::calendar::{add_working_days, CalendarDate};
use tracing::trace;

/// Due-date calculator bound to a set of spacing rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scheduler {
    rules: CadenceRules,
}

impl Scheduler {
    pub fn new(rules: CadenceRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &CadenceRules {
        &self.rules
    }

    /// Due date of `cycle` in a series anchored at `anchor`.
    pub fn due_date<D: CalendarDate>(
        &self,
        anchor: D,
        cycle: impl Into<Cycle>,
        mode: CadenceMode,
    ) -> D {
        let cycle = cycle.into();
        trace!(cycle = cycle.get(), %mode, "computing due date");

        match mode {
            CadenceMode::Initial => self.initial_due_date(anchor, cycle),
            CadenceMode::Renewal => self.renewal_due_date(anchor, cycle),
        }
    }

    /// Chained ramp-up: add `initial_step` to the previous cycle's result.
    fn initial_due_date<D: CalendarDate>(&self, anchor: D, cycle: Cycle) -> D {
        let mut due = add_working_days(anchor, self.rules.initial_first_offset);
        for _ in 1..cycle.get() {
            let next = add_working_days(due, self.rules.initial_step);
            // saturated at the end of the date range
            if next == due {
                break;
            }
            due = next;
        }
        due
    }

    fn renewal_due_date<D: CalendarDate>(&self, anchor: D, cycle: Cycle) -> D {
        add_working_days(anchor, self.rules.renewal_offset(cycle.get()))
    }

    /// Unbounded series of due dates starting at cycle 1.
    pub fn series<D: CalendarDate>(&self, anchor: D, mode: CadenceMode) -> CadenceSeries<D> {
        CadenceSeries::new(self.rules, anchor, mode)
    }

    /// Cycles due on or before `end`, at most `cap` of them.
    ///
    /// Stops at the first cycle past `end`; due dates only grow with the
    /// cycle number, so nothing later could fit either.
    pub fn series_until<D: CalendarDate>(
        &self,
        anchor: D,
        mode: CadenceMode,
        end: D,
        cap: usize,
    ) -> impl Iterator<Item = (Cycle, D)> {
        self.series(anchor, mode)
            .take(cap)
            .take_while(move |(_, due)| *due <= end)
    }
}

/// Due date for `cycle` under the default rules.
///
/// Pass [`CadenceMode::default()`] for the usual ramp-up schedule.
pub fn calculate_task_due_date<D: CalendarDate>(
    anchor: D,
    cycle: impl Into<Cycle>,
    mode: CadenceMode,
) -> D {
    Scheduler::default().due_date(anchor, cycle, mode)
}

pub fn calculate_initial_due_date<D: CalendarDate>(anchor: D, cycle: impl Into<Cycle>) -> D {
    calculate_task_due_date(anchor, cycle, CadenceMode::Initial)
}

pub fn calculate_renewal_due_date<D: CalendarDate>(anchor: D, cycle: impl Into<Cycle>) -> D {
    calculate_task_due_date(anchor, cycle, CadenceMode::Renewal)
}
