//! Working-day cadence scheduling for recurring tasks.
//!
//! Computes due dates for the Nth task of a series from an anchor date,
//! counting Monday to Friday only. See [`schedule`] for the two cadence
//! modes and [`naming`] for the `"<label> - <n>"` task name convention.

pub mod calendar;
pub mod config;
pub mod error;
pub mod naming;
pub mod output;
pub mod schedule;

pub use calendar::{add_calendar_days, add_working_days, is_weekend, CalendarDate};
pub use naming::extract_cycle_number;
pub use schedule::{
    calculate_initial_due_date, calculate_renewal_due_date, calculate_task_due_date,
    CadenceMode, CadenceRules, Cycle, Scheduler,
};
