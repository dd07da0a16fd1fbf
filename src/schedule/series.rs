use super::{CadenceMode, CadenceRules, Cycle};
use crate::calendar::{add_working_days, CalendarDate};

/// Iterator over `(cycle, due date)` for cycles 1, 2, 3, ...
///
/// Initial-mode dates are chained off the previously yielded date, so a
/// series of N cycles costs N advances instead of re-walking the chain.
#[derive(Debug, Clone)]
pub struct CadenceSeries<D> {
    rules: CadenceRules,
    anchor: D,
    mode: CadenceMode,
    next_cycle: Option<Cycle>,
    previous: Option<D>,
}

impl<D: CalendarDate> CadenceSeries<D> {
    pub(crate) fn new(rules: CadenceRules, anchor: D, mode: CadenceMode) -> Self {
        Self {
            rules,
            anchor,
            mode,
            next_cycle: Some(Cycle::FIRST),
            previous: None,
        }
    }

    pub fn anchor(&self) -> D {
        self.anchor
    }

    pub fn mode(&self) -> CadenceMode {
        self.mode
    }
}

impl<D: CalendarDate> Iterator for CadenceSeries<D> {
    type Item = (Cycle, D);

    fn next(&mut self) -> Option<Self::Item> {
        let cycle = self.next_cycle?;

        let due = match (self.mode, self.previous) {
            (CadenceMode::Initial, None) => {
                add_working_days(self.anchor, self.rules.initial_first_offset)
            }
            (CadenceMode::Initial, Some(previous)) => {
                add_working_days(previous, self.rules.initial_step)
            }
            (CadenceMode::Renewal, _) => {
                add_working_days(self.anchor, self.rules.renewal_offset(cycle.get()))
            }
        };

        self.previous = Some(due);
        self.next_cycle = cycle.next();
        Some((cycle, due))
    }
}
