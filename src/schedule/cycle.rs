use serde::{Deserialize, Serialize};

/// 1-based index of a task within a recurring series.
///
/// Construction never fails: raw values are normalized with
/// `max(1, floor(raw))`, so `0`, `-5` and `0.5` all become cycle 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct Cycle(u32);

impl Cycle {
    pub const FIRST: Cycle = Cycle(1);

    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(1, i64::from(u32::MAX)) as u32)
    }

    /// Normalize a fractional cycle. NaN becomes cycle 1; values past
    /// `u32::MAX` saturate.
    pub fn from_f64(raw: f64) -> Self {
        // f64::max ignores NaN, and the cast saturates
        Self(raw.floor().max(1.0) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The following cycle, or `None` at the end of the range.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Default for Cycle {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<i64> for Cycle {
    fn from(raw: i64) -> Self {
        Self::new(raw)
    }
}

impl From<i32> for Cycle {
    fn from(raw: i32) -> Self {
        Self::new(i64::from(raw))
    }
}

impl From<u32> for Cycle {
    fn from(raw: u32) -> Self {
        Self(raw.max(1))
    }
}

impl From<usize> for Cycle {
    fn from(raw: usize) -> Self {
        Self(u32::try_from(raw).unwrap_or(u32::MAX).max(1))
    }
}

impl From<f64> for Cycle {
    fn from(raw: f64) -> Self {
        Self::from_f64(raw)
    }
}

impl From<Cycle> for u32 {
    fn from(cycle: Cycle) -> Self {
        cycle.0
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
