use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const INITIAL_FIRST_OFFSET: u32 = 10;
pub const INITIAL_STEP: u32 = 5;
pub const RENEWAL_FIRST_OFFSET: u32 = 1;
pub const RENEWAL_INTERVAL: u32 = 7;

/// How due dates are spaced across a task series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CadenceMode {
    /// Ramp-up: the first task comes later, then spacing tightens.
    /// Each cycle is chained off the previous cycle's due date.
    #[default]
    Initial,
    /// Steady recurrence at a fixed interval from the anchor.
    Renewal,
}

impl std::fmt::Display for CadenceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CadenceMode::Initial => write!(f, "initial"),
            CadenceMode::Renewal => write!(f, "renewal"),
        }
    }
}

impl std::str::FromStr for CadenceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "initial" | "ramp-up" | "rampup" => Ok(CadenceMode::Initial),
            "renewal" | "steady" => Ok(CadenceMode::Renewal),
            _ => Err(format!("Unknown cadence mode: {}", s)),
        }
    }
}

/// Working-day spacing used by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct CadenceRules {
    /// Working days from the anchor to cycle 1 in initial mode.
    #[serde(default = "default_initial_first_offset")]
    pub initial_first_offset: u32,

    /// Working days between consecutive initial-mode cycles.
    #[serde(default = "default_initial_step")]
    pub initial_step: u32,

    /// Working days from the anchor to cycle 1 in renewal mode.
    #[serde(default = "default_renewal_first_offset")]
    pub renewal_first_offset: u32,

    /// Working days between consecutive renewal-mode cycles.
    #[serde(default = "default_renewal_interval")]
    pub renewal_interval: u32,
}

impl Default for CadenceRules {
    fn default() -> Self {
        Self {
            initial_first_offset: default_initial_first_offset(),
            initial_step: default_initial_step(),
            renewal_first_offset: default_renewal_first_offset(),
            renewal_interval: default_renewal_interval(),
        }
    }
}

impl CadenceRules {
    /// Offset from the anchor for a renewal cycle: `first + (n - 1) * interval`.
    pub fn renewal_offset(&self, cycle: u32) -> u32 {
        cycle
            .saturating_sub(1)
            .saturating_mul(self.renewal_interval)
            .saturating_add(self.renewal_first_offset)
    }
}

fn default_initial_first_offset() -> u32 {
    INITIAL_FIRST_OFFSET
}

fn default_initial_step() -> u32 {
    INITIAL_STEP
}

fn default_renewal_first_offset() -> u32 {
    RENEWAL_FIRST_OFFSET
}

fn default_renewal_interval() -> u32 {
    RENEWAL_INTERVAL
}
