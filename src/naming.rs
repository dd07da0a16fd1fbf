//! Task naming convention: `"<label> - <n>"`.

use regex::Regex;
use std::sync::OnceLock;

/// Trailing `-<digits>` suffix with optional whitespace around the hyphen.
const CYCLE_SUFFIX: &str = r"(?i)\s*-\s*([0-9]+)$";

/// Default cycle for names without a recognizable suffix.
pub const DEFAULT_CYCLE: u32 = 1;

fn cycle_suffix() -> Option<&'static Regex> {
    static SUFFIX_RE: OnceLock<Option<Regex>> = OnceLock::new();
    SUFFIX_RE
        .get_or_init(|| Regex::new(CYCLE_SUFFIX).ok())
        .as_ref()
}

/// Recover the cycle number from a task name such as `"Medium - 3"`.
///
/// Best effort: names without a numeric suffix yield [`DEFAULT_CYCLE`].
/// Suffixes too large for a `u32` saturate to `u32::MAX`.
pub fn extract_cycle_number(name: &str) -> u32 {
    try_extract_cycle_number(name).unwrap_or(DEFAULT_CYCLE)
}

fn try_extract_cycle_number(name: &str) -> Option<u32> {
    let caps = cycle_suffix()?.captures(name)?;
    // only ASCII digits match, so a failed parse means overflow
    Some(caps.get(1)?.as_str().parse().unwrap_or(u32::MAX))
}

/// Build a task name that [`extract_cycle_number`] can read back.
pub fn format_task_name(label: &str, cycle: u32) -> String {
    format!("{} - {}", label.trim_end(), cycle)
}

/// Strip the cycle suffix from a task name, if present.
pub fn task_label(name: &str) -> &str {
    match cycle_suffix().and_then(|re| re.find(name)) {
        Some(m) => &name[..m.start()],
        None => name,
    }
}
