use crate::config::Config;
use crate::error::{CadenceError, InputError};
use crate::naming::format_task_name;
use crate::schedule::{CadenceMode, CadenceRules, Cycle, Scheduler};
use chrono::{Datelike, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

/// Series length when neither a count nor an end date is given.
pub const DEFAULT_SERIES_LENGTH: usize = 12;

/// What to generate: one labelled series from one anchor.
#[derive(Debug, Clone)]
pub struct SeriesRequest {
    pub label: String,
    pub anchor: NaiveDateTime,
    pub mode: CadenceMode,
    pub count: Option<usize>,
    pub until: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesReport {
    pub generated_at: String,
    pub label: String,
    pub anchor: NaiveDateTime,
    pub mode: CadenceMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_end: Option<NaiveDateTime>,
    pub rules: CadenceRules,
    pub slots: Vec<TaskSlot>,
    /// Generation stopped at the cycle cap before reaching the contract end
    #[serde(default)]
    pub truncated: bool,
}

/// One generated task in a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSlot {
    pub cycle: Cycle,
    pub name: String,
    pub due: NaiveDateTime,
    pub weekday: String,
    pub key: String,
}

impl TaskSlot {
    /// Deterministic key for upserting a generated task
    /// Uses: label | anchor | mode | cycle
    pub fn key(label: &str, anchor: &NaiveDateTime, mode: CadenceMode, cycle: Cycle) -> String {
        let input = format!(
            "{}|{}|{}|{}",
            label.trim(),
            anchor.format("%Y-%m-%dT%H:%M:%S"),
            mode,
            cycle
        );
        let hash = Sha256::digest(input.as_bytes());
        format!("{:x}", hash)[..12].to_string()
    }
}

impl SeriesReport {
    /// Validate `config`, then compute every slot of the requested series.
    pub fn build(config: &Config, request: &SeriesRequest) -> Result<Self, CadenceError> {
        config.validate()?;

        if let Some(end) = request.until {
            if end < request.anchor {
                return Err(InputError::EndBeforeAnchor {
                    anchor: request.anchor.to_string(),
                    end: end.to_string(),
                }
                .into());
            }
        }

        if request.count == Some(0) {
            return Err(InputError::EmptySeries.into());
        }

        let scheduler = Scheduler::new(config.rules);
        let (dues, truncated): (Vec<(Cycle, NaiveDateTime)>, bool) = match request.until {
            Some(end) => {
                let cap = request.count.unwrap_or(config.max_cycles);
                // one past the cap tells whether another cycle would still fit
                let mut dues: Vec<_> = scheduler
                    .series_until(request.anchor, request.mode, end, cap.saturating_add(1))
                    .collect();
                let truncated = dues.len() > cap;
                dues.truncate(cap);
                if truncated {
                    info!(
                        "Series '{}' hit the {} cycle cap before its contract end",
                        request.label, cap
                    );
                }
                (dues, truncated)
            }
            None => {
                let cap = request.count.unwrap_or(DEFAULT_SERIES_LENGTH);
                let dues = scheduler
                    .series(request.anchor, request.mode)
                    .take(cap)
                    .collect();
                (dues, false)
            }
        };

        let slots: Vec<TaskSlot> = dues
            .into_iter()
            .map(|(cycle, due)| TaskSlot {
                cycle,
                name: format_task_name(&request.label, cycle.get()),
                due,
                weekday: due.weekday().to_string(),
                key: TaskSlot::key(&request.label, &request.anchor, request.mode, cycle),
            })
            .collect();

        debug!(
            "Built {} slots for '{}' ({} mode)",
            slots.len(),
            request.label,
            request.mode
        );

        Ok(Self {
            generated_at: Utc::now().to_rfc3339(),
            label: request.label.clone(),
            anchor: request.anchor,
            mode: request.mode,
            contract_end: request.until,
            rules: config.rules,
            slots,
            truncated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn request(mode: CadenceMode) -> SeriesRequest {
        SeriesRequest {
            label: "Medium".to_string(),
            anchor: at(2024, 1, 1),
            mode,
            count: Some(3),
            until: None,
        }
    }

    #[test]
    fn test_build_initial_series() {
        let report = SeriesReport::build(&Config::default(), &request(CadenceMode::Initial)).unwrap();

        let dues: Vec<_> = report.slots.iter().map(|s| s.due).collect();
        assert_eq!(dues, vec![at(2024, 1, 15), at(2024, 1, 22), at(2024, 1, 29)]);
        assert_eq!(report.slots[1].name, "Medium - 2");
        assert_eq!(report.slots[0].weekday, "Mon");
        assert!(!report.truncated);
    }

    #[test]
    fn test_build_renewal_series() {
        let report = SeriesReport::build(&Config::default(), &request(CadenceMode::Renewal)).unwrap();

        assert_eq!(report.slots[0].due, at(2024, 1, 2));
        assert_eq!(report.slots[1].due, at(2024, 1, 11));
    }

    #[test]
    fn test_build_until_contract_end() {
        let mut req = request(CadenceMode::Initial);
        req.count = None;
        req.until = Some(at(2024, 2, 1));

        let report = SeriesReport::build(&Config::default(), &req).unwrap();
        assert_eq!(report.slots.len(), 3);
        assert!(report.slots.iter().all(|s| s.due <= at(2024, 2, 1)));
        assert!(!report.truncated);
    }

    #[test]
    fn test_build_marks_truncation() {
        let mut req = request(CadenceMode::Renewal);
        req.count = Some(2);
        req.until = Some(at(2025, 1, 1));

        let report = SeriesReport::build(&Config::default(), &req).unwrap();
        assert_eq!(report.slots.len(), 2);
        assert!(report.truncated);
    }

    #[test]
    fn test_build_exact_fit_is_not_truncated() {
        // cycle 4 (2024-02-05) falls after the contract end
        let mut req = request(CadenceMode::Initial);
        req.count = Some(3);
        req.until = Some(at(2024, 1, 29));

        let report = SeriesReport::build(&Config::default(), &req).unwrap();
        assert_eq!(report.slots.len(), 3);
        assert!(!report.truncated);

        req.until = Some(at(2024, 2, 5));
        let report = SeriesReport::build(&Config::default(), &req).unwrap();
        assert_eq!(report.slots.len(), 3);
        assert!(report.truncated);
    }

    #[test]
    fn test_build_rejects_zero_count() {
        let mut req = request(CadenceMode::Initial);
        req.count = Some(0);
        req.until = Some(at(2024, 1, 29));

        assert!(matches!(
            SeriesReport::build(&Config::default(), &req),
            Err(CadenceError::Input(InputError::EmptySeries))
        ));
    }

    #[test]
    fn test_build_rejects_end_before_anchor() {
        let mut req = request(CadenceMode::Initial);
        req.until = Some(at(2023, 12, 1));

        assert!(matches!(
            SeriesReport::build(&Config::default(), &req),
            Err(CadenceError::Input(InputError::EndBeforeAnchor { .. }))
        ));
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let mut config = Config::default();
        config.rules.renewal_interval = 0;

        assert!(matches!(
            SeriesReport::build(&config, &request(CadenceMode::Renewal)),
            Err(CadenceError::Config(_))
        ));
    }

    #[test]
    fn test_slot_keys() {
        let anchor = at(2024, 1, 1);
        let k1 = TaskSlot::key("Medium", &anchor, CadenceMode::Initial, Cycle::from(1));
        let k2 = TaskSlot::key("Medium", &anchor, CadenceMode::Initial, Cycle::from(1));
        let k3 = TaskSlot::key("Medium", &anchor, CadenceMode::Renewal, Cycle::from(1));

        assert_eq!(k1, k2);
        assert_eq!(k1.len(), 12);
        assert_ne!(k1, k3);
    }
}
