use crate::schedule::{CadenceMode, CadenceRules};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Mode used when the command line does not name one
    #[serde(default)]
    pub default_mode: CadenceMode,

    #[serde(default)]
    pub rules: CadenceRules,

    /// Label used for generated task names (`"<label> - <n>"`)
    #[serde(default = "default_label")]
    pub label: String,

    /// strftime pattern for dates in text and Markdown output
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Upper bound on generated cycles when a series is clamped by an end date
    #[serde(default = "default_max_cycles")]
    pub max_cycles: usize,

    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
}
