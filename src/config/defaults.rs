use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_report_dir() -> PathBuf {
    PathBuf::from("reports")
}

pub fn default_label() -> String {
    "Task".to_string()
}

pub fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

pub fn default_max_cycles() -> usize {
    // ten years of weekly renewals
    520
}
