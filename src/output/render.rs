use super::SeriesReport;
use crate::error::OutputError;
use chrono::{NaiveDateTime, Timelike};
use std::fs;
use std::path::{Path, PathBuf};

/// Format a due date, appending the time only when it is not midnight.
pub fn format_due(due: &NaiveDateTime, date_format: &str) -> String {
    if due.hour() == 0 && due.minute() == 0 && due.second() == 0 {
        due.format(date_format).to_string()
    } else {
        format!("{} {}", due.format(date_format), due.format("%H:%M"))
    }
}

/// One line per slot: `<cycle>\t<due>\t<weekday>\t<name>`
pub fn render_text(report: &SeriesReport, date_format: &str) -> String {
    let mut out = String::new();
    for slot in &report.slots {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            slot.cycle,
            format_due(&slot.due, date_format),
            slot.weekday,
            slot.name
        ));
    }
    out
}

pub fn render_json(report: &SeriesReport) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_markdown(report: &SeriesReport, date_format: &str) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {} schedule\n\n", report.label));
    md.push_str(&format!("**Generated:** {}\n", report.generated_at));
    md.push_str(&format!(
        "**Anchor:** {}\n",
        format_due(&report.anchor, date_format)
    ));
    md.push_str(&format!("**Mode:** {}\n", report.mode));
    if let Some(end) = &report.contract_end {
        md.push_str(&format!(
            "**Contract end:** {}\n",
            format_due(end, date_format)
        ));
    }
    md.push('\n');

    if report.slots.is_empty() {
        md.push_str("*No cycles fall before the contract end*\n");
        return md;
    }

    md.push_str("| Cycle | Task | Due | Day | Key |\n");
    md.push_str("|-------|------|-----|-----|-----|\n");
    for slot in &report.slots {
        md.push_str(&format!(
            "| {} | {} | {} | {} | `{}` |\n",
            slot.cycle,
            slot.name,
            format_due(&slot.due, date_format),
            slot.weekday,
            slot.key
        ));
    }

    if report.truncated {
        md.push_str("\n> Stopped at the cycle cap before the contract end.\n");
    }

    md
}

/// Lowercase, hyphen-separated file stem for a series label.
pub fn label_slug(label: &str) -> String {
    let slug = label
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "series".to_string()
    } else {
        slug
    }
}

/// Write `<slug>.series.json` and `<slug>.series.md` into `report_dir`.
/// Returns the two paths written.
pub fn write_report(
    report_dir: &Path,
    report: &SeriesReport,
    date_format: &str,
) -> Result<(PathBuf, PathBuf), OutputError> {
    fs::create_dir_all(report_dir).map_err(OutputError::CreateDir)?;

    let stem = label_slug(&report.label);

    let json_path = report_dir.join(format!("{}.series.json", stem));
    fs::write(&json_path, render_json(report)?).map_err(OutputError::WriteReport)?;

    let md_path = report_dir.join(format!("{}.series.md", stem));
    fs::write(&md_path, render_markdown(report, date_format)).map_err(OutputError::WriteReport)?;

    Ok((json_path, md_path))
}
