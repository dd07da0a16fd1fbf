use crate::cli::{OutputFormat, SeriesArgs};
use std::path::Path;
use tracing::info;
use workcadence::config::Config;
use workcadence::output::{
    render_json, render_markdown, render_text, write_report, SeriesReport, SeriesRequest,
};

pub fn execute(config_path: &Path, args: SeriesArgs) -> anyhow::Result<()> {
    info!("Loading config from {:?}", config_path);
    let mut config = Config::load_or_default(config_path)?;

    // Apply CLI overrides
    if let Some(label) = args.label {
        config.label = label;
    }
    if let Some(report_dir) = args.report_dir {
        config.report_dir = report_dir;
    }

    let request = SeriesRequest {
        label: config.label.clone(),
        anchor: args.anchor,
        mode: args.mode.unwrap_or(config.default_mode),
        count: args.count,
        until: args.until,
    };

    let report = SeriesReport::build(&config, &request)?;
    info!(
        "Generated {} {} cycles for '{}'",
        report.slots.len(),
        report.mode,
        report.label
    );

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&report, &config.date_format)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
        OutputFormat::Markdown => print!("{}", render_markdown(&report, &config.date_format)),
    }

    if args.write {
        let (json_path, md_path) = write_report(&config.report_dir, &report, &config.date_format)?;
        info!("Reports written to {:?} and {:?}", json_path, md_path);
    }

    Ok(())
}
