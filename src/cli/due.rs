use crate::cli::DueArgs;
use std::path::Path;
use tracing::{debug, info};
use workcadence::config::Config;
use workcadence::naming::extract_cycle_number;
use workcadence::output::format_due;
use workcadence::{Cycle, Scheduler};

pub fn execute(config_path: &Path, args: DueArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path)?;
    config.validate()?;

    let mode = args.mode.unwrap_or(config.default_mode);
    let cycle = match (&args.name, args.cycle) {
        (Some(name), _) => Cycle::from(extract_cycle_number(name)),
        (None, Some(raw)) => Cycle::from(raw),
        (None, None) => Cycle::FIRST,
    };
    debug!("Resolved cycle {} ({} mode)", cycle, mode);

    let due = Scheduler::new(config.rules).due_date(args.anchor, cycle, mode);
    info!("Cycle {} from {} is due {}", cycle, args.anchor, due);

    println!("{}", format_due(&due, &config.date_format));
    Ok(())
}
