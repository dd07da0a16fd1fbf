use crate::cli::CycleArgs;
use tracing::debug;
use workcadence::naming::{extract_cycle_number, task_label};

pub fn execute(args: CycleArgs) -> anyhow::Result<()> {
    for name in &args.names {
        let cycle = extract_cycle_number(name);
        debug!("'{}' -> label '{}', cycle {}", name, task_label(name), cycle);
        println!("{}\t{}", cycle, name);
    }
    Ok(())
}
