use crate::profile;
use crate::services::{checks, output};

pub fn handle_validate() -> anyhow::Result<()> {
    let root = std::env::current_dir()?;
    let record = profile::load_record(&root)?;
    let report = checks::run_checks(&root, &record);
    output::print_validation_report(&report);
    if !report.passed() {
        anyhow::bail!("validation failed with {} error(s)", report.errors.len());
    }
    Ok(())
}
