use crate::domain::models::{DeploySummary, ValidationReport};

pub fn info(msg: &str) {
    println!("{}", msg);
}

pub fn warn(msg: &str) {
    eprintln!("warning: {}", msg);
}

pub fn print_validation_report(report: &ValidationReport) {
    for c in &report.checks {
        println!("{}\t{}", c.name, c.status);
    }
    for w in &report.warnings {
        println!("warning: {}", w);
    }
    for e in &report.errors {
        println!("error: {}", e);
    }
    println!(
        "checks: {}  errors: {}  warnings: {}",
        report.checks.len(),
        report.errors.len(),
        report.warnings.len()
    );
}

pub fn print_deploy_summary(summary: &DeploySummary) {
    println!("repository: {}", summary.repo_url);
    println!("actions:    {}", summary.actions_url);
    println!("live site:  {}", summary.live_url);
    if !summary.dns_records.is_empty() {
        println!("configure these records at your DNS registrar:");
        for r in &summary.dns_records {
            println!("{}\t{}\t{}", r.record_type, r.host, r.value);
        }
    }
}
