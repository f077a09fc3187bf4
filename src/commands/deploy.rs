use crate::profile;
use crate::services::git::GitCli;
use crate::services::github::GhCli;
use crate::services::{audit, deploy, output};

pub fn handle_deploy(token_flag: Option<String>) -> anyhow::Result<()> {
    let root = std::env::current_dir()?;
    let record = profile::load_record(&root)?;

    // Flag wins over the environment; gh's own keyring auth is the fallback.
    let token = token_flag
        .or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .filter(|t| !t.trim().is_empty());

    let mut vcs = GitCli::new(&root);
    let mut hosting = GhCli::new(&root, token);

    let summary = deploy::run_deploy(&root, &record, &mut vcs, &mut hosting)?;
    audit::audit(
        "deploy",
        serde_json::json!({
            "repo": summary.repo,
            "live_url": summary.live_url,
            "created_repo": summary.created_repo,
            "committed": summary.committed,
        }),
    );
    output::print_deploy_summary(&summary);
    Ok(())
}
