use crate::domain::models::{DeployPlan, DeploySummary, DnsRecord};
use crate::profile::{is_blank, ProfileRecord};
use crate::services::cname;
use crate::services::git::VersionControl;
use crate::services::github::HostingApi;
use crate::services::output;
use std::path::Path;

pub const DEFAULT_BRANCH: &str = "main";
pub const REMOTE_NAME: &str = "origin";

/// Apex A records GitHub Pages serves custom domains from.
pub const PAGES_A_RECORDS: [&str; 4] = [
    "185.199.108.153",
    "185.199.109.153",
    "185.199.110.153",
    "185.199.111.153",
];

#[derive(thiserror::Error, Debug)]
pub enum DeployError {
    #[error("missing dependency: {tool}. {hint}")]
    MissingDependency { tool: &'static str, hint: &'static str },
    #[error("missing required field {path} in data/profile.json")]
    MissingRequiredField { path: &'static str },
    #[error("authentication failed: {0}. Provide a token with repo and pages scopes via --token or GITHUB_TOKEN")]
    AuthenticationFailure(String),
    #[error("push rejected: {stderr}. The local commit is kept; retry with `git push --force origin main` if the remote history should be replaced")]
    PushFailure { stderr: String },
}

/// Pull the deploy-relevant fields out of the record, failing on any blank
/// mandatory field with its JSON path.
pub fn extract_plan(record: &ProfileRecord) -> Result<DeployPlan, DeployError> {
    let required: [(&'static str, &str); 3] = [
        ("profile.name", record.profile.name.as_str()),
        ("contact.email", record.contact.email.as_str()),
        (
            "contact.githubUsername",
            record.contact.github_username.as_str(),
        ),
    ];
    for (path, value) in required {
        if is_blank(value) {
            return Err(DeployError::MissingRequiredField { path });
        }
    }
    Ok(DeployPlan {
        owner_name: record.profile.name.trim().to_string(),
        owner_email: record.contact.email.trim().to_string(),
        configured_login: record.contact.github_username.trim().to_string(),
        custom_domain: record
            .site_config
            .domain
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
    })
}

pub fn site_repo_name(login: &str) -> String {
    format!("{}.github.io", login)
}

pub fn dns_records(login: &str) -> Vec<DnsRecord> {
    let mut records: Vec<DnsRecord> = PAGES_A_RECORDS
        .iter()
        .map(|ip| DnsRecord {
            record_type: "A".to_string(),
            host: "@".to_string(),
            value: ip.to_string(),
        })
        .collect();
    records.push(DnsRecord {
        record_type: "CNAME".to_string(),
        host: "www".to_string(),
        value: site_repo_name(login),
    });
    records
}

/// Run the deployment phase sequence against the supplied clients. Every phase
/// gates the next; the first fatal error aborts the run.
pub fn run_deploy(
    root: &Path,
    record: &ProfileRecord,
    vcs: &mut dyn VersionControl,
    hosting: &mut dyn HostingApi,
) -> anyhow::Result<DeploySummary> {
    if !vcs.is_available() {
        return Err(DeployError::MissingDependency {
            tool: "git",
            hint: "install it from https://git-scm.com/downloads",
        }
        .into());
    }
    if !hosting.is_available() {
        return Err(DeployError::MissingDependency {
            tool: "gh",
            hint: "install the GitHub CLI from https://cli.github.com",
        }
        .into());
    }

    let plan = extract_plan(record)?;

    let login = hosting
        .authenticated_login()
        .map_err(|e| DeployError::AuthenticationFailure(e.to_string()))?;
    let identity_mismatch = login != plan.configured_login;
    if identity_mismatch {
        output::warn(&format!(
            "authenticated as {} but the profile claims {}; deploying to the authenticated account",
            login, plan.configured_login
        ));
    }
    let repo = site_repo_name(&login);

    if !vcs.is_repo() {
        vcs.init()?;
    }
    vcs.set_local_identity(&plan.owner_name, &plan.owner_email)?;

    match cname::reconcile(root, plan.custom_domain.as_deref())? {
        cname::CnameAction::Written(d) => output::info(&format!("CNAME set to {}", d)),
        cname::CnameAction::Removed => output::info("stale CNAME removed"),
        cname::CnameAction::Unchanged => {}
    }

    vcs.ensure_branch(DEFAULT_BRANCH)?;

    let existed = hosting.repo_exists(&login, &repo)?;

    let live_url = match plan.custom_domain.as_deref() {
        Some(d) => format!("https://{}", d),
        None => format!("https://{}", repo),
    };

    vcs.stage_all()?;
    let committed = if vcs.staged_diff_empty()? {
        output::info("nothing to commit, working tree already deployed");
        false
    } else {
        vcs.commit(&format!(
            "Deploy portfolio for {} ({})",
            plan.owner_name, live_url
        ))?;
        true
    };

    let remote_url = format!("https://github.com/{}/{}.git", login, repo);
    match vcs.remote_url(REMOTE_NAME)? {
        None => vcs.add_remote(REMOTE_NAME, &remote_url)?,
        Some(existing) if existing != remote_url => {
            vcs.set_remote_url(REMOTE_NAME, &remote_url)?
        }
        Some(_) => {}
    }

    if !existed {
        hosting
            .create_repo(&login, &repo)
            .map_err(|e| DeployError::PushFailure {
                stderr: e.to_string(),
            })?;
    }
    vcs.push(REMOTE_NAME, DEFAULT_BRANCH)
        .map_err(|e| DeployError::PushFailure {
            stderr: e.to_string(),
        })?;

    let pages_enabled = match hosting.enable_pages(&login, &repo, DEFAULT_BRANCH) {
        Ok(()) => true,
        Err(e) => {
            output::info(&format!(
                "pages configuration skipped (may already be enabled): {}",
                e
            ));
            false
        }
    };

    let dns = if plan.custom_domain.is_some() {
        dns_records(&login)
    } else {
        Vec::new()
    };

    Ok(DeploySummary {
        repo_url: format!("https://github.com/{}/{}", login, repo),
        actions_url: format!("https://github.com/{}/{}/actions", login, repo),
        live_url,
        login,
        repo,
        created_repo: !existed,
        committed,
        pages_enabled,
        identity_mismatch,
        dns_records: dns,
    })
}
