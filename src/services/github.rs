use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(thiserror::Error, Debug)]
pub enum HostingError {
    #[error("failed to run gh: {0}")]
    Spawn(std::io::Error),
    #[error("gh {op} failed: {stderr}")]
    Command { op: String, stderr: String },
    #[error("could not resolve an authenticated identity: {0}")]
    Identity(String),
}

/// Hosting-provider operations the deployer needs, backed by the `gh` CLI in
/// production and by an in-memory fake in tests.
pub trait HostingApi {
    fn is_available(&self) -> bool;
    fn authenticated_login(&self) -> anyhow::Result<String>;
    fn repo_exists(&self, owner: &str, repo: &str) -> anyhow::Result<bool>;
    fn create_repo(&mut self, owner: &str, repo: &str) -> anyhow::Result<()>;
    fn enable_pages(&self, owner: &str, repo: &str, branch: &str) -> anyhow::Result<()>;
}

pub struct GhCli {
    workdir: PathBuf,
    token: Option<String>,
}

impl GhCli {
    pub fn new(workdir: &Path, token: Option<String>) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
            token,
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new("gh");
        cmd.current_dir(&self.workdir);
        if let Some(token) = &self.token {
            cmd.env("GH_TOKEN", token);
        }
        cmd
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<std::process::Output> {
        self.command()
            .args(args)
            .output()
            .map_err(|e| HostingError::Spawn(e).into())
    }

    fn run_checked(&self, op: &str, args: &[&str]) -> anyhow::Result<String> {
        let out = self.run(args)?;
        if !out.status.success() {
            return Err(HostingError::Command {
                op: op.to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
    }
}

impl HostingApi for GhCli {
    fn is_available(&self) -> bool {
        Command::new("gh")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn authenticated_login(&self) -> anyhow::Result<String> {
        let raw = self
            .run_checked("api user", &["api", "user"])
            .map_err(|e| HostingError::Identity(e.to_string()))?;
        let value: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|e| HostingError::Identity(format!("unexpected api response: {}", e)))?;
        match value.get("login").and_then(|l| l.as_str()) {
            Some(login) if !login.is_empty() => Ok(login.to_string()),
            _ => Err(HostingError::Identity("response carries no login".to_string()).into()),
        }
    }

    fn repo_exists(&self, owner: &str, repo: &str) -> anyhow::Result<bool> {
        let target = format!("{}/{}", owner, repo);
        let out = self.run(&["repo", "view", &target, "--json", "name"])?;
        Ok(out.status.success())
    }

    fn create_repo(&mut self, owner: &str, repo: &str) -> anyhow::Result<()> {
        let target = format!("{}/{}", owner, repo);
        self.run_checked("repo create", &["repo", "create", &target, "--public"])?;
        Ok(())
    }

    fn enable_pages(&self, owner: &str, repo: &str, branch: &str) -> anyhow::Result<()> {
        let endpoint = format!("repos/{}/{}/pages", owner, repo);
        let source_branch = format!("source[branch]={}", branch);
        self.run_checked(
            "api pages",
            &[
                "api",
                "-X",
                "POST",
                &endpoint,
                "-f",
                &source_branch,
                "-f",
                "source[path]=/",
            ],
        )?;
        Ok(())
    }
}
