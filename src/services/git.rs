use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(thiserror::Error, Debug)]
pub enum GitError {
    #[error("failed to run git: {0}")]
    Spawn(std::io::Error),
    #[error("git {op} failed: {stderr}")]
    Command { op: String, stderr: String },
}

/// Version-control operations the deployer needs. Production code talks to the
/// `git` CLI through `GitCli`; tests substitute an in-memory fake.
pub trait VersionControl {
    fn is_available(&self) -> bool;
    fn is_repo(&self) -> bool;
    fn init(&mut self) -> anyhow::Result<()>;
    fn set_local_identity(&mut self, name: &str, email: &str) -> anyhow::Result<()>;
    fn ensure_branch(&mut self, branch: &str) -> anyhow::Result<()>;
    fn stage_all(&mut self) -> anyhow::Result<()>;
    fn staged_diff_empty(&self) -> anyhow::Result<bool>;
    fn commit(&mut self, message: &str) -> anyhow::Result<()>;
    fn remote_url(&self, name: &str) -> anyhow::Result<Option<String>>;
    fn add_remote(&mut self, name: &str, url: &str) -> anyhow::Result<()>;
    fn set_remote_url(&mut self, name: &str, url: &str) -> anyhow::Result<()>;
    fn push(&mut self, remote: &str, branch: &str) -> anyhow::Result<()>;
}

pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: &Path) -> Self {
        Self {
            workdir: workdir.to_path_buf(),
        }
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<std::process::Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| GitError::Spawn(e).into())
    }

    fn run_checked(&self, op: &str, args: &[&str]) -> anyhow::Result<String> {
        let out = self.run(args)?;
        if !out.status.success() {
            return Err(GitError::Command {
                op: op.to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&out.stdout).trim().to_string())
    }
}

impl VersionControl for GitCli {
    fn is_available(&self) -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn is_repo(&self) -> bool {
        self.workdir.join(".git").exists()
    }

    fn init(&mut self) -> anyhow::Result<()> {
        self.run_checked("init", &["init"])?;
        Ok(())
    }

    fn set_local_identity(&mut self, name: &str, email: &str) -> anyhow::Result<()> {
        self.run_checked("config user.name", &["config", "user.name", name])?;
        self.run_checked("config user.email", &["config", "user.email", email])?;
        Ok(())
    }

    fn ensure_branch(&mut self, branch: &str) -> anyhow::Result<()> {
        self.run_checked("branch", &["branch", "-M", branch])?;
        Ok(())
    }

    fn stage_all(&mut self) -> anyhow::Result<()> {
        self.run_checked("add", &["add", "-A"])?;
        Ok(())
    }

    fn staged_diff_empty(&self) -> anyhow::Result<bool> {
        // Exit 0 means no staged changes, 1 means there are some.
        let out = self.run(&["diff", "--cached", "--quiet"])?;
        match out.status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(GitError::Command {
                op: "diff --cached".to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            }
            .into()),
        }
    }

    fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        self.run_checked("commit", &["commit", "-m", message])?;
        Ok(())
    }

    fn remote_url(&self, name: &str) -> anyhow::Result<Option<String>> {
        let out = self.run(&["remote", "get-url", name])?;
        if out.status.success() {
            Ok(Some(
                String::from_utf8_lossy(&out.stdout).trim().to_string(),
            ))
        } else {
            Ok(None)
        }
    }

    fn add_remote(&mut self, name: &str, url: &str) -> anyhow::Result<()> {
        self.run_checked("remote add", &["remote", "add", name, url])?;
        Ok(())
    }

    fn set_remote_url(&mut self, name: &str, url: &str) -> anyhow::Result<()> {
        self.run_checked("remote set-url", &["remote", "set-url", name, url])?;
        Ok(())
    }

    fn push(&mut self, remote: &str, branch: &str) -> anyhow::Result<()> {
        self.run_checked("push", &["push", "-u", remote, branch])?;
        Ok(())
    }
}
