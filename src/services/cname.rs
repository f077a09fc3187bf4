use std::path::Path;

pub const CNAME_FILE: &str = "CNAME";

#[derive(Debug, PartialEq, Eq)]
pub enum CnameAction {
    Written(String),
    Removed,
    Unchanged,
}

/// Bring the CNAME file in line with the configured domain: write the domain
/// as the sole line when configured, delete a stale file when not. Re-running
/// with the same configuration is a no-op.
pub fn reconcile(root: &Path, domain: Option<&str>) -> anyhow::Result<CnameAction> {
    let path = root.join(CNAME_FILE);
    match domain {
        Some(d) => {
            let desired = format!("{}\n", d.trim());
            if path.exists() && std::fs::read_to_string(&path)? == desired {
                return Ok(CnameAction::Unchanged);
            }
            std::fs::write(&path, desired)?;
            Ok(CnameAction::Written(d.trim().to_string()))
        }
        None => {
            if path.exists() {
                std::fs::remove_file(&path)?;
                Ok(CnameAction::Removed)
            } else {
                Ok(CnameAction::Unchanged)
            }
        }
    }
}
