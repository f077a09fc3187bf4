use serde::Serialize;

#[derive(Serialize, Clone, Debug)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

/// Accumulated result of one validator run. Each check appends here; there is
/// no shared counter state anywhere else.
#[derive(Serialize, Default, Debug)]
pub struct ValidationReport {
    pub checks: Vec<CheckItem>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn check(&mut self, name: &str, status: &str) {
        self.checks.push(CheckItem {
            name: name.to_string(),
            status: status.to_string(),
        });
    }

    pub fn ok(&mut self, name: &str) {
        self.check(name, "ok");
    }

    pub fn error(&mut self, name: &str, message: impl Into<String>) {
        self.check(name, "error");
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, name: &str, message: impl Into<String>) {
        self.check(name, "warning");
        self.warnings.push(message.into());
    }

    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Fields pulled out of the profile record that the deployer needs.
#[derive(Debug, Clone, Serialize)]
pub struct DeployPlan {
    pub owner_name: String,
    pub owner_email: String,
    pub configured_login: String,
    pub custom_domain: Option<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct DnsRecord {
    pub record_type: String,
    pub host: String,
    pub value: String,
}

#[derive(Serialize, Debug)]
pub struct DeploySummary {
    pub login: String,
    pub repo: String,
    pub repo_url: String,
    pub actions_url: String,
    pub live_url: String,
    pub created_repo: bool,
    pub committed: bool,
    pub pages_enabled: bool,
    pub identity_mismatch: bool,
    pub dns_records: Vec<DnsRecord>,
}
