use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Location of the profile record, relative to the site root.
pub const PROFILE_PATH: &str = "data/profile.json";

/// The Pages build workflow the validator checks for.
pub const WORKFLOW_PATH: &str = ".github/workflows/deploy.yml";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    pub profile: Profile,
    pub contact: Contact,
    pub bio: Bio,
    pub site_config: SiteConfig,
    pub publications: Vec<Entry>,
    pub projects: Vec<Entry>,
    pub education: Vec<Entry>,
    pub navigation: Vec<Entry>,
    pub skills: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub organization: String,
    pub profile_image: String,
    pub cv_path: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub email: String,
    pub phone: Option<String>,
    pub location: String,
    pub github_username: String,
    pub linkedin: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Bio {
    pub introduction: String,
    pub background: String,
    pub research_focus: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub site_title: String,
    pub domain: Option<String>,
}

/// One entry of a content section (publication, project, education, navigation).
/// Entries are loosely typed; only the fields the tools care about are named,
/// everything else rides along in `extra`.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Entry {
    pub title: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub pdf: Option<String>,
    pub logo: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Entry {
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("(untitled)")
    }

    /// Media file paths declared by this entry.
    pub fn media_paths(&self) -> Vec<&str> {
        [self.image.as_deref(), self.pdf.as_deref(), self.logo.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
            .collect()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    #[error("profile record not found at {0}")]
    NotFound(PathBuf),
    #[error("profile record is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Load and parse the profile record under `root`. Missing file and malformed
/// JSON abort immediately; field-level problems are the validator's job.
pub fn load_record(root: &Path) -> anyhow::Result<ProfileRecord> {
    let path = root.join(PROFILE_PATH);
    if !path.exists() {
        return Err(ProfileError::NotFound(path).into());
    }
    let raw = std::fs::read_to_string(&path)?;
    let record = serde_json::from_str(&raw).map_err(ProfileError::Malformed)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_with_unknown_entry_fields() {
        let raw = r##"{
            "profile": {"name": "Ada", "profileImage": "assets/me.jpg"},
            "contact": {"email": "ada@example.com", "githubUsername": "ada", "website": "https://ada.dev"},
            "siteConfig": {"siteTitle": "Ada"},
            "navigation": [{"title": "Home", "anchor": "#home"}],
            "skills": {"math": ["calculus"]}
        }"##;
        let record: ProfileRecord = serde_json::from_str(raw).expect("parse record");
        assert_eq!(record.profile.name, "Ada");
        assert_eq!(record.contact.github_username, "ada");
        assert_eq!(record.navigation.len(), 1);
        assert_eq!(record.navigation[0].label(), "Home");
        assert!(record.site_config.domain.is_none());
    }

    #[test]
    fn entry_media_paths_skip_blank_values() {
        let e = Entry {
            image: Some("assets/a.png".to_string()),
            pdf: Some("  ".to_string()),
            ..Entry::default()
        };
        assert_eq!(e.media_paths(), vec!["assets/a.png"]);
    }

    #[test]
    fn load_reports_missing_file() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let err = load_record(tmp.path()).expect_err("must fail");
        assert!(err.to_string().contains("not found"));
    }
}
