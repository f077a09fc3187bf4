use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub site: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let site = make_fixture_site(tmp.path());
        Self {
            _tmp: tmp,
            home,
            site,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").expect("folio binary");
        cmd.env("HOME", &self.home).current_dir(&self.site);
        cmd
    }

    pub fn write_profile(&self, profile: &Value) {
        fs::write(
            self.site.join("data/profile.json"),
            serde_json::to_string_pretty(profile).expect("serialize profile"),
        )
        .expect("write profile");
    }

    pub fn profile(&self) -> Value {
        let raw = fs::read_to_string(self.site.join("data/profile.json")).expect("read profile");
        serde_json::from_str(&raw).expect("parse profile")
    }
}

pub fn fixture_profile() -> Value {
    serde_json::json!({
        "profile": {
            "name": "Ada Lovelace",
            "title": "Research Engineer",
            "organization": "Analytical Engines",
            "profileImage": "assets/profile.jpg",
            "cvPath": "assets/cv.pdf"
        },
        "contact": {
            "email": "ada@example.com",
            "phone": "+44 20 7946 0958",
            "location": "London, UK",
            "githubUsername": "ada-lovelace",
            "linkedin": "https://linkedin.com/in/ada"
        },
        "bio": {
            "introduction": "I write about early computing.",
            "background": "Mathematics and mechanical computation.",
            "researchFocus": "Analytical engines"
        },
        "siteConfig": {
            "siteTitle": "Ada Lovelace | Research",
            "domain": "ada.example.com"
        },
        "publications": [
            {"title": "Note G", "pdf": "assets/note-g.pdf"}
        ],
        "projects": [
            {"title": "Analytical Engine", "image": "assets/engine.png"}
        ],
        "education": [
            {"name": "Private tuition", "logo": "assets/tuition.png"}
        ],
        "navigation": [
            {"title": "Home"},
            {"title": "Publications"}
        ],
        "skills": {
            "mathematics": ["number theory", "calculus"],
            "computing": ["algorithms"]
        }
    })
}

fn make_fixture_site(base: &Path) -> PathBuf {
    let site = base.join("site");
    fs::create_dir_all(site.join("data")).expect("create data dir");
    fs::create_dir_all(site.join("assets")).expect("create assets dir");
    fs::create_dir_all(site.join(".github/workflows")).expect("create workflow dir");

    for f in [
        "assets/profile.jpg",
        "assets/cv.pdf",
        "assets/note-g.pdf",
        "assets/engine.png",
        "assets/tuition.png",
    ] {
        fs::write(site.join(f), b"fixture").expect("write media file");
    }
    fs::write(
        site.join(".github/workflows/deploy.yml"),
        "name: deploy\non:\n  push:\n    branches: [main]\n",
    )
    .expect("write workflow");
    fs::write(
        site.join("data/profile.json"),
        serde_json::to_string_pretty(&fixture_profile()).expect("serialize profile"),
    )
    .expect("write profile");

    site
}
