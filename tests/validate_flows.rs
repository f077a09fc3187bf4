use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn complete_fixture_site_validates_cleanly() {
    let env = TestEnv::new();
    env.cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(contains("errors: 0"));
}

#[test]
fn missing_mandatory_fields_are_named_by_json_path() {
    for path in [
        "profile.name",
        "contact.email",
        "contact.githubUsername",
        "siteConfig.siteTitle",
    ] {
        let env = TestEnv::new();
        let mut profile = env.profile();
        match path {
            "profile.name" => profile["profile"]["name"] = "".into(),
            "contact.email" => profile["contact"]["email"] = "".into(),
            "contact.githubUsername" => profile["contact"]["githubUsername"] = "".into(),
            _ => profile["siteConfig"]["siteTitle"] = "".into(),
        }
        env.write_profile(&profile);
        env.cmd()
            .arg("validate")
            .assert()
            .failure()
            .stdout(contains(path));
    }
}

#[test]
fn invalid_github_username_fails_validation() {
    let env = TestEnv::new();
    let mut profile = env.profile();
    profile["contact"]["githubUsername"] = "-bad-".into();
    env.write_profile(&profile);
    env.cmd()
        .arg("validate")
        .assert()
        .failure()
        .stdout(contains("githubUsername"));
}

#[test]
fn invalid_domain_fails_validation() {
    let env = TestEnv::new();
    let mut profile = env.profile();
    profile["siteConfig"]["domain"] = "not a domain".into();
    env.write_profile(&profile);
    env.cmd()
        .arg("validate")
        .assert()
        .failure()
        .stdout(contains("siteConfig.domain"));
}

#[test]
fn empty_navigation_fails_validation() {
    let env = TestEnv::new();
    let mut profile = env.profile();
    profile["navigation"] = serde_json::json!([]);
    env.write_profile(&profile);
    env.cmd()
        .arg("validate")
        .assert()
        .failure()
        .stdout(contains("navigation"));
}

#[test]
fn missing_entry_media_is_only_a_warning() {
    let env = TestEnv::new();
    std::fs::remove_file(env.site.join("assets/engine.png")).expect("remove media");
    env.cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(contains("warning:"))
        .stdout(contains("engine.png"));
}

#[test]
fn missing_workflow_file_fails_validation() {
    let env = TestEnv::new();
    std::fs::remove_file(env.site.join(".github/workflows/deploy.yml"))
        .expect("remove workflow");
    env.cmd()
        .arg("validate")
        .assert()
        .failure()
        .stdout(contains("deployment workflow"));
}

#[test]
fn malformed_json_aborts_immediately() {
    let env = TestEnv::new();
    std::fs::write(env.site.join("data/profile.json"), "{not json").expect("corrupt profile");
    env.cmd()
        .arg("validate")
        .assert()
        .failure()
        .stderr(contains("not valid JSON"));
}

#[test]
fn missing_profile_record_aborts_immediately() {
    let env = TestEnv::new();
    std::fs::remove_file(env.site.join("data/profile.json")).expect("remove profile");
    env.cmd()
        .arg("validate")
        .assert()
        .failure()
        .stderr(contains("not found"));
}
