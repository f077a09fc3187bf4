use crate::domain::models::ValidationReport;
use crate::profile::{is_blank, Entry, ProfileRecord, WORKFLOW_PATH};
use crate::services::grammar;
use std::path::Path;

/// Run the full validator checklist against a parsed record. Checks are
/// independent; nothing here short-circuits or persists state.
pub fn run_checks(root: &Path, record: &ProfileRecord) -> ValidationReport {
    let mut report = ValidationReport::default();
    required_fields(record, &mut report);
    recommended_fields(record, &mut report);
    grammar_checks(record, &mut report);
    section_counts(record, &mut report);
    skills_counts(record, &mut report);
    referenced_paths(root, record, &mut report);
    workflow_presence(root, &mut report);
    report
}

fn required_fields(record: &ProfileRecord, report: &mut ValidationReport) {
    let fields = [
        ("profile.name", record.profile.name.as_str()),
        ("contact.email", record.contact.email.as_str()),
        (
            "contact.githubUsername",
            record.contact.github_username.as_str(),
        ),
        ("siteConfig.siteTitle", record.site_config.site_title.as_str()),
    ];
    for (path, value) in fields {
        if is_blank(value) {
            report.error(path, format!("required field {} is missing or empty", path));
        } else {
            report.ok(path);
        }
    }
}

fn recommended_fields(record: &ProfileRecord, report: &mut ValidationReport) {
    let fields = [
        ("profile.title", record.profile.title.as_str()),
        ("profile.organization", record.profile.organization.as_str()),
        ("contact.location", record.contact.location.as_str()),
        ("contact.linkedin", record.contact.linkedin.as_str()),
        ("bio.introduction", record.bio.introduction.as_str()),
        ("bio.background", record.bio.background.as_str()),
    ];
    for (path, value) in fields {
        if is_blank(value) {
            report.warn(path, format!("optional field {} is not set", path));
        } else {
            report.ok(path);
        }
    }
    match record.site_config.domain.as_deref() {
        Some(d) if !is_blank(d) => report.ok("siteConfig.domain"),
        _ => report.warn(
            "siteConfig.domain",
            "no custom domain configured, the site will use the default github.io address",
        ),
    }
}

fn grammar_checks(record: &ProfileRecord, report: &mut ValidationReport) {
    let email = record.contact.email.as_str();
    if !is_blank(email) {
        if grammar::is_valid_email(email) {
            report.ok("contact.email format");
        } else {
            report.error(
                "contact.email format",
                format!("contact.email is not a valid email address: {}", email),
            );
        }
    }

    let login = record.contact.github_username.as_str();
    if !is_blank(login) {
        if grammar::is_valid_github_username(login) {
            report.ok("contact.githubUsername format");
        } else {
            report.error(
                "contact.githubUsername format",
                format!(
                    "contact.githubUsername is not a valid GitHub username: {}",
                    login
                ),
            );
        }
    }

    if let Some(domain) = record.site_config.domain.as_deref() {
        if !is_blank(domain) {
            if grammar::is_valid_domain(domain) {
                report.ok("siteConfig.domain format");
            } else {
                report.error(
                    "siteConfig.domain format",
                    format!("siteConfig.domain is not a valid DNS name: {}", domain),
                );
            }
        }
    }
}

fn section_counts(record: &ProfileRecord, report: &mut ValidationReport) {
    let sections: [(&str, &[Entry], bool); 4] = [
        ("publications", &record.publications, false),
        ("projects", &record.projects, false),
        ("education", &record.education, false),
        ("navigation", &record.navigation, true),
    ];
    for (name, entries, required) in sections {
        report.check(&format!("{} entries", name), &entries.len().to_string());
        if entries.is_empty() {
            if required {
                report.error(name, "navigation must contain at least one entry");
            } else {
                report.warn(name, format!("{} section is empty", name));
            }
        }
    }
}

fn skills_counts(record: &ProfileRecord, report: &mut ValidationReport) {
    report.check(
        "skills categories",
        &record.skills.len().to_string(),
    );
    for (category, entries) in &record.skills {
        report.check(
            &format!("skills.{}", category),
            &entries.len().to_string(),
        );
        if entries.is_empty() {
            report.warn(
                &format!("skills.{}", category),
                format!("skills category {} is empty", category),
            );
        }
    }
}

fn referenced_paths(root: &Path, record: &ProfileRecord, report: &mut ValidationReport) {
    let image = record.profile.profile_image.as_str();
    if is_blank(image) {
        report.warn("profile.profileImage", "profile.profileImage is not set");
    } else if root.join(image).exists() {
        report.ok("profile.profileImage file");
    } else {
        report.error(
            "profile.profileImage file",
            format!("profile image not found: {}", image),
        );
    }

    match record.profile.cv_path.as_deref() {
        None => report.warn("profile.cvPath", "profile.cvPath is not set"),
        Some(cv) if is_blank(cv) => report.warn("profile.cvPath", "profile.cvPath is not set"),
        Some(cv) => {
            if root.join(cv).exists() {
                report.ok("profile.cvPath file");
            } else {
                report.error("profile.cvPath file", format!("CV file not found: {}", cv));
            }
        }
    }

    let sections = [
        ("publications", &record.publications),
        ("projects", &record.projects),
        ("education", &record.education),
    ];
    for (section, entries) in sections {
        for entry in entries.iter() {
            for media in entry.media_paths() {
                let name = format!("{}.{} media", section, entry.label());
                if root.join(media).exists() {
                    report.ok(&name);
                } else {
                    report.warn(
                        &name,
                        format!("{} entry {} references missing file: {}", section, entry.label(), media),
                    );
                }
            }
        }
    }
}

fn workflow_presence(root: &Path, report: &mut ValidationReport) {
    if root.join(WORKFLOW_PATH).exists() {
        report.ok("deployment workflow");
    } else {
        report.error(
            "deployment workflow",
            format!("deployment workflow not found at {}", WORKFLOW_PATH),
        );
    }
}
