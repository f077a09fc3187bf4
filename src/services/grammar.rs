use regex::Regex;
use std::sync::OnceLock;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern")
    })
}

fn domain_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Two or more dot-separated labels, no leading/trailing hyphen per label.
    RE.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
        )
        .expect("domain pattern")
    })
}

pub fn is_valid_email(s: &str) -> bool {
    email_re().is_match(s)
}

/// GitHub username grammar: alphanumerics and hyphens, no leading, trailing,
/// or doubled hyphen, at most 39 characters.
pub fn is_valid_github_username(s: &str) -> bool {
    if s.is_empty() || s.len() > 39 {
        return false;
    }
    if s.starts_with('-') || s.ends_with('-') || s.contains("--") {
        return false;
    }
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

pub fn is_valid_domain(s: &str) -> bool {
    s.len() <= 253 && domain_re().is_match(s)
}
