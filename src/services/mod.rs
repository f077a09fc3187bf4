//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `checks.rs` — validator check suite over the profile record.
//! - `grammar.rs` — email/username/domain format checks.
//! - `deploy.rs` — deploy phase runner over the typed clients.
//! - `git.rs` — version-control client (`git` CLI).
//! - `github.rs` — hosting-API client (`gh` CLI).
//! - `cname.rs` — custom-domain file reconciliation.
//! - `audit.rs` — best-effort audit log of mutating runs.
//! - `output.rs` — console output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod audit;
pub mod checks;
pub mod cname;
pub mod deploy;
pub mod git;
pub mod github;
pub mod grammar;
pub mod output;
