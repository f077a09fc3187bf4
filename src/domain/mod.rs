//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep report/output structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.

pub mod models;
