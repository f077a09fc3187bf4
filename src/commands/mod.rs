//! Command handler layer.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output stable.

pub mod deploy;
pub mod validate;
