//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `admin.rs` — team/person command trees.
//! - `runtime.rs` — layout and check.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `desks::services`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod runtime;

pub use admin::{handle_person_commands, handle_team_commands};
pub use runtime::handle_runtime_commands;
