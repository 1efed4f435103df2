//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `seating.rs` — runs the layout engine and shapes its result into reports.
//! - `storage.rs` — team/person repository (in-memory and JSON file).
//! - `config.rs` — config file loading and CLI override merging.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod output;
pub mod seating;
pub mod storage;
