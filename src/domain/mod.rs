//! Shared data model layer (structs/enums only).
//!
//! ## Purpose
//! - Keep the person/team model and report structs in one place.
//! - Avoid cyclic imports between the engine, services and commands.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — people, teams, store document, report/output structs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and the store file format.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod models;
