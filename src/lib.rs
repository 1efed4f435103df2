//! Desk layout planning for teams where some people bring dogs and some
//! would rather not sit near one.
//!
//! The ordering itself lives in [`layout`]; [`services`] holds the local
//! team/person store, configuration and output helpers used by the `desks`
//! binary.

pub mod domain;
pub mod layout;
pub mod services;

pub use domain::models::{DogStatus, Person, TeamRef, UnsetPolicy};
pub use layout::{calculate_layout, Category, LayoutEngine, LayoutError};
