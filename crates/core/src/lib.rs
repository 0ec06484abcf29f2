//! Domain logic for the RPL student project showcase.
//!
//! Everything here is pure: filtering, ordering, pagination math, aggregate
//! statistics, tech-stack editing and the small view-state machines used by
//! the dashboard. The data layer (`galeri-db`) and the HTTP layer
//! (`galeri-api`) build on these without this crate knowing about either.

pub mod catalog;
pub mod error;
pub mod pagination;
pub mod stats;
pub mod tech_stack;
pub mod types;
pub mod view_state;
