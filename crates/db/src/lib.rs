//! In-memory data layer for the showcase.
//!
//! Each view owns a [`Store`] seeded from the hardcoded mock data in
//! [`seed`]. Nothing is persisted; a restart resets both stores.

pub mod models;
pub mod repositories;
pub mod seed;
mod store;

pub use store::Store;
