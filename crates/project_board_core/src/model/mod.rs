//! Domain model for the project board.
//!
//! # Responsibility
//! - Define the project record shared by the store and every list view.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are never mutated or removed once stored.

pub mod project;
