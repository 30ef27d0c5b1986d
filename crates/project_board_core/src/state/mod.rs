//! In-memory project store with change notification.
//!
//! # Responsibility
//! - Own every created project in insertion order.
//! - Fan out a full snapshot to registered listeners on each mutation.
//!
//! # Invariants
//! - Listeners fire synchronously, in registration order.
//! - The listener registry is append-only.

pub mod project_state;
