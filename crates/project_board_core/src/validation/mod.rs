//! Declarative field validation.
//!
//! # Responsibility
//! - Check one raw field value against a set of optional constraints.
//!
//! # Invariants
//! - Validation is stateless and never produces messages; callers report.
//! - Absent constraints are skipped; present ones are ANDed.

pub mod validatable;
