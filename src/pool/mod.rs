//! Section-scoped card-pool filter.
//!
//! The filter is the validator's target categories turned into a search
//! constraint. It is stateless per call: the caller tracks the active
//! `Section`, and `next_section`/`advance` tell it where to move.

pub mod constraint;
pub mod section;

pub use constraint::{eligible_for, PoolConstraint};
pub use section::{advance, advance_with, next_section, next_section_with, Section};
