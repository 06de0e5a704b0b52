//! # Interlace Targeting
//!
//! Applicability decisions: does one interceptor attach to one target?
//!
//! The checks run in a fixed sequence: property-accessor exclusion,
//! then member visibility, then the OR'd type/interface/marker-attribute
//! categories. A mismatch is a normal `false`, never an error.

mod applicability;

pub use applicability::applies_to;
