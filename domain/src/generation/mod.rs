//! Generation domain
//!
//! The three-stage chain (criteria → questions → solutions) and the
//! immutable results each stage produces.

pub mod entities;
pub mod value_objects;
