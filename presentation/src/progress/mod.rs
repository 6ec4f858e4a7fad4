//! Progress reporting during a generation run

pub mod reporter;
