//! `maturity-report` — final report record assembly.

pub mod assemble;

pub use assemble::{MaturityReport, assemble};
