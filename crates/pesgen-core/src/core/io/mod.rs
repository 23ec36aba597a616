//! # I/O Module
//!
//! Writers for the artifacts pesgen hands to the external generator.
//!
//! - **Sample Grids** ([`samples`]) - One CSV row per distance visited by each scan job

pub mod samples;
