//! # Engine Module
//!
//! The configuration core of pesgen: the validated scan configuration record and the
//! infrastructure the workflows share.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - The immutable `ScanConfig` record and its builder,
//!   which refuses to produce a record that breaks any scan invariant
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting for frontends
//! - **Error Handling** ([`error`]) - Engine-level error types shared by the workflows
//!
//! A `ScanConfig` is constructed once before a run, read by the workflows, and never
//! mutated afterwards.

pub mod config;
pub mod error;
pub mod progress;
