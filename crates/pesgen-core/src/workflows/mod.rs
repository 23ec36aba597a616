//! # Workflows Module
//!
//! High-level entry points that operate on a validated `ScanConfig`.
//!
//! - **Scan Planning** ([`plan`]) - Expands every declared scan into independent jobs,
//!   with per-order totals and warnings for scans that will be expensive to run.
//! - **Preflight Checks** ([`preflight`]) - Verifies that the calculator repository and
//!   the parameter file referenced by the configuration exist on disk.

pub mod plan;
pub mod preflight;
