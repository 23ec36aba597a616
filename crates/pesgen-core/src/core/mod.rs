//! # Core Module
//!
//! Stateless building blocks for describing potential-energy-surface scans.
//!
//! ## Architecture
//!
//! - **Scan Description** ([`scan`]) - Interaction orders, sampling ranges, per-order
//!   scan declarations and the independent scan jobs they expand into
//! - **File I/O** ([`io`]) - Exporting the sample grid of a scan plan
//!
//! Nothing in this module touches the parameter file or the external calculator;
//! type indices are carried through as opaque identifiers.

pub mod io;
pub mod scan;
