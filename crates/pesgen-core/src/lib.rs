//! # pesgen Core Library
//!
//! Validated scan configuration and scan planning for generating ChIMES
//! potential-energy-surface (PES) scans.
//!
//! A PES scan sweeps the characteristic distance of one pair, triplet or
//! quadruplet interaction type from a start value to a stop value in fixed
//! increments. This library turns the user's declaration of those sweeps into
//! a checked, immutable configuration record and expands it into independent
//! scan jobs for the external generator.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless domain types (`InteractionOrder`,
//!   `ScanRange`, `ScanSpec`, `ScanJob`) and I/O utilities for exporting sample grids.
//!
//! - **[`engine`]: The Configuration Core.** The validated `ScanConfig` record and its
//!   builder, engine-level errors, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Complete procedures built on top of the
//!   other two layers: expanding a configuration into a `ScanPlan` and checking the
//!   referenced paths before a run.

pub mod core;
pub mod engine;
pub mod workflows;
