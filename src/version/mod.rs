//! Version checking against a remote version file
//!
//! Every comparison runs the same pipeline:
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Remote    │────▶│   Lookup    │────▶│   Compare   │
//! │  (fetch)    │     │ (INI value) │     │ (normalize) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: The checker itself plus the diagnostics seam
//! - [`remote`]: HTTP access to the version file
//! - [`normalize`]: Separator-stripping numeric normalization
//! - [`tier`]: The fixed release tier ordering
//! - [`outcome`]: Closed result classification (codes 0–7)
//! - [`error`]: Error types for fetch operations

pub mod checker;
pub mod error;
pub mod normalize;
pub mod outcome;
pub mod remote;
pub mod tier;
