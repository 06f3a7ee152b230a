//! Render-ready domain model for the access-control panel.
//!
//! # Responsibility
//! - Define the canonical view records built from relation snapshots.
//! - Own the atom-label normalization rule shared by every projection.
//!
//! # Invariants
//! - View records carry canonical labels only (no `$N` suffixes).
//! - Records are immutable snapshots rebuilt on every render.

pub mod label;
pub mod view;
