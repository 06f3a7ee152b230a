//! Use-case layer for panel construction.
//!
//! # Responsibility
//! - Resolve relation tuples into per-entity attributes.
//! - Expose a source-agnostic entry point for building and rendering panels.

pub mod panel_service;
pub mod resolver;
