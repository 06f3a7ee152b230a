//! Relation access boundary.
//!
//! # Responsibility
//! - Define the capability every upstream relation representation exposes.
//! - Contain every relation failure at one boundary (`accessor`).
//!
//! # Invariants
//! - `RelationError` never escapes `accessor::fetch_tuples`.
//! - Relation names and arities come from `schema`, never from data.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod accessor;
pub mod schema;
pub mod snapshot;

pub use accessor::{fetch_tuples, try_fetch_tuples};
pub use schema::RelationSchema;
pub use snapshot::{Relation, RelationSnapshot, SnapshotError, SnapshotResult};

/// One tuple: an ordered sequence of raw atom labels.
pub type Row = Vec<String>;

/// A relation could not be read (missing, malformed, or evaluation failed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationError {
    Missing {
        relation: String,
    },
    ArityMismatch {
        relation: String,
        expected: usize,
        found: usize,
    },
    Evaluation {
        relation: String,
        message: String,
    },
}

impl RelationError {
    /// Builds an evaluation failure for `relation`.
    pub fn evaluation(relation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Evaluation {
            relation: relation.into(),
            message: message.into(),
        }
    }

    /// Stable short reason code for log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing",
            Self::ArityMismatch { .. } => "arity_mismatch",
            Self::Evaluation { .. } => "evaluation_failed",
        }
    }
}

impl Display for RelationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing { relation } => write!(f, "relation `{relation}` is not present"),
            Self::ArityMismatch {
                relation,
                expected,
                found,
            } => write!(
                f,
                "relation `{relation}` expected arity {expected}, found a tuple of width {found}"
            ),
            Self::Evaluation { relation, message } => {
                write!(f, "relation `{relation}` failed to evaluate: {message}")
            }
        }
    }
}

impl Error for RelationError {}

/// Capability of anything that can yield ordered rows of atom labels.
///
/// Implementations may fail; callers go through `accessor::fetch_tuples`,
/// which absorbs the failure.
pub trait TupleSource {
    fn tuples(&self) -> Result<Vec<Row>, RelationError>;
}

/// Named lookup over an already-materialized set of relations.
pub trait RelationSource {
    fn relation(&self, name: &str) -> Option<&dyn TupleSource>;
}
