//! Tuple accessor: the only place that touches upstream relations.
//!
//! # Invariants
//! - `fetch_tuples` is total; every `RelationError` becomes an empty result.
//! - Returned rows keep relation iteration order.
//! - Atom labels are never logged; only relation names and reason codes.

use super::{RelationError, RelationSchema, RelationSource, Row};
use log::{debug, warn};

/// Reads `schema.name` from `source`, rejecting rows whose width differs
/// from `schema.arity`.
///
/// # Errors
/// - `Missing` when the source has no relation of that name.
/// - `Evaluation` when the relation fails to produce tuples.
/// - `ArityMismatch` when any row has the wrong width.
pub fn try_fetch_tuples(
    source: &dyn RelationSource,
    schema: RelationSchema,
) -> Result<Vec<Row>, RelationError> {
    let relation = source
        .relation(schema.name)
        .ok_or_else(|| RelationError::Missing {
            relation: schema.name.to_string(),
        })?;

    let rows = relation.tuples()?;
    if let Some(bad) = rows.iter().find(|row| row.len() != schema.arity) {
        return Err(RelationError::ArityMismatch {
            relation: schema.name.to_string(),
            expected: schema.arity,
            found: bad.len(),
        });
    }
    Ok(rows)
}

/// Reads a relation, degrading any failure to an empty row set.
pub fn fetch_tuples(source: &dyn RelationSource, schema: RelationSchema) -> Vec<Row> {
    match try_fetch_tuples(source, schema) {
        Ok(rows) => rows,
        Err(err @ RelationError::Missing { .. }) => {
            debug!(
                "event=relation_unavailable module=relation status=degraded relation={} reason={}",
                schema.name,
                err.kind()
            );
            Vec::new()
        }
        Err(err) => {
            warn!(
                "event=relation_unavailable module=relation status=degraded relation={} reason={}",
                schema.name,
                err.kind()
            );
            Vec::new()
        }
    }
}
