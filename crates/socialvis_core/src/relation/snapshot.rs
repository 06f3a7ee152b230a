//! In-memory relation snapshot.
//!
//! # Responsibility
//! - Hold an already-evaluated relation set exported by the model engine.
//! - Load snapshots from JSON text or files.
//!
//! # Invariants
//! - A snapshot is read-only once built; reads never mutate it.
//! - Tuple order is preserved exactly as loaded.
//!
//! Wire shape:
//! `{"relations": {"User": [["Alice$0"]], "friends": [["Alice$0", "Bob$0", "True$0"]]}}`

use super::{RelationError, RelationSource, Row, TupleSource};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Snapshot loading error.
#[derive(Debug)]
pub enum SnapshotError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read snapshot `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid snapshot json: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Materialized tuples of one relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Relation {
    rows: Vec<Row>,
}

impl Relation {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Builds a relation from borrowed label slices.
    pub fn from_labels<R, L>(rows: R) -> Self
    where
        R: IntoIterator<Item = L>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TupleSource for Relation {
    fn tuples(&self) -> Result<Vec<Row>, RelationError> {
        Ok(self.rows.clone())
    }
}

/// Named set of materialized relations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationSnapshot {
    #[serde(default)]
    relations: BTreeMap<String, Relation>,
}

impl RelationSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a snapshot from JSON text.
    ///
    /// # Errors
    /// - Returns `SnapshotError::Json` when the text is not a valid snapshot.
    pub fn from_json_str(text: &str) -> SnapshotResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a snapshot file.
    ///
    /// # Errors
    /// - Returns `SnapshotError::Io` when the file cannot be read.
    /// - Returns `SnapshotError::Json` when the content is not a valid snapshot.
    pub fn from_json_path(path: impl AsRef<Path>) -> SnapshotResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Serializes the snapshot back to its JSON wire shape.
    pub fn to_json_string(&self) -> SnapshotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Adds or replaces one relation, builder style.
    pub fn with_relation(mut self, name: impl Into<String>, relation: Relation) -> Self {
        self.insert(name, relation);
        self
    }

    /// Adds or replaces one relation, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, relation: Relation) -> Option<Relation> {
        self.relations.insert(name.into(), relation)
    }

    pub fn get(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    /// Relation names in lexical order.
    pub fn relation_names(&self) -> impl Iterator<Item = &str> {
        self.relations.keys().map(String::as_str)
    }
}

impl RelationSource for RelationSnapshot {
    fn relation(&self, name: &str) -> Option<&dyn TupleSource> {
        self.relations
            .get(name)
            .map(|relation| relation as &dyn TupleSource)
    }
}
