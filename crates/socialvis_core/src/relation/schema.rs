//! Fixed relation catalog of the access-control model.
//!
//! Column roles:
//! - entity relations: `(atom)`
//! - membership predicates: `(subject, object, boolean)`
//! - unary attributes: `(subject, value)`

/// Name and arity of one relation in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationSchema {
    pub name: &'static str,
    pub arity: usize,
}

impl RelationSchema {
    const fn new(name: &'static str, arity: usize) -> Self {
        Self { name, arity }
    }
}

pub const USER: RelationSchema = RelationSchema::new("User", 1);
pub const POST: RelationSchema = RelationSchema::new("Post", 1);

pub const FRIENDS: RelationSchema = RelationSchema::new("friends", 3);
pub const BLOCKED: RelationSchema = RelationSchema::new("blocked", 3);
pub const MUTED: RelationSchema = RelationSchema::new("muted", 3);
pub const ALLOWED_VIEWERS: RelationSchema = RelationSchema::new("allowed_viewers", 3);
pub const EXCLUDED_VIEWERS: RelationSchema = RelationSchema::new("excluded_viewers", 3);

pub const MOMENTS_CLOSED: RelationSchema = RelationSchema::new("moments_closed", 2);
pub const LIMIT_RECENT_10: RelationSchema = RelationSchema::new("limit_recent_10", 2);
pub const STRANGER_SEE_RECENT: RelationSchema = RelationSchema::new("stranger_see_recent", 2);
pub const AUTHOR: RelationSchema = RelationSchema::new("author", 2);
pub const VISIBILITY: RelationSchema = RelationSchema::new("visibility", 2);
pub const TIMESTAMP: RelationSchema = RelationSchema::new("timestamp", 2);

/// Every relation the panel reads.
pub const PANEL_SCHEMA: &[RelationSchema] = &[
    USER,
    POST,
    FRIENDS,
    BLOCKED,
    MUTED,
    MOMENTS_CLOSED,
    LIMIT_RECENT_10,
    STRANGER_SEE_RECENT,
    AUTHOR,
    VISIBILITY,
    TIMESTAMP,
    ALLOWED_VIEWERS,
    EXCLUDED_VIEWERS,
];

/// Looks up a catalog entry by relation name.
pub fn schema_for(name: &str) -> Option<RelationSchema> {
    PANEL_SCHEMA.iter().copied().find(|schema| schema.name == name)
}
