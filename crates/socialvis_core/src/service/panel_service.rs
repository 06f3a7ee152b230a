//! View-model builder.
//!
//! # Responsibility
//! - Turn a relation set into ordered user and post view records.
//! - Hand finished view models to presentation sinks.
//!
//! # Invariants
//! - Each build reads every catalog relation at most once.
//! - Subject order follows the `User` / `Post` relation order.
//! - A build never fails; unreadable relations yield default attributes.

use crate::model::label::{clean_label, is_true_label, FALSE_LABEL};
use crate::model::view::{PanelViewModel, PostView, UserView, VisibilityClass};
use crate::relation::schema::{
    ALLOWED_VIEWERS, AUTHOR, BLOCKED, EXCLUDED_VIEWERS, FRIENDS, LIMIT_RECENT_10, MOMENTS_CLOSED,
    MUTED, POST, STRANGER_SEE_RECENT, TIMESTAMP, USER, VISIBILITY,
};
use crate::relation::{fetch_tuples, RelationSource, Row};
use crate::render::PresentationSink;
use crate::service::resolver::{entity_atoms, member_objects, unary_value};
use log::info;

/// Raw rows of every catalog relation, read once per build.
struct PanelTuples {
    users: Vec<Row>,
    posts: Vec<Row>,
    friends: Vec<Row>,
    blocked: Vec<Row>,
    muted: Vec<Row>,
    moments_closed: Vec<Row>,
    limit_recent_10: Vec<Row>,
    stranger_see_recent: Vec<Row>,
    author: Vec<Row>,
    visibility: Vec<Row>,
    timestamp: Vec<Row>,
    allowed_viewers: Vec<Row>,
    excluded_viewers: Vec<Row>,
}

impl PanelTuples {
    fn read(source: &dyn RelationSource) -> Self {
        Self {
            users: fetch_tuples(source, USER),
            posts: fetch_tuples(source, POST),
            friends: fetch_tuples(source, FRIENDS),
            blocked: fetch_tuples(source, BLOCKED),
            muted: fetch_tuples(source, MUTED),
            moments_closed: fetch_tuples(source, MOMENTS_CLOSED),
            limit_recent_10: fetch_tuples(source, LIMIT_RECENT_10),
            stranger_see_recent: fetch_tuples(source, STRANGER_SEE_RECENT),
            author: fetch_tuples(source, AUTHOR),
            visibility: fetch_tuples(source, VISIBILITY),
            timestamp: fetch_tuples(source, TIMESTAMP),
            allowed_viewers: fetch_tuples(source, ALLOWED_VIEWERS),
            excluded_viewers: fetch_tuples(source, EXCLUDED_VIEWERS),
        }
    }

    fn user_view(&self, atom: &str) -> UserView {
        UserView {
            label: clean_label(atom).to_string(),
            friends: clean_all(member_objects(&self.friends, atom)),
            blocked: clean_all(member_objects(&self.blocked, atom)),
            muted: clean_all(member_objects(&self.muted, atom)),
            moments_closed: flag(&self.moments_closed, atom),
            limit_recent_ten: flag(&self.limit_recent_10, atom),
            stranger_see_recent: flag(&self.stranger_see_recent, atom),
        }
    }

    fn post_view(&self, atom: &str) -> PostView {
        let visibility = clean_label(unary_value(&self.visibility, atom, "")).to_string();
        let class = VisibilityClass::classify(&visibility);

        let allowed_viewers = if class == VisibilityClass::SpecificFriends {
            clean_all(member_objects(&self.allowed_viewers, atom))
        } else {
            Vec::new()
        };
        let excluded_viewers = if class == VisibilityClass::ExcludeFriends {
            clean_all(member_objects(&self.excluded_viewers, atom))
        } else {
            Vec::new()
        };

        PostView {
            label: clean_label(atom).to_string(),
            author: clean_label(unary_value(&self.author, atom, "")).to_string(),
            timestamp: clean_label(unary_value(&self.timestamp, atom, "")).to_string(),
            visibility,
            allowed_viewers,
            excluded_viewers,
        }
    }
}

fn clean_all(labels: Vec<&str>) -> Vec<String> {
    labels
        .into_iter()
        .map(|label| clean_label(label).to_string())
        .collect()
}

fn flag(rows: &[Row], atom: &str) -> bool {
    is_true_label(unary_value(rows, atom, FALSE_LABEL))
}

/// Builds the panel view model from `source` in one pass.
pub fn build_panel(source: &dyn RelationSource) -> PanelViewModel {
    let tuples = PanelTuples::read(source);

    let users: Vec<UserView> = entity_atoms(&tuples.users)
        .into_iter()
        .map(|atom| tuples.user_view(atom))
        .collect();
    let posts: Vec<PostView> = entity_atoms(&tuples.posts)
        .into_iter()
        .map(|atom| tuples.post_view(atom))
        .collect();

    info!(
        "event=panel_build module=panel status=ok users={} posts={}",
        users.len(),
        posts.len()
    );

    PanelViewModel { users, posts }
}

/// Use-case wrapper binding a relation source to panel builds.
pub struct PanelService<S: RelationSource> {
    source: S,
}

impl<S: RelationSource> PanelService<S> {
    /// Creates a service over the provided relation source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Builds a fresh view model. Nothing is cached between calls.
    pub fn build(&self) -> PanelViewModel {
        build_panel(&self.source)
    }

    /// Builds a fresh view model and hands it to `sink`.
    pub fn render<K: PresentationSink>(&self, sink: &K) -> K::Output {
        sink.present(&self.build())
    }
}
