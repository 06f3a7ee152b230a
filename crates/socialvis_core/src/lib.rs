//! Core projection logic for the social visibility access-control panel.
//! Turns evaluated relation snapshots into render-ready view models.

pub mod logging;
pub mod model;
pub mod relation;
pub mod render;
pub mod service;

pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
};
pub use model::label::{clean_label, clean_optional_label, is_true_label};
pub use model::view::{PanelViewModel, PostView, UserView, VisibilityClass};
pub use relation::{
    fetch_tuples, try_fetch_tuples, Relation, RelationError, RelationSchema, RelationSnapshot,
    RelationSource, Row, SnapshotError, SnapshotResult, TupleSource,
};
pub use render::{HtmlPanelSink, JsonPanelSink, PanelOptions, PresentationSink};
pub use service::panel_service::{build_panel, PanelService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
