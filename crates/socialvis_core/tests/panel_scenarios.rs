use socialvis_core::{
    build_panel, HtmlPanelSink, PanelService, PresentationSink, Relation, RelationError,
    RelationSnapshot, RelationSource, Row, TupleSource, VisibilityClass,
};
use std::collections::HashMap;

struct ThrowingRelation;

impl TupleSource for ThrowingRelation {
    fn tuples(&self) -> Result<Vec<Row>, RelationError> {
        Err(RelationError::evaluation("friends", "instance not evaluated"))
    }
}

/// Relation set where some relations fail to evaluate.
struct PartiallyBroken {
    healthy: RelationSnapshot,
    broken: HashMap<&'static str, ThrowingRelation>,
}

impl RelationSource for PartiallyBroken {
    fn relation(&self, name: &str) -> Option<&dyn TupleSource> {
        if let Some(relation) = self.broken.get(name) {
            return Some(relation);
        }
        self.healthy.relation(name)
    }
}

#[test]
fn scenario_a_friendship_requires_true_tuple() {
    let snapshot = RelationSnapshot::new()
        .with_relation("User", Relation::from_labels([["Alice$0"], ["Bob$0"]]))
        .with_relation(
            "friends",
            Relation::from_labels([["Alice$0", "Bob$0", "True$0"]]),
        )
        .with_relation("blocked", Relation::default());

    let panel = build_panel(&snapshot);

    let labels: Vec<_> = panel.users.iter().map(|user| user.label.as_str()).collect();
    assert_eq!(labels, vec!["Alice", "Bob"]);

    let alice = panel.user("Alice").unwrap();
    let bob = panel.user("Bob").unwrap();
    assert_eq!(alice.friends, vec!["Bob".to_string()]);
    assert!(bob.friends.is_empty());
    assert!(alice.blocked.is_empty());
    assert!(bob.blocked.is_empty());
}

#[test]
fn scenario_b_specific_friends_lists_allowed_viewers() {
    let snapshot = RelationSnapshot::new()
        .with_relation("Post", Relation::from_labels([["P1$0"]]))
        .with_relation(
            "visibility",
            Relation::from_labels([["P1$0", "SpecificFriends$0"]]),
        )
        .with_relation(
            "allowed_viewers",
            Relation::from_labels([["P1$0", "Bob$0", "True$0"]]),
        );

    let panel = build_panel(&snapshot);
    let post = panel.post("P1").unwrap();

    assert_eq!(post.visibility, "SpecificFriends");
    assert_eq!(post.visibility_class(), VisibilityClass::SpecificFriends);
    assert_eq!(post.allowed_viewers, vec!["Bob".to_string()]);
    assert!(post.excluded_viewers.is_empty());
}

#[test]
fn scenario_c_public_post_omits_allowed_viewers() {
    let snapshot = RelationSnapshot::new()
        .with_relation("Post", Relation::from_labels([["P2$0"]]))
        .with_relation("visibility", Relation::from_labels([["P2$0", "Public$0"]]));

    let panel = build_panel(&snapshot);
    let post = panel.post("P2").unwrap();
    assert!(post.allowed_viewers.is_empty());

    let html = HtmlPanelSink::default().present(&panel);
    assert!(html.contains("🔒 Public"));
    assert!(!html.contains("Allowed:"));
}

#[test]
fn scenario_d_conflicting_unary_tuples_resolve_to_first() {
    let snapshot = RelationSnapshot::new()
        .with_relation("User", Relation::from_labels([["Alice$0"]]))
        .with_relation(
            "moments_closed",
            Relation::from_labels([["Alice$0", "True$0"], ["Alice$0", "False$0"]]),
        );

    let service = PanelService::new(snapshot);
    let first = service.build();
    assert!(first.user("Alice").unwrap().moments_closed);

    for _ in 0..5 {
        assert_eq!(service.build(), first);
    }
}

#[test]
fn exclude_friends_lists_excluded_viewers_only() {
    let snapshot = RelationSnapshot::new()
        .with_relation("Post", Relation::from_labels([["P3$0"]]))
        .with_relation(
            "visibility",
            Relation::from_labels([["P3$0", "ExcludeFriends$0"]]),
        )
        .with_relation(
            "allowed_viewers",
            Relation::from_labels([["P3$0", "Bob$0", "True$0"]]),
        )
        .with_relation(
            "excluded_viewers",
            Relation::from_labels([["P3$0", "Carol$0", "True$0"], ["P3$0", "Dan$0", "False$0"]]),
        );

    let post = build_panel(&snapshot).post("P3").cloned().unwrap();
    assert!(post.allowed_viewers.is_empty());
    assert_eq!(post.excluded_viewers, vec!["Carol".to_string()]);
}

#[test]
fn viewer_tuples_for_unmatched_visibility_are_ignored() {
    let snapshot = RelationSnapshot::new()
        .with_relation("Post", Relation::from_labels([["P4$0"]]))
        .with_relation("visibility", Relation::from_labels([["P4$0", "Private$0"]]))
        .with_relation(
            "allowed_viewers",
            Relation::from_labels([["P4$0", "Bob$0", "True$0"]]),
        )
        .with_relation(
            "excluded_viewers",
            Relation::from_labels([["P4$0", "Carol$0", "True$0"]]),
        );

    let panel = build_panel(&snapshot);
    let post = panel.post("P4").unwrap();
    assert_eq!(post.visibility_class(), VisibilityClass::Unrecognized);
    assert!(post.allowed_viewers.is_empty());
    assert!(post.excluded_viewers.is_empty());

    let html = HtmlPanelSink::default().present(&panel);
    assert!(!html.contains("Allowed:"));
    assert!(!html.contains("Excluded:"));
}

#[test]
fn user_card_collects_all_derived_attributes() {
    let snapshot = RelationSnapshot::new()
        .with_relation("User", Relation::from_labels([["Alice$0"], ["Bob$0"], ["Carol$0"]]))
        .with_relation(
            "friends",
            Relation::from_labels([
                ["Alice$0", "Bob$0", "True$0"],
                ["Alice$0", "Carol$0", "True$0"],
            ]),
        )
        .with_relation(
            "blocked",
            Relation::from_labels([["Bob$0", "Carol$0", "True$0"]]),
        )
        .with_relation(
            "muted",
            Relation::from_labels([["Carol$0", "Alice$0", "True$0"]]),
        )
        .with_relation(
            "limit_recent_10",
            Relation::from_labels([["Alice$0", "True$0"]]),
        )
        .with_relation(
            "stranger_see_recent",
            Relation::from_labels([["Bob$0", "True$0"], ["Alice$0", "False$0"]]),
        );

    let panel = build_panel(&snapshot);
    let alice = panel.user("Alice").unwrap();
    assert_eq!(alice.friends, vec!["Bob".to_string(), "Carol".to_string()]);
    assert!(alice.limit_recent_ten);
    assert!(!alice.stranger_see_recent);

    let bob = panel.user("Bob").unwrap();
    assert_eq!(bob.blocked, vec!["Carol".to_string()]);
    assert!(bob.stranger_see_recent);

    let carol = panel.user("Carol").unwrap();
    assert_eq!(carol.muted, vec!["Alice".to_string()]);
}

#[test]
fn failing_and_malformed_relations_degrade_to_defaults() {
    let healthy = RelationSnapshot::new()
        .with_relation("User", Relation::from_labels([["Alice$0"], ["Bob$0"]]))
        .with_relation("Post", Relation::from_labels([["P1$0"]]))
        .with_relation(
            "author",
            Relation::new(vec![vec!["P1$0".to_string(), "Alice$0".to_string(), "x".to_string()]]),
        )
        .with_relation("timestamp", Relation::from_labels([["P1$0", "7"]]));
    let source = PartiallyBroken {
        healthy,
        broken: HashMap::from([("friends", ThrowingRelation)]),
    };

    let panel = build_panel(&source);

    assert_eq!(panel.users.len(), 2);
    assert!(panel.users.iter().all(|user| user.friends.is_empty()));
    let post = panel.post("P1").unwrap();
    assert_eq!(post.author, "");
    assert_eq!(post.timestamp, "7");
}

#[test]
fn post_fields_are_cleaned() {
    let snapshot = RelationSnapshot::new()
        .with_relation("Post", Relation::from_labels([["P1$0"]]))
        .with_relation("author", Relation::from_labels([["P1$0", "Alice$0"]]))
        .with_relation("timestamp", Relation::from_labels([["P1$0", "Time$2"]]));

    let panel = build_panel(&snapshot);
    let post = panel.post("P1").unwrap();
    assert_eq!(post.label, "P1");
    assert_eq!(post.author, "Alice");
    assert_eq!(post.timestamp, "Time");
}
