//! View records for users and posts.
//!
//! # Responsibility
//! - Hold the derived per-entity attributes consumed by presentation sinks.
//! - Classify post visibility labels into the known access-control kinds.
//!
//! # Invariants
//! - `allowed_viewers` is non-empty only for `SpecificFriends`-like posts.
//! - `excluded_viewers` is non-empty only for `ExcludeFriends`-like posts.
//! - List order follows relation tuple order; no re-sorting.

use serde::{Deserialize, Serialize};

/// Known post visibility kinds.
///
/// Classification is loose: a cleaned visibility label belongs to a kind when
/// it contains the kind's name, so variants such as `SpecificFriendsV2` still
/// classify as `SpecificFriends`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityClass {
    /// Visible to everyone.
    Public,
    /// Visible only to an explicit allow-list.
    SpecificFriends,
    /// Visible to friends except an explicit deny-list.
    ExcludeFriends,
    /// Label matched none of the known kinds (including an empty label).
    Unrecognized,
}

impl VisibilityClass {
    /// Stable enum name as it appears in the source model.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::SpecificFriends => "SpecificFriends",
            Self::ExcludeFriends => "ExcludeFriends",
            Self::Unrecognized => "Unrecognized",
        }
    }

    /// Classifies an already-cleaned visibility label.
    pub fn classify(clean_visibility: &str) -> Self {
        if clean_visibility.is_empty() {
            return Self::Unrecognized;
        }
        [Self::SpecificFriends, Self::ExcludeFriends, Self::Public]
            .into_iter()
            .find(|class| clean_visibility.contains(class.as_str()))
            .unwrap_or(Self::Unrecognized)
    }
}

/// One user card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    /// Canonical user label.
    pub label: String,
    pub friends: Vec<String>,
    pub blocked: Vec<String>,
    pub muted: Vec<String>,
    /// Whether the user has closed their moments feed.
    pub moments_closed: bool,
    /// Whether only the ten most recent posts are visible.
    pub limit_recent_ten: bool,
    /// Whether strangers may see recent posts.
    pub stranger_see_recent: bool,
}

/// One post card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    /// Canonical post label.
    pub label: String,
    /// Canonical author label, empty when the post has no author tuple.
    pub author: String,
    /// Canonical timestamp label, empty when absent.
    pub timestamp: String,
    /// Cleaned visibility label exactly as recorded upstream.
    pub visibility: String,
    pub allowed_viewers: Vec<String>,
    pub excluded_viewers: Vec<String>,
}

impl PostView {
    /// Visibility kind derived from the cleaned label.
    pub fn visibility_class(&self) -> VisibilityClass {
        VisibilityClass::classify(&self.visibility)
    }
}

/// Complete panel snapshot handed to a presentation sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelViewModel {
    pub users: Vec<UserView>,
    pub posts: Vec<PostView>,
}

impl PanelViewModel {
    /// Looks up a user card by canonical label.
    pub fn user(&self, label: &str) -> Option<&UserView> {
        self.users.iter().find(|user| user.label == label)
    }

    /// Looks up a post card by canonical label.
    pub fn post(&self, label: &str) -> Option<&PostView> {
        self.posts.iter().find(|post| post.label == label)
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{PostView, VisibilityClass};

    fn post_with_visibility(visibility: &str) -> PostView {
        PostView {
            label: "P1".to_string(),
            author: String::new(),
            timestamp: String::new(),
            visibility: visibility.to_string(),
            allowed_viewers: Vec::new(),
            excluded_viewers: Vec::new(),
        }
    }

    #[test]
    fn classifies_exact_enum_names() {
        assert_eq!(VisibilityClass::classify("Public"), VisibilityClass::Public);
        assert_eq!(
            VisibilityClass::classify("SpecificFriends"),
            VisibilityClass::SpecificFriends
        );
        assert_eq!(
            VisibilityClass::classify("ExcludeFriends"),
            VisibilityClass::ExcludeFriends
        );
    }

    #[test]
    fn classification_uses_substring_containment() {
        assert_eq!(
            VisibilityClass::classify("SpecificFriendsOnly"),
            VisibilityClass::SpecificFriends
        );
        assert_eq!(
            VisibilityClass::classify("PublicRecent"),
            VisibilityClass::Public
        );
    }

    #[test]
    fn unknown_or_empty_labels_are_unrecognized() {
        assert_eq!(VisibilityClass::classify(""), VisibilityClass::Unrecognized);
        assert_eq!(
            VisibilityClass::classify("Private"),
            VisibilityClass::Unrecognized
        );
    }

    #[test]
    fn post_view_exposes_visibility_class() {
        let post = post_with_visibility("ExcludeFriends");
        assert_eq!(post.visibility_class(), VisibilityClass::ExcludeFriends);
    }

    #[test]
    fn serialization_uses_camel_case_wire_names() {
        let post = post_with_visibility("Public");
        let json = serde_json::to_value(&post).expect("post should serialize");
        assert_eq!(json["allowedViewers"], serde_json::json!([]));
        assert_eq!(json["excludedViewers"], serde_json::json!([]));
        assert_eq!(json["visibility"], "Public");
    }
}
