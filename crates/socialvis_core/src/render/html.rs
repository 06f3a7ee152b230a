//! HTML card panel.
//!
//! # Responsibility
//! - Render user and post cards for a panel view model.
//!
//! # Invariants
//! - Every atom-derived string is HTML-escaped before emission.
//! - Allowed viewers appear only on `SpecificFriends` posts; excluded viewers
//!   only on `ExcludeFriends` posts.

use super::PresentationSink;
use crate::model::view::{PanelViewModel, PostView, UserView, VisibilityClass};

const DEFAULT_TITLE: &str = "Social Visibility Access Control Panel";
const EMPTY_LIST_HTML: &str = r#"<span style="color:#999">None</span>"#;

const USER_CARD_STYLE: &str = "border: 1px solid #B3D4FF; border-radius: 8px; padding: 15px; \
     width: 220px; background: #F0F8FF; box-shadow: 0 2px 4px rgba(0,0,0,0.1);";
const POST_CARD_STYLE: &str = "border: 1px solid #A2F3D6; border-radius: 8px; padding: 15px; \
     width: 220px; background: #E6F4EA; box-shadow: 0 2px 4px rgba(0,0,0,0.1);";

/// Rendering options for `HtmlPanelSink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelOptions {
    /// Heading shown above both sections.
    pub title: String,
    /// Render blocked/muted rows on user cards. Friends are always shown.
    pub show_block_and_mute: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            show_block_and_mute: true,
        }
    }
}

/// Sink producing a self-contained HTML fragment.
#[derive(Debug, Clone, Default)]
pub struct HtmlPanelSink {
    options: PanelOptions,
}

impl HtmlPanelSink {
    pub fn new(options: PanelOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    fn user_card(&self, user: &UserView) -> String {
        let closed_color = if user.moments_closed { "red" } else { "green" };
        let mut rows = format!(
            "<div><b>Friends:</b> {}</div>",
            list_html(&user.friends)
        );
        if self.options.show_block_and_mute {
            rows.push_str(&format!(
                "<div><b>Blocked:</b> {}</div><div><b>Muted:</b> {}</div>",
                list_html(&user.blocked),
                list_html(&user.muted)
            ));
        }
        rows.push_str(r#"<hr style="border: 0; border-top: 1px solid #ccc; margin: 8px 0;">"#);
        rows.push_str(&format!(
            r#"<div><b>Moments Closed:</b> <span style="color: {closed_color}">{}</span></div>"#,
            bool_label(user.moments_closed)
        ));
        rows.push_str(&format!(
            "<div><b>Limit Recent 10:</b> {}</div><div><b>Stranger Can See:</b> {}</div>",
            bool_label(user.limit_recent_ten),
            bool_label(user.stranger_see_recent)
        ));

        format!(
            r#"<div style="{USER_CARD_STYLE}"><h4 style="margin: 0 0 10px 0; color: #0056b3; font-size: 18px;">👤 {}</h4><div style="font-size: 13px; line-height: 1.6;">{rows}</div></div>"#,
            escape_html(&user.label)
        )
    }

    fn post_card(&self, post: &PostView) -> String {
        let mut rows = format!(
            "<div><b>Author:</b> 👤 {}</div><div><b>Time:</b> ⏱️ {}</div><div><b>Visibility:</b> 🔒 {}</div>",
            escape_html(&post.author),
            escape_html(&post.timestamp),
            escape_html(&post.visibility)
        );
        match post.visibility_class() {
            VisibilityClass::SpecificFriends => rows.push_str(&format!(
                "<div><b>Allowed:</b> {}</div>",
                list_html(&post.allowed_viewers)
            )),
            VisibilityClass::ExcludeFriends => rows.push_str(&format!(
                "<div><b>Excluded:</b> {}</div>",
                list_html(&post.excluded_viewers)
            )),
            VisibilityClass::Public | VisibilityClass::Unrecognized => {}
        }

        format!(
            r#"<div style="{POST_CARD_STYLE}"><h4 style="margin: 0 0 10px 0; color: #28a745; font-size: 16px;">📝 {}</h4><div style="font-size: 13px; line-height: 1.6;">{rows}</div></div>"#,
            escape_html(&post.label)
        )
    }
}

impl PresentationSink for HtmlPanelSink {
    type Output = String;

    fn present(&self, panel: &PanelViewModel) -> String {
        let mut html = format!(
            r#"<h2 style="color: #333;">{}</h2>"#,
            escape_html(&self.options.title)
        );

        html.push_str(r#"<h3 style="color: #4A90E2; border-bottom: 2px solid #4A90E2; padding-bottom: 5px;">Users &amp; Settings</h3>"#);
        html.push_str(
            r#"<div style="display: flex; gap: 15px; flex-wrap: wrap; margin-bottom: 30px;">"#,
        );
        for user in &panel.users {
            html.push_str(&self.user_card(user));
        }
        html.push_str("</div>");

        html.push_str(r#"<h3 style="color: #50E3C2; border-bottom: 2px solid #50E3C2; padding-bottom: 5px;">Posts</h3>"#);
        html.push_str(r#"<div style="display: flex; gap: 15px; flex-wrap: wrap;">"#);
        for post in &panel.posts {
            html.push_str(&self.post_card(post));
        }
        html.push_str("</div>");

        html
    }
}

fn list_html(labels: &[String]) -> String {
    if labels.is_empty() {
        return EMPTY_LIST_HTML.to_string();
    }
    labels
        .iter()
        .map(|label| escape_html(label))
        .collect::<Vec<_>>()
        .join(", ")
}

fn bool_label(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
