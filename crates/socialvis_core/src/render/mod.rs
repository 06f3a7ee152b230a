//! Presentation sinks.
//!
//! A sink consumes a finished `PanelViewModel` and produces a visual
//! artifact. Sinks never read relations themselves.

pub mod html;

use crate::model::view::PanelViewModel;

pub use html::{HtmlPanelSink, PanelOptions};

/// Consumer of finished panel view models.
pub trait PresentationSink {
    type Output;

    fn present(&self, panel: &PanelViewModel) -> Self::Output;
}

/// Sink emitting the view model as pretty JSON for host applications.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPanelSink;

impl PresentationSink for JsonPanelSink {
    type Output = Result<String, serde_json::Error>;

    fn present(&self, panel: &PanelViewModel) -> Self::Output {
        serde_json::to_string_pretty(panel)
    }
}
