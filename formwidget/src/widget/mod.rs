//! The widget contract and its implementations.

mod checkbox_list;

use std::sync::atomic::{AtomicUsize, Ordering};

use htmltag::Attributes;

use crate::error::RenderError;

pub use checkbox_list::CheckboxList;

/// Unique identifier of a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(usize);

impl WidgetId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__widget_{}", self.0)
    }
}

/// A form widget as seen by the page that embeds it.
pub trait Widget {
    /// The value a widget is rendered with.
    type Value;

    /// Render the widget's markup for the field `name`.
    ///
    /// `attributes` are layered over the ones the widget computes itself.
    /// `errors` are the field's validation errors; widgets may ignore them.
    fn render(
        &self,
        name: &str,
        value: &Self::Value,
        attributes: &Attributes,
        errors: &[String],
    ) -> Result<String, RenderError>;

    /// Stylesheets to include in the page, as `(path, media)` pairs.
    fn stylesheets(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Scripts to include in the page, as `(path, path)` pairs.
    fn javascripts(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}
