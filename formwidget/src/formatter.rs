//! Formatting of rendered checkboxes into the final markup.

use htmltag::Attributes;

use crate::assets;
use crate::widget::CheckboxList;

/// A rendered checkbox (or nested group) handed to a formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedInput {
    /// The `<input>` tag, or the markup of a nested group.
    pub input: String,
    /// The `<label>` tag; empty for nested groups.
    pub label: String,
}

/// Turns the rendered inputs of one level into markup.
///
/// Implemented for any `Fn(&CheckboxList, &[RenderedInput]) -> String`, so a
/// closure can be passed wherever a formatter is expected.
pub trait ChoiceFormatter: Send + Sync {
    fn format(&self, widget: &CheckboxList, inputs: &[RenderedInput]) -> String;
}

impl<F> ChoiceFormatter for F
where
    F: Fn(&CheckboxList, &[RenderedInput]) -> String + Send + Sync,
{
    fn format(&self, widget: &CheckboxList, inputs: &[RenderedInput]) -> String {
        self(widget, inputs)
    }
}

/// The default formatter: a `<ul>` of `<li>` rows followed by the script
/// enabling the checkbox plugin on that list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFormatter;

impl ChoiceFormatter for ListFormatter {
    fn format(&self, widget: &CheckboxList, inputs: &[RenderedInput]) -> String {
        let options = widget.options();
        let tags = widget.tags();

        let rows: Vec<String> = inputs
            .iter()
            .map(|input| {
                let content = format!(
                    "{}{}{}",
                    input.input,
                    options.label_separator(),
                    input.label
                );
                tags.render_content_tag("li", &content, &Attributes::new())
            })
            .collect();

        let list = tags.render_content_tag(
            "ul",
            &rows.join(options.separator()),
            &Attributes::from([("class", options.class())]),
        );

        format!("{list}{}", assets::checkbox_script(options.class()))
    }
}
