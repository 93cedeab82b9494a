//! Checkbox list widget - a list of checkboxes, optionally split in groups.

use htmltag::{Attributes, TagRenderer, escape_once};

use crate::assets;
use crate::choices::{ChoiceEntry, ChoiceKey, ChoiceSet};
use crate::error::RenderError;
use crate::formatter::RenderedInput;
use crate::options::{CheckboxListOptions, GROUP_PLACEHOLDER, OPTIONS_PLACEHOLDER};
use crate::selection::SelectedValue;

use super::{Widget, WidgetId};

/// A list of checkboxes posting their values as an array.
///
/// Choices may be flat or grouped. For grouped choices every group goes
/// through the `template` option, `%group%` being the group name and
/// `%options%` the group's formatted checkboxes.
///
/// # Example
///
/// ```
/// use formwidget::prelude::*;
///
/// let options = CheckboxListOptions::new(ChoiceSet::from([(1, "Yes"), (0, "No")]));
/// let widget = CheckboxList::new(options);
///
/// let html = widget
///     .render("answer", &SelectedValue::from("1"), &Attributes::new(), &[])
///     .unwrap();
/// assert!(html.starts_with(r#"<ul class="checkbox_list"><li><input name="answer[]""#));
/// ```
#[derive(Debug)]
pub struct CheckboxList {
    id: WidgetId,
    options: CheckboxListOptions,
    tags: TagRenderer,
}

impl CheckboxList {
    pub fn new(options: CheckboxListOptions) -> Self {
        Self::with_attributes(options, Attributes::new())
    }

    /// Create a widget whose tags all carry `attributes` by default.
    pub fn with_attributes(mut options: CheckboxListOptions, attributes: Attributes) -> Self {
        let id = WidgetId::new();
        if let Some(loader) = options.choices_mut().loader_mut() {
            loader.bind(id);
        }

        let tags = TagRenderer::new()
            .with_defaults(attributes)
            .with_id_format(options.id_format().clone())
            .with_xhtml(options.is_xhtml());

        Self { id, options, tags }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn options(&self) -> &CheckboxListOptions {
        &self.options
    }

    /// The tag renderer, carrying the widget's default attributes.
    pub fn tags(&self) -> &TagRenderer {
        &self.tags
    }

    pub fn attributes(&self) -> &Attributes {
        self.tags.defaults()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.tags.defaults().get(name)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.tags.defaults_mut().set(name, value);
    }

    /// Format one level of choices, recursing into nested groups, and hand
    /// the result to the configured formatter.
    fn format_choices(
        &self,
        name: &str,
        value: &SelectedValue,
        choices: &ChoiceSet,
        attributes: &Attributes,
    ) -> String {
        let inputs: Vec<RenderedInput> = choices
            .iter()
            .map(|(key, entry)| match entry {
                ChoiceEntry::Group(nested) => RenderedInput {
                    input: self.expand_template(
                        key,
                        &self.format_choices(name, value, nested, attributes),
                    ),
                    label: String::new(),
                },
                ChoiceEntry::Leaf(label) => {
                    self.render_input(name, value, key, label, attributes)
                }
            })
            .collect();

        self.options.formatter().format(self, &inputs)
    }

    fn render_input(
        &self,
        name: &str,
        value: &SelectedValue,
        key: &ChoiceKey,
        label: &str,
        attributes: &Attributes,
    ) -> RenderedInput {
        let escaped = escape_once(key.as_str());
        let id = self.tags.generate_id(name, Some(&escaped));

        let mut base = Attributes::new();
        base.set("name", name)
            .set("type", "checkbox")
            .set("value", escaped)
            .set_opt("id", id.clone());
        if value.contains(key) {
            base.set("checked", "checked");
        }

        let input = self.tags.render_tag("input", &base.merge(attributes));
        log::trace!("rendered checkbox {key} for '{name}'");

        let mut label_attributes = Attributes::new();
        label_attributes.set_opt("for", id);

        RenderedInput {
            input,
            label: self.tags.render_content_tag("label", label, &label_attributes),
        }
    }

    fn expand_template(&self, group: &ChoiceKey, options: &str) -> String {
        expand_template(self.options.template(), group.as_str(), options)
    }
}

impl Widget for CheckboxList {
    type Value = SelectedValue;

    fn render(
        &self,
        name: &str,
        value: &SelectedValue,
        attributes: &Attributes,
        _errors: &[String],
    ) -> Result<String, RenderError> {
        let name = if name.ends_with("[]") {
            name.to_string()
        } else {
            format!("{name}[]")
        };

        let choices = self.options.choices().resolve(self)?;
        let grouped = choices.is_grouped();
        log::debug!(
            "Rendering {} as '{}' ({} choices, grouped: {})",
            self.id,
            name,
            choices.len(),
            grouped
        );

        if !grouped {
            return Ok(self.format_choices(&name, value, &choices, attributes));
        }

        let empty = ChoiceSet::new();
        let parts: Vec<String> = choices
            .iter()
            .map(|(key, entry)| {
                let group = match entry {
                    ChoiceEntry::Group(group) => group,
                    ChoiceEntry::Leaf(label) => {
                        log::warn!(
                            "Choice {key} ('{label}') is not a group but sits among groups, \
                             rendering it empty"
                        );
                        &empty
                    }
                };
                self.expand_template(key, &self.format_choices(&name, value, group, attributes))
            })
            .collect();

        Ok(parts.join("\n"))
    }

    fn stylesheets(&self) -> Vec<(String, String)> {
        vec![(assets::stylesheet_path(self.options.theme()), "all".to_string())]
    }

    fn javascripts(&self) -> Vec<(String, String)> {
        let path = assets::javascript_path();
        vec![(path.clone(), path)]
    }
}

impl Clone for CheckboxList {
    /// The copy gets its own id, and a choice loader bound to the original
    /// is rebound to the copy.
    fn clone(&self) -> Self {
        let id = WidgetId::new();
        let mut options = self.options.clone();
        if let Some(loader) = options.choices_mut().loader_mut()
            && loader.retarget(self.id, id)
        {
            log::debug!("Retargeted choice loader from {} to {}", self.id, id);
        }

        Self {
            id,
            options,
            tags: self.tags.clone(),
        }
    }
}

/// Substitute both placeholders in one pass; inserted text is not scanned
/// again.
fn expand_template(template: &str, group: &str, options: &str) -> String {
    let mut out = String::with_capacity(template.len() + group.len() + options.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix(GROUP_PLACEHOLDER) {
            out.push_str(group);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(OPTIONS_PLACEHOLDER) {
            out.push_str(options);
            rest = after;
        } else {
            out.push('%');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_template() {
        assert_eq!(expand_template("%group% %options%", "fruit", "<ul/>"), "fruit <ul/>");
        assert_eq!(
            expand_template("<h3>%group%</h3>%options%%group%", "a", "b"),
            "<h3>a</h3>ba"
        );
    }

    #[test]
    fn test_expand_template_does_not_rescan() {
        assert_eq!(
            expand_template("%group%|%options%", "%options%", "100%"),
            "%options%|100%"
        );
    }

    #[test]
    fn test_expand_template_keeps_stray_percent() {
        assert_eq!(expand_template("50% %group%", "x", ""), "50% x");
    }
}
