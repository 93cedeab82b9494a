//! Tag rendering.

use crate::attributes::Attributes;
use crate::id::{IdFormat, generate_id};

/// Renders HTML tags for one widget.
///
/// The renderer owns the widget's default attributes, which sit underneath
/// the attributes of every tag it writes, and the id format used to fill in
/// missing ids of named form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRenderer {
    defaults: Attributes,
    id_format: IdFormat,
    xhtml: bool,
}

impl Default for TagRenderer {
    fn default() -> Self {
        Self {
            defaults: Attributes::new(),
            id_format: IdFormat::default(),
            xhtml: true,
        }
    }
}

impl TagRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(mut self, defaults: Attributes) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_id_format(mut self, id_format: IdFormat) -> Self {
        self.id_format = id_format;
        self
    }

    /// Toggle XHTML output (`<input ... />` instead of `<input ...>`).
    pub fn with_xhtml(mut self, xhtml: bool) -> Self {
        self.xhtml = xhtml;
        self
    }

    pub fn defaults(&self) -> &Attributes {
        &self.defaults
    }

    pub fn defaults_mut(&mut self) -> &mut Attributes {
        &mut self.defaults
    }

    pub fn id_format(&self) -> &IdFormat {
        &self.id_format
    }

    pub fn is_xhtml(&self) -> bool {
        self.xhtml
    }

    pub fn generate_id(&self, name: &str, value: Option<&str>) -> Option<String> {
        generate_id(&self.id_format, name, value)
    }

    /// Render an empty tag such as `<input ... />`.
    pub fn render_tag(&self, tag: &str, attributes: &Attributes) -> String {
        if tag.is_empty() {
            return String::new();
        }

        let attributes = self.fix_form_id(attributes);
        let html = self.defaults.merge(&attributes).to_html();
        let close = if self.xhtml {
            " />".to_string()
        } else if tag.eq_ignore_ascii_case("input") {
            ">".to_string()
        } else {
            format!("></{tag}>")
        };

        format!("<{tag}{html}{close}")
    }

    /// Render a tag around `content`, which is written verbatim.
    pub fn render_content_tag(&self, tag: &str, content: &str, attributes: &Attributes) -> String {
        if tag.is_empty() {
            return String::new();
        }

        let attributes = self.fix_form_id(attributes);
        let html = self.defaults.merge(&attributes).to_html();
        format!("<{tag}{html}>{content}</{tag}>")
    }

    /// Named controls without an id get one derived from name and value.
    fn fix_form_id(&self, attributes: &Attributes) -> Attributes {
        let mut attributes = attributes.clone();
        if !attributes.contains("id")
            && let Some(name) = attributes.get("name")
        {
            let id = self.generate_id(name, attributes.get("value"));
            attributes.set_opt("id", id);
        }
        attributes
    }
}
