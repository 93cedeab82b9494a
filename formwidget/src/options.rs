//! Checkbox list configuration.

use std::collections::BTreeMap;
use std::sync::Arc;

use htmltag::IdFormat;
use serde::Deserialize;

use crate::choices::{ChoiceSet, ChoiceSource};
use crate::error::ConfigError;
use crate::formatter::{ChoiceFormatter, ListFormatter};

pub const DEFAULT_CLASS: &str = "checkbox_list";
pub const DEFAULT_LABEL_SEPARATOR: &str = "&nbsp;";
pub const DEFAULT_SEPARATOR: &str = "\n";
pub const DEFAULT_TEMPLATE: &str = "%group% %options%";
pub const DEFAULT_THEME: &str = "default";

/// Placeholder for the group name in the template.
pub const GROUP_PLACEHOLDER: &str = "%group%";
/// Placeholder for the group's formatted options in the template.
pub const OPTIONS_PLACEHOLDER: &str = "%options%";

/// Options of a [`CheckboxList`](crate::CheckboxList).
///
/// Built once through [`CheckboxListOptions::builder`] or
/// [`CheckboxListOptions::from_json`] and read-only afterwards.
#[derive(Clone)]
pub struct CheckboxListOptions {
    choices: ChoiceSource,
    class: String,
    label_separator: String,
    separator: String,
    formatter: Arc<dyn ChoiceFormatter>,
    template: String,
    theme: String,
    id_format: IdFormat,
    xhtml: bool,
}

impl CheckboxListOptions {
    pub fn builder() -> CheckboxListOptionsBuilder {
        CheckboxListOptionsBuilder::default()
    }

    /// Options with the given choices and every other option at its default.
    pub fn new(choices: impl Into<ChoiceSource>) -> Self {
        Self {
            choices: choices.into(),
            class: DEFAULT_CLASS.to_string(),
            label_separator: DEFAULT_LABEL_SEPARATOR.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            formatter: Arc::new(ListFormatter),
            template: DEFAULT_TEMPLATE.to_string(),
            theme: DEFAULT_THEME.to_string(),
            id_format: IdFormat::default(),
            xhtml: true,
        }
    }

    /// Parse options from a JSON object.
    ///
    /// Known keys are `choices`, `class`, `label_separator`, `separator`,
    /// `template`, `theme`, `id_format` (a pattern or `false`) and `xhtml`.
    /// A formatter can only be installed through the builder.
    ///
    /// # Example
    ///
    /// ```
    /// use formwidget::CheckboxListOptions;
    ///
    /// let options = CheckboxListOptions::from_json(
    ///     r#"{"choices": {"1": "Yes", "0": "No"}, "theme": "dark"}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(options.theme(), "dark");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawOptions = serde_json::from_str(json)?;
        raw.into_options()
    }

    /// Same as [`CheckboxListOptions::from_json`] for an already parsed value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let raw: RawOptions = serde_json::from_value(value)?;
        raw.into_options()
    }

    pub fn choices(&self) -> &ChoiceSource {
        &self.choices
    }

    pub(crate) fn choices_mut(&mut self) -> &mut ChoiceSource {
        &mut self.choices
    }

    /// CSS class of the `<ul>` element.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Markup between a checkbox and its label.
    pub fn label_separator(&self) -> &str {
        &self.label_separator
    }

    /// Markup between two list rows.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn formatter(&self) -> &dyn ChoiceFormatter {
        self.formatter.as_ref()
    }

    /// Template used for every group, with `%group%` and `%options%`.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn id_format(&self) -> &IdFormat {
        &self.id_format
    }

    pub fn is_xhtml(&self) -> bool {
        self.xhtml
    }
}

impl std::fmt::Debug for CheckboxListOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckboxListOptions")
            .field("choices", &self.choices)
            .field("class", &self.class)
            .field("label_separator", &self.label_separator)
            .field("separator", &self.separator)
            .field("template", &self.template)
            .field("theme", &self.theme)
            .field("id_format", &self.id_format)
            .field("xhtml", &self.xhtml)
            .finish_non_exhaustive()
    }
}

/// Builder for [`CheckboxListOptions`].
///
/// # Example
///
/// ```
/// use formwidget::{CheckboxListOptions, ChoiceSet, ConfigError};
///
/// let options = CheckboxListOptions::builder()
///     .choices(ChoiceSet::from([(1, "Yes"), (0, "No")]))
///     .class("answers")
///     .build()
///     .unwrap();
/// assert_eq!(options.class(), "answers");
///
/// let missing = CheckboxListOptions::builder().class("answers").build();
/// assert!(matches!(missing, Err(ConfigError::MissingOption("choices"))));
/// ```
#[derive(Clone, Default)]
pub struct CheckboxListOptionsBuilder {
    choices: Option<ChoiceSource>,
    class: Option<String>,
    label_separator: Option<String>,
    separator: Option<String>,
    formatter: Option<Arc<dyn ChoiceFormatter>>,
    template: Option<String>,
    theme: Option<String>,
    id_format: Option<IdFormat>,
    xhtml: Option<bool>,
}

impl CheckboxListOptionsBuilder {
    /// Set the choices, either a [`ChoiceSet`] or a
    /// [`ChoiceLoader`](crate::ChoiceLoader). Required.
    pub fn choices(mut self, choices: impl Into<ChoiceSource>) -> Self {
        self.choices = Some(choices.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn label_separator(mut self, separator: impl Into<String>) -> Self {
        self.label_separator = Some(separator.into());
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Replace the default [`ListFormatter`].
    pub fn formatter(mut self, formatter: impl ChoiceFormatter + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Template applied to each group.
    ///
    /// It must contain both `%group%` and `%options%`, and [`build`] rejects
    /// it otherwise. The check applies to flat choices too, since lazy
    /// choices only reveal whether they are grouped at render time.
    ///
    /// [`build`]: CheckboxListOptionsBuilder::build
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn id_format(mut self, id_format: IdFormat) -> Self {
        self.id_format = Some(id_format);
        self
    }

    pub fn xhtml(mut self, xhtml: bool) -> Self {
        self.xhtml = Some(xhtml);
        self
    }

    pub fn build(self) -> Result<CheckboxListOptions, ConfigError> {
        let choices = self.choices.ok_or(ConfigError::MissingOption("choices"))?;

        let mut options = CheckboxListOptions::new(choices);
        if let Some(template) = self.template {
            validate_template(&template)?;
            options.template = template;
        }
        if let Some(class) = self.class {
            options.class = class;
        }
        if let Some(separator) = self.label_separator {
            options.label_separator = separator;
        }
        if let Some(separator) = self.separator {
            options.separator = separator;
        }
        if let Some(formatter) = self.formatter {
            options.formatter = formatter;
        }
        if let Some(theme) = self.theme {
            options.theme = theme;
        }
        if let Some(id_format) = self.id_format {
            options.id_format = id_format;
        }
        if let Some(xhtml) = self.xhtml {
            options.xhtml = xhtml;
        }

        Ok(options)
    }
}

fn validate_template(template: &str) -> Result<(), ConfigError> {
    for placeholder in [GROUP_PLACEHOLDER, OPTIONS_PLACEHOLDER] {
        if !template.contains(placeholder) {
            return Err(ConfigError::invalid(
                "template",
                format!("missing the {placeholder} placeholder"),
            ));
        }
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIdFormat {
    Pattern(String),
    Flag(bool),
}

/// Options as they appear in a JSON document.
#[derive(Deserialize)]
struct RawOptions {
    choices: Option<ChoiceSet>,
    class: Option<String>,
    label_separator: Option<String>,
    separator: Option<String>,
    template: Option<String>,
    theme: Option<String>,
    id_format: Option<RawIdFormat>,
    xhtml: Option<bool>,
    #[serde(flatten)]
    other: BTreeMap<String, serde_json::Value>,
}

impl RawOptions {
    fn into_options(self) -> Result<CheckboxListOptions, ConfigError> {
        if self.other.contains_key("formatter") {
            return Err(ConfigError::invalid(
                "formatter",
                "a formatter can only be set through the builder",
            ));
        }
        if let Some(name) = self.other.keys().next() {
            return Err(ConfigError::UnknownOption(name.clone()));
        }

        let mut builder = CheckboxListOptions::builder();
        if let Some(choices) = self.choices {
            builder = builder.choices(choices);
        }
        if let Some(class) = self.class {
            builder = builder.class(class);
        }
        if let Some(separator) = self.label_separator {
            builder = builder.label_separator(separator);
        }
        if let Some(separator) = self.separator {
            builder = builder.separator(separator);
        }
        if let Some(template) = self.template {
            builder = builder.template(template);
        }
        if let Some(theme) = self.theme {
            builder = builder.theme(theme);
        }
        match self.id_format {
            Some(RawIdFormat::Pattern(pattern)) => {
                builder = builder.id_format(IdFormat::Pattern(pattern));
            }
            Some(RawIdFormat::Flag(false)) => builder = builder.id_format(IdFormat::Disabled),
            Some(RawIdFormat::Flag(true)) => {
                return Err(ConfigError::invalid(
                    "id_format",
                    "expected a pattern or false",
                ));
            }
            None => {}
        }
        if let Some(xhtml) = self.xhtml {
            builder = builder.xhtml(xhtml);
        }

        builder.build()
    }
}
