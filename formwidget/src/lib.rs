//! Form widgets rendered to HTML.
//!
//! The main widget is [`CheckboxList`], a list of checkboxes built from an
//! ordered (and optionally grouped) set of choices.

pub mod assets;
pub mod choices;
pub mod error;
pub mod formatter;
pub mod options;
pub mod selection;
pub mod widget;

pub use choices::{ChoiceEntry, ChoiceKey, ChoiceLoader, ChoiceSet, ChoiceSource};
pub use error::{ConfigError, LoadError, RenderError};
pub use formatter::{ChoiceFormatter, ListFormatter, RenderedInput};
pub use options::{CheckboxListOptions, CheckboxListOptionsBuilder};
pub use selection::SelectedValue;
pub use widget::{CheckboxList, Widget, WidgetId};

pub use htmltag::{Attributes, IdFormat};

pub mod prelude {
    pub use crate::choices::{ChoiceEntry, ChoiceKey, ChoiceLoader, ChoiceSet, ChoiceSource};
    pub use crate::error::{ConfigError, LoadError, RenderError};
    pub use crate::formatter::{ChoiceFormatter, ListFormatter, RenderedInput};
    pub use crate::options::CheckboxListOptions;
    pub use crate::selection::SelectedValue;
    pub use crate::widget::{CheckboxList, Widget};

    pub use htmltag::Attributes;
}
