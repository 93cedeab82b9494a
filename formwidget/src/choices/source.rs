//! Where a widget gets its choices from.

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::{LoadError, RenderError};
use crate::widget::{CheckboxList, WidgetId};

use super::ChoiceSet;

type DetachedFn = dyn Fn() -> Result<ChoiceSet, LoadError> + Send + Sync;
type MethodFn = dyn Fn(&CheckboxList) -> Result<ChoiceSet, LoadError> + Send + Sync;

/// A deferred computation of choices, evaluated at render time.
#[derive(Clone)]
pub enum ChoiceLoader {
    /// A closure with no ties to any widget.
    Detached(Arc<DetachedFn>),
    /// A method evaluated against the widget it is bound to.
    ///
    /// A loader built with [`ChoiceLoader::method`] has no receiver yet. It is
    /// bound to every widget its options are installed in, and cloning a
    /// widget retargets the copy's loader to the copy.
    Bound {
        receiver: Option<WidgetId>,
        method: Arc<MethodFn>,
    },
}

impl ChoiceLoader {
    pub fn detached<F>(load: F) -> Self
    where
        F: Fn() -> Result<ChoiceSet, LoadError> + Send + Sync + 'static,
    {
        Self::Detached(Arc::new(load))
    }

    /// A loader that reads from the widget it ends up installed in.
    ///
    /// # Example
    ///
    /// ```
    /// use formwidget::{CheckboxList, CheckboxListOptions, ChoiceLoader, ChoiceSet};
    ///
    /// let options = CheckboxListOptions::builder()
    ///     .choices(ChoiceLoader::method(|widget: &CheckboxList| {
    ///         let source = widget.attribute("data-source").unwrap_or("none");
    ///         Ok(ChoiceSet::new().leaf(source, source))
    ///     }))
    ///     .build()
    ///     .unwrap();
    /// let widget = CheckboxList::new(options);
    /// ```
    pub fn method<F>(method: F) -> Self
    where
        F: Fn(&CheckboxList) -> Result<ChoiceSet, LoadError> + Send + Sync + 'static,
    {
        Self::Bound {
            receiver: None,
            method: Arc::new(method),
        }
    }

    /// The widget a bound loader evaluates against.
    pub fn receiver(&self) -> Option<WidgetId> {
        match self {
            Self::Detached(_) => None,
            Self::Bound { receiver, .. } => *receiver,
        }
    }

    /// Bind a method loader to `widget`, replacing any earlier receiver.
    pub(crate) fn bind(&mut self, widget: WidgetId) {
        if let Self::Bound { receiver, .. } = self
            && let Some(previous) = receiver.replace(widget)
        {
            log::debug!("Rebound choice loader from {previous} to {widget}");
        }
    }

    /// Move a loader bound to `from` over to `to`. Returns whether it moved.
    pub(crate) fn retarget(&mut self, from: WidgetId, to: WidgetId) -> bool {
        match self {
            Self::Bound { receiver, .. } if *receiver == Some(from) => {
                *receiver = Some(to);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn load(&self, widget: &CheckboxList) -> Result<ChoiceSet, LoadError> {
        match self {
            Self::Detached(load) => load(),
            Self::Bound { method, .. } => method(widget),
        }
    }
}

impl std::fmt::Debug for ChoiceLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Detached(_) => write!(f, "Detached(...)"),
            Self::Bound { receiver, .. } => write!(f, "Bound({receiver:?})"),
        }
    }
}

/// Choices given up front or computed on demand.
#[derive(Debug, Clone)]
pub enum ChoiceSource {
    Static(ChoiceSet),
    Lazy(ChoiceLoader),
}

impl ChoiceSource {
    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    pub fn loader(&self) -> Option<&ChoiceLoader> {
        match self {
            Self::Static(_) => None,
            Self::Lazy(loader) => Some(loader),
        }
    }

    pub(crate) fn loader_mut(&mut self) -> Option<&mut ChoiceLoader> {
        match self {
            Self::Static(_) => None,
            Self::Lazy(loader) => Some(loader),
        }
    }

    /// Produce the choices, running the loader if there is one.
    pub fn resolve(&self, widget: &CheckboxList) -> Result<Cow<'_, ChoiceSet>, RenderError> {
        match self {
            Self::Static(set) => Ok(Cow::Borrowed(set)),
            Self::Lazy(loader) => Ok(Cow::Owned(loader.load(widget)?)),
        }
    }
}

impl From<ChoiceSet> for ChoiceSource {
    fn from(set: ChoiceSet) -> Self {
        Self::Static(set)
    }
}

impl From<ChoiceLoader> for ChoiceSource {
    fn from(loader: ChoiceLoader) -> Self {
        Self::Lazy(loader)
    }
}
