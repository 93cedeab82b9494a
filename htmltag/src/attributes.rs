//! Ordered HTML attribute maps.

use crate::escape::escape_once;

/// An ordered set of HTML attributes.
///
/// Insertion order is kept and is the order attributes are written in. A key
/// may hold `None`, which keeps its slot but suppresses it in the output;
/// this is how an override removes an attribute set by a lower layer.
///
/// # Example
///
/// ```
/// use htmltag::Attributes;
///
/// let base = Attributes::from([("type", "checkbox"), ("value", "1")]);
/// let merged = base.merge(&Attributes::from([("class", "big"), ("value", "2")]));
///
/// assert_eq!(merged.to_html(), r#" type="checkbox" value="2" class="big""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, Option<String>)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing the value in place if the key exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.set_opt(name, Some(value.into()))
    }

    /// Set an attribute that may be absent.
    pub fn set_opt(&mut self, name: impl Into<String>, value: Option<String>) -> &mut Self {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Mark an attribute as absent without dropping its slot.
    pub fn unset(&mut self, name: impl Into<String>) -> &mut Self {
        self.set_opt(name, None)
    }

    /// Builder-style variant of [`Attributes::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Whether the key is present with a value.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == name)?;
        self.entries.remove(index).1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Layer `overrides` on top of `self`.
    ///
    /// Keys already present keep their position and take the overriding
    /// value. Keys only found in `overrides` are appended in their order.
    pub fn merge(&self, overrides: &Attributes) -> Attributes {
        let mut merged = self.clone();
        for (name, value) in &overrides.entries {
            merged.set_opt(name.clone(), value.clone());
        }
        merged
    }

    /// Render as ` name="value"` pairs.
    ///
    /// Absent values are skipped, and so are empty ones except for `value`,
    /// which may legitimately be empty.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.entries {
            let Some(value) = value else { continue };
            if value.is_empty() && name != "value" {
                continue;
            }
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_once(value));
            out.push('"');
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
