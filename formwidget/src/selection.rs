//! The selected value(s) of a checkbox list.

use crate::choices::ChoiceKey;

/// Values currently selected, in canonical string form.
///
/// No value, a single value and a list of values all normalize to a list;
/// a key is checked when the list contains its canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedValue(Vec<ChoiceKey>);

impl SelectedValue {
    /// Nothing selected.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn one(value: impl Into<ChoiceKey>) -> Self {
        Self(vec![value.into()])
    }

    pub fn many<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ChoiceKey>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, key: &ChoiceKey) -> bool {
        self.0.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChoiceKey> {
        self.0.iter()
    }
}

impl From<&str> for SelectedValue {
    fn from(value: &str) -> Self {
        Self::one(value)
    }
}

impl From<String> for SelectedValue {
    fn from(value: String) -> Self {
        Self::one(value)
    }
}

impl From<ChoiceKey> for SelectedValue {
    fn from(value: ChoiceKey) -> Self {
        Self(vec![value])
    }
}

impl From<bool> for SelectedValue {
    fn from(value: bool) -> Self {
        Self::one(value)
    }
}

impl From<i32> for SelectedValue {
    fn from(value: i32) -> Self {
        Self::one(value)
    }
}

impl From<i64> for SelectedValue {
    fn from(value: i64) -> Self {
        Self::one(value)
    }
}

impl From<u32> for SelectedValue {
    fn from(value: u32) -> Self {
        Self::one(value)
    }
}

impl From<u64> for SelectedValue {
    fn from(value: u64) -> Self {
        Self::one(value)
    }
}

impl<T: Into<ChoiceKey>> From<Vec<T>> for SelectedValue {
    fn from(values: Vec<T>) -> Self {
        Self::many(values)
    }
}

impl<T: Into<ChoiceKey>, const N: usize> From<[T; N]> for SelectedValue {
    fn from(values: [T; N]) -> Self {
        Self::many(values)
    }
}

impl<T: Into<SelectedValue>> From<Option<T>> for SelectedValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl<K: Into<ChoiceKey>> FromIterator<K> for SelectedValue {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::many(iter)
    }
}
