//! Choice model: keys, labels and (nested) groups.

mod de;
mod source;

pub use source::{ChoiceLoader, ChoiceSource};

/// Key identifying a choice, kept in canonical string form.
///
/// Strings are kept verbatim, integers are written in decimal and booleans
/// become `"1"` and `"0"`. Selected values go through the same conversion,
/// so checking a box is a plain string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChoiceKey(String);

impl ChoiceKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChoiceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChoiceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChoiceKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for ChoiceKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&String> for ChoiceKey {
    fn from(key: &String) -> Self {
        Self(key.clone())
    }
}

impl From<&ChoiceKey> for ChoiceKey {
    fn from(key: &ChoiceKey) -> Self {
        key.clone()
    }
}

impl From<bool> for ChoiceKey {
    fn from(key: bool) -> Self {
        Self(if key { "1" } else { "0" }.to_string())
    }
}

macro_rules! int_choice_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ChoiceKey {
                fn from(key: $ty) -> Self {
                    Self(key.to_string())
                }
            }
        )*
    };
}

int_choice_key!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// A single entry of a choice set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceEntry {
    /// A selectable choice with its display label.
    Leaf(String),
    /// A named group of further entries.
    Group(ChoiceSet),
}

impl ChoiceEntry {
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Leaf(label) => Some(label),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&ChoiceSet> {
        match self {
            Self::Leaf(_) => None,
            Self::Group(set) => Some(set),
        }
    }
}

impl From<&str> for ChoiceEntry {
    fn from(label: &str) -> Self {
        Self::Leaf(label.to_string())
    }
}

impl From<String> for ChoiceEntry {
    fn from(label: String) -> Self {
        Self::Leaf(label)
    }
}

impl From<ChoiceSet> for ChoiceEntry {
    fn from(set: ChoiceSet) -> Self {
        Self::Group(set)
    }
}

/// Ordered choices with unique keys.
///
/// Inserting a key that already exists replaces its entry without moving
/// it.
///
/// # Example
///
/// ```
/// use formwidget::ChoiceSet;
///
/// let choices = ChoiceSet::new()
///     .group("fruit", ChoiceSet::new().leaf("a", "Apple").leaf("b", "Banana"))
///     .group("veg", ChoiceSet::new().leaf("c", "Carrot"));
///
/// assert!(choices.is_grouped());
/// assert_eq!(choices.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceSet {
    entries: Vec<(ChoiceKey, ChoiceEntry)>,
}

impl ChoiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<ChoiceKey>, entry: impl Into<ChoiceEntry>) {
        let key = key.into();
        let entry = entry.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = entry,
            None => self.entries.push((key, entry)),
        }
    }

    /// Builder-style insert of a labelled choice.
    pub fn leaf(mut self, key: impl Into<ChoiceKey>, label: impl Into<String>) -> Self {
        self.insert(key, ChoiceEntry::Leaf(label.into()));
        self
    }

    /// Builder-style insert of a nested group.
    pub fn group(mut self, key: impl Into<ChoiceKey>, set: ChoiceSet) -> Self {
        self.insert(key, ChoiceEntry::Group(set));
        self
    }

    pub fn get(&self, key: &str) -> Option<&ChoiceEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChoiceKey, &ChoiceEntry)> {
        self.entries.iter().map(|(k, entry)| (k, entry))
    }

    pub fn keys(&self) -> impl Iterator<Item = &ChoiceKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Whether the set is a list of groups: non-empty and its first entry is
    /// a group.
    pub fn is_grouped(&self) -> bool {
        matches!(self.entries.first(), Some((_, ChoiceEntry::Group(_))))
    }
}

impl<K, V> FromIterator<(K, V)> for ChoiceSet
where
    K: Into<ChoiceKey>,
    V: Into<ChoiceEntry>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ChoiceSet::new();
        for (key, entry) in iter {
            set.insert(key, entry);
        }
        set
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ChoiceSet
where
    K: Into<ChoiceKey>,
    V: Into<ChoiceEntry>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_canonical_forms() {
        assert_eq!(ChoiceKey::from(0).as_str(), "0");
        assert_eq!(ChoiceKey::from(-12i64).as_str(), "-12");
        assert_eq!(ChoiceKey::from(true).as_str(), "1");
        assert_eq!(ChoiceKey::from(false).as_str(), "0");
        assert_eq!(ChoiceKey::from("01").as_str(), "01");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut set = ChoiceSet::from([(1, "One"), (2, "Two")]);
        set.insert(1, "Uno");
        let keys: Vec<_> = set.keys().map(ChoiceKey::as_str).collect();
        assert_eq!(keys, vec!["1", "2"]);
        assert_eq!(set.get("1").and_then(ChoiceEntry::label), Some("Uno"));
    }

    #[test]
    fn test_is_grouped_looks_at_first_entry() {
        assert!(!ChoiceSet::new().is_grouped());
        assert!(!ChoiceSet::new().leaf("a", "A").group("g", ChoiceSet::new()).is_grouped());
        assert!(ChoiceSet::new().group("g", ChoiceSet::new()).leaf("a", "A").is_grouped());
    }
}
