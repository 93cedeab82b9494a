//! Deserialization of choice sets from self-describing data (JSON and co).
//!
//! Maps keep their document order, sequences are keyed `0..n`, scalars
//! become labels and `null` becomes an empty label.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use super::{ChoiceEntry, ChoiceKey, ChoiceSet};

struct KeyVisitor;

impl Visitor<'_> for KeyVisitor {
    type Value = ChoiceKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, integer or boolean choice key")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ChoiceKey::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ChoiceKey::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ChoiceKey::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ChoiceKey::from(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ChoiceKey::from(v))
    }
}

impl<'de> Deserialize<'de> for ChoiceKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KeyVisitor)
    }
}

fn visit_entries<'de, A: MapAccess<'de>>(mut map: A) -> Result<ChoiceSet, A::Error> {
    let mut set = ChoiceSet::new();
    while let Some((key, entry)) = map.next_entry::<ChoiceKey, ChoiceEntry>()? {
        set.insert(key, entry);
    }
    Ok(set)
}

fn visit_items<'de, A: SeqAccess<'de>>(mut seq: A) -> Result<ChoiceSet, A::Error> {
    let mut set = ChoiceSet::new();
    let mut index = 0usize;
    while let Some(entry) = seq.next_element::<ChoiceEntry>()? {
        set.insert(index, entry);
        index += 1;
    }
    Ok(set)
}

struct EntryVisitor;

impl<'de> Visitor<'de> for EntryVisitor {
    type Value = ChoiceEntry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a choice label or a group of choices")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ChoiceEntry::Leaf(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ChoiceEntry::Leaf(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ChoiceEntry::Leaf(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ChoiceEntry::Leaf(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ChoiceEntry::Leaf(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ChoiceEntry::Leaf(ChoiceKey::from(v).0))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ChoiceEntry::Leaf(String::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ChoiceEntry::Leaf(String::new()))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        visit_entries(map).map(ChoiceEntry::Group)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        visit_items(seq).map(ChoiceEntry::Group)
    }
}

impl<'de> Deserialize<'de> for ChoiceEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntryVisitor)
    }
}

struct SetVisitor;

impl<'de> Visitor<'de> for SetVisitor {
    type Value = ChoiceSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map or a list of choices")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        visit_entries(map)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        visit_items(seq)
    }
}

impl<'de> Deserialize<'de> for ChoiceSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SetVisitor)
    }
}
