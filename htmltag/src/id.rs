//! DOM id generation for form fields.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_NON_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^A-Za-z]+").expect("leading pattern is valid"));

static ILLEGAL_ID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9:_.\-]").expect("illegal char pattern is valid"));

/// How ids are derived from field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdFormat {
    /// Never generate ids.
    Disabled,
    /// `%s` is replaced by the flattened field name.
    Pattern(String),
}

impl Default for IdFormat {
    fn default() -> Self {
        Self::Pattern("%s".to_string())
    }
}

impl IdFormat {
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern(pattern.into())
    }
}

/// Generate a DOM id from a field name and an optional value.
///
/// Array-style names are flattened: `tags[]` with value `7` gives `tags_7`,
/// `user[roles][]` gives `user_roles_7`. The result only contains
/// characters that are legal in an id and always starts with a letter.
pub fn generate_id(format: &IdFormat, name: &str, value: Option<&str>) -> Option<String> {
    let IdFormat::Pattern(pattern) = format else {
        return None;
    };

    let mut id = name.to_string();
    if id.contains('[') {
        let suffix = value.map(|v| format!("_{v}")).unwrap_or_default();
        id = id
            .replace("[]", &suffix)
            .replace("][", "_")
            .replace('[', "_")
            .replace(']', "");
    }

    if pattern.contains("%s") {
        id = pattern.replacen("%s", &id, 1);
    }

    let id = LEADING_NON_ALPHA.replace(&id, "");
    Some(ILLEGAL_ID_CHARS.replace_all(&id, "_").into_owned())
}
