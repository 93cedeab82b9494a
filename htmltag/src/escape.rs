//! HTML escaping helpers.

use std::sync::LazyLock;

use regex::Regex;

static DOUBLE_ESCAPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)&amp;([a-z]+|#\d+|#x[\da-f]+);").expect("entity pattern is valid")
});

/// Escapes the HTML special characters, quotes included.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Restores entities that were escaped a second time (`&amp;lt;` → `&lt;`).
pub fn fix_double_escape(s: &str) -> String {
    DOUBLE_ESCAPED.replace_all(s, "&$1;").into_owned()
}

/// Escapes a value without touching entities that are already escaped.
///
/// Applying it twice gives the same result as applying it once.
pub fn escape_once(s: &str) -> String {
    fix_double_escape(&escape(s))
}
