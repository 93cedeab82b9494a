use htmltag::{IdFormat, generate_id};

fn id(name: &str, value: Option<&str>) -> Option<String> {
    generate_id(&IdFormat::default(), name, value)
}

#[test]
fn test_array_name_without_value() {
    assert_eq!(id("tags[]", None), Some("tags".to_string()));
}

#[test]
fn test_nested_array_name() {
    assert_eq!(id("user[roles][]", Some("admin")), Some("user_roles_admin".to_string()));
    assert_eq!(id("user[name]", None), Some("user_name".to_string()));
}

#[test]
fn test_pattern_is_applied() {
    let format = IdFormat::pattern("form_%s");
    assert_eq!(
        generate_id(&format, "tags[]", Some("1")),
        Some("form_tags_1".to_string())
    );
}

#[test]
fn test_pattern_without_placeholder_keeps_name() {
    let format = IdFormat::pattern("static");
    assert_eq!(generate_id(&format, "tags", None), Some("tags".to_string()));
}

#[test]
fn test_leading_non_letters_are_stripped() {
    assert_eq!(id("123abc", None), Some("abc".to_string()));
    assert_eq!(id("_x", None), Some("x".to_string()));
}

#[test]
fn test_illegal_characters_are_replaced() {
    assert_eq!(id("a b", None), Some("a_b".to_string()));
    assert_eq!(id("tags[]", Some("a&amp;b")), Some("tags_a_amp_b".to_string()));
    assert_eq!(id("ns:field.x-y", None), Some("ns:field.x-y".to_string()));
}

#[test]
fn test_all_illegal_gives_empty_id() {
    assert_eq!(id("123", None), Some(String::new()));
}
