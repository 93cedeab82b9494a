use formwidget::prelude::*;
use formwidget::{ChoiceSource, IdFormat};

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_defaults() {
    let options = CheckboxListOptions::builder()
        .choices(ChoiceSet::new())
        .build()
        .unwrap();

    assert_eq!(options.class(), "checkbox_list");
    assert_eq!(options.label_separator(), "&nbsp;");
    assert_eq!(options.separator(), "\n");
    assert_eq!(options.template(), "%group% %options%");
    assert_eq!(options.theme(), "default");
    assert_eq!(options.id_format(), &IdFormat::default());
    assert!(options.is_xhtml());
}

#[test]
fn test_missing_choices() {
    let result = CheckboxListOptions::builder().theme("dark").build();
    assert!(matches!(result, Err(ConfigError::MissingOption("choices"))));
}

#[test]
fn test_template_needs_both_placeholders() {
    let result = CheckboxListOptions::builder()
        .choices(ChoiceSet::new())
        .template("%options%")
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::InvalidOption { option: "template", .. })
    ));

    let result = CheckboxListOptions::builder()
        .choices(ChoiceSet::new())
        .template("<b>%group%</b>")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_error_display() {
    let error = CheckboxListOptions::builder().build().unwrap_err();
    assert_eq!(error.to_string(), "Missing required option 'choices'");
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_from_json() {
    let options = CheckboxListOptions::from_json(
        r#"{
            "choices": {"1": "Yes", "0": "No"},
            "class": "answers",
            "label_separator": " ",
            "separator": "",
            "template": "<h3>%group%</h3>%options%",
            "theme": "dark",
            "id_format": "f_%s",
            "xhtml": false
        }"#,
    )
    .unwrap();

    assert_eq!(options.class(), "answers");
    assert_eq!(options.label_separator(), " ");
    assert_eq!(options.separator(), "");
    assert_eq!(options.template(), "<h3>%group%</h3>%options%");
    assert_eq!(options.theme(), "dark");
    assert_eq!(options.id_format(), &IdFormat::pattern("f_%s"));
    assert!(!options.is_xhtml());

    let ChoiceSource::Static(choices) = options.choices() else {
        panic!("expected static choices");
    };
    let keys: Vec<_> = choices.keys().map(ChoiceKey::as_str).collect();
    assert_eq!(keys, vec!["1", "0"]);
}

#[test]
fn test_from_json_id_format_false() {
    let options =
        CheckboxListOptions::from_json(r#"{"choices": [], "id_format": false}"#).unwrap();
    assert_eq!(options.id_format(), &IdFormat::Disabled);
}

#[test]
fn test_from_json_id_format_true_is_invalid() {
    let result = CheckboxListOptions::from_json(r#"{"choices": [], "id_format": true}"#);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidOption { option: "id_format", .. })
    ));
}

#[test]
fn test_from_json_missing_choices() {
    let result = CheckboxListOptions::from_json(r#"{"class": "x"}"#);
    assert!(matches!(result, Err(ConfigError::MissingOption("choices"))));

    let result = CheckboxListOptions::from_json(r#"{"choices": null}"#);
    assert!(matches!(result, Err(ConfigError::MissingOption("choices"))));
}

#[test]
fn test_from_json_unknown_option() {
    let result = CheckboxListOptions::from_json(r#"{"choices": {}, "multiple": true}"#);
    match result {
        Err(ConfigError::UnknownOption(name)) => assert_eq!(name, "multiple"),
        other => panic!("expected UnknownOption, got {other:?}"),
    }
}

#[test]
fn test_unknown_option_is_reported_before_missing_choices() {
    let result = CheckboxListOptions::from_json(r#"{"colour": "red"}"#);
    assert!(matches!(result, Err(ConfigError::UnknownOption(_))));
}

#[test]
fn test_from_json_formatter_is_rejected() {
    let result = CheckboxListOptions::from_json(r#"{"choices": {}, "formatter": "list"}"#);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidOption { option: "formatter", .. })
    ));
}

#[test]
fn test_from_json_malformed() {
    assert!(matches!(
        CheckboxListOptions::from_json("{not json"),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        CheckboxListOptions::from_json(r#"{"choices": "Apple"}"#),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_from_value() {
    let value = serde_json::json!({"choices": {"fruit": {"a": "Apple"}}});
    let options = CheckboxListOptions::from_value(value).unwrap();
    let ChoiceSource::Static(choices) = options.choices() else {
        panic!("expected static choices");
    };
    assert!(choices.is_grouped());
}

#[test]
fn test_json_widget_renders_like_builder_widget() {
    let from_json = CheckboxList::new(
        CheckboxListOptions::from_json(r#"{"choices": {"1": "Yes", "0": "No"}}"#).unwrap(),
    );
    let from_builder = CheckboxList::new(CheckboxListOptions::new(ChoiceSet::from([
        (1, "Yes"),
        (0, "No"),
    ])));

    let value = SelectedValue::from(1);
    assert_eq!(
        from_json.render("a", &value, &Attributes::new(), &[]).unwrap(),
        from_builder.render("a", &value, &Attributes::new(), &[]).unwrap()
    );
}
