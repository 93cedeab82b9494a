use htmltag::{Attributes, IdFormat, TagRenderer};

// ============================================================================
// render_tag
// ============================================================================

#[test]
fn test_render_tag_xhtml() {
    let tags = TagRenderer::new();
    let html = tags.render_tag("input", &Attributes::from([("type", "text")]));
    assert_eq!(html, r#"<input type="text" />"#);
}

#[test]
fn test_render_tag_html() {
    let tags = TagRenderer::new().with_xhtml(false);
    assert_eq!(
        tags.render_tag("input", &Attributes::from([("type", "text")])),
        r#"<input type="text">"#
    );
    assert_eq!(
        tags.render_tag("textarea", &Attributes::new()),
        "<textarea></textarea>"
    );
}

#[test]
fn test_render_tag_empty_name() {
    let tags = TagRenderer::new();
    assert_eq!(tags.render_tag("", &Attributes::from([("a", "b")])), "");
    assert_eq!(tags.render_content_tag("", "x", &Attributes::new()), "");
}

#[test]
fn test_render_tag_generates_missing_id() {
    let tags = TagRenderer::new();
    let html = tags.render_tag(
        "input",
        &Attributes::from([("name", "tags[]"), ("value", "3")]),
    );
    assert_eq!(html, r#"<input name="tags[]" value="3" id="tags_3" />"#);
}

#[test]
fn test_render_tag_keeps_explicit_id() {
    let tags = TagRenderer::new();
    let html = tags.render_tag("input", &Attributes::from([("name", "a"), ("id", "custom")]));
    assert_eq!(html, r#"<input name="a" id="custom" />"#);
}

#[test]
fn test_render_tag_without_id_format() {
    let tags = TagRenderer::new().with_id_format(IdFormat::Disabled);
    let html = tags.render_tag("input", &Attributes::from([("name", "a")]));
    assert_eq!(html, r#"<input name="a" />"#);
}

// ============================================================================
// Default attributes
// ============================================================================

#[test]
fn test_defaults_come_first_and_can_be_overridden() {
    let tags = TagRenderer::new()
        .with_defaults(Attributes::from([("class", "base"), ("data-x", "1")]));
    let html = tags.render_content_tag("li", "item", &Attributes::from([("class", "row")]));
    assert_eq!(html, r#"<li class="row" data-x="1">item</li>"#);
}

#[test]
fn test_defaults_mut() {
    let mut tags = TagRenderer::new();
    tags.defaults_mut().set("title", "hello");
    assert_eq!(
        tags.render_content_tag("span", "", &Attributes::new()),
        r#"<span title="hello"></span>"#
    );
}

// ============================================================================
// render_content_tag
// ============================================================================

#[test]
fn test_content_is_not_escaped() {
    let tags = TagRenderer::new();
    let html = tags.render_content_tag("label", "<b>Bold</b>", &Attributes::from([("for", "x")]));
    assert_eq!(html, r#"<label for="x"><b>Bold</b></label>"#);
}
