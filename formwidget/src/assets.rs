//! Client-side assets used by the checkbox list.

/// Public directory the plugin assets are served from.
pub const WEB_DIR: &str = "/sfEfWidgetFormExtraPlugin";

/// Path of the jQuery checkbox plugin script.
pub fn javascript_path() -> String {
    format!("{WEB_DIR}/js/jquery.checkbox.js")
}

/// Path of the stylesheet for a theme.
pub fn stylesheet_path(theme: &str) -> String {
    format!("{WEB_DIR}/css/jquery.checkbox.{theme}.css")
}

/// Base path of the checkbox images.
pub fn images_path() -> String {
    format!("{WEB_DIR}/images/")
}

/// Inline script enabling the checkbox plugin on `ul.<class>`.
///
/// The class is inserted as is.
pub fn checkbox_script(class: &str) -> String {
    format!(
        r#"<script type="text/javascript">
  jQuery(document).ready(function() {{
    jQuery("ul.{class} input:checkbox").checkbox(jQuery.extend({{}}, {{
      imagesPath: '{images}'
    }}));
  }});
</script>"#,
        images = images_path()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(javascript_path(), "/sfEfWidgetFormExtraPlugin/js/jquery.checkbox.js");
        assert_eq!(
            stylesheet_path("dark"),
            "/sfEfWidgetFormExtraPlugin/css/jquery.checkbox.dark.css"
        );
    }

    #[test]
    fn test_checkbox_script() {
        let expected = "<script type=\"text/javascript\">\n  jQuery(document).ready(function() {\n    jQuery(\"ul.checkbox_list input:checkbox\").checkbox(jQuery.extend({}, {\n      imagesPath: '/sfEfWidgetFormExtraPlugin/images/'\n    }));\n  });\n</script>";
        assert_eq!(checkbox_script("checkbox_list"), expected);
    }
}
