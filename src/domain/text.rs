//! Menu text markup helpers
//!
//! Menu labels carry inline tags such as `<col=ff0000>`; comparisons are
//! done on the stripped text.

use regex::Regex;
use std::sync::OnceLock;

use super::color::Color;

fn tag_regex() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"<[^>]*>").expect("static tag pattern"))
}

/// Strip every `<...>` tag from menu text
pub fn remove_tags(text: &str) -> String {
    tag_regex().replace_all(text, "").into_owned()
}

/// Prefix `text` with a color tag for `color`
pub fn prepend_color_tag(text: &str, color: Color) -> String {
    format!("<col={}>{}", color.to_hex(), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_tags() {
        assert_eq!(remove_tags("<col=ff9040>Inventory Tags</col>"), "Inventory Tags");
        assert_eq!(remove_tags("Inventory Tags"), "Inventory Tags");
        assert_eq!(remove_tags("<img=1>Group <b>3</b>"), "Group 3");
    }

    #[test]
    fn test_prepend_color_tag() {
        let tagged = prepend_color_tag("Group 1", Color::rgb(255, 0, 0));
        assert_eq!(tagged, "<col=ff0000>Group 1");
        assert_eq!(remove_tags(&tagged), "Group 1");
    }
}
