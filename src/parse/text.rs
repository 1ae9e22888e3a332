use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;
use scraper::ElementRef;

pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    re.replace_all(s, " ")
}

/// All text below `element`, trimmed and with whitespace runs collapsed.
///
/// The menu pages pad names with `&nbsp;` and split them across `<span>`s, so
/// the text nodes are joined before trimming.
pub fn element_text(element: ElementRef<'_>) -> String {
    let joined: String = element.text().collect();
    remove_excess_whitespace(joined.trim()).into_owned()
}
