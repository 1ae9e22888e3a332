use scraper::{ElementRef, Html};

use crate::{parse::text::element_text, static_selector};

const CATEGORY_CLASS: &str = "shortmenumeals";

/// One marker element of a menu page, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuToken {
    /// `div.shortmenumeals`: starts a new category ("Breakfast", "Lunch", ...)
    Category(String),
    /// `div.shortmenurecipes`: a food item of the current category
    Item(String),
}

impl MenuToken {
    fn from_marker(element: ElementRef<'_>) -> Self {
        let text = element_text(element);
        // an element carrying both classes opens a category
        if element.value().classes().any(|class| class == CATEGORY_CLASS) {
            Self::Category(text)
        } else {
            Self::Item(text)
        }
    }
}

/// The menu container of a short menu page, if the page has one.
pub fn menu_container(document: &Html) -> Option<ElementRef<'_>> {
    static_selector!(MENU_SELECTOR <- r##"table[bordercolor="#CCC"]"##);
    document.select(&MENU_SELECTOR).next()
}

/// Category and item markers below `container`, in document order.
pub fn tokens<'a>(container: ElementRef<'a>) -> impl Iterator<Item = MenuToken> + 'a {
    static_selector!(MARKER_SELECTOR <- "div.shortmenumeals, div.shortmenurecipes");
    container.select(&MARKER_SELECTOR).map(MenuToken::from_marker)
}
