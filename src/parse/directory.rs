use url::Url;

use crate::{
    parse::{text::element_text, DiningHall},
    static_selector,
};

/// Dining hall links on the location listing page, in page order.
///
/// Links whose url does not mention `Hall` (cafes, markets, ...) are dropped.
/// Halls known to the registry are listed under their registry names.
pub fn dining_halls(html: &str, base: &Url) -> Vec<DiningHall> {
    static_selector!(LOCATION_SELECTOR <- "li.locations");
    static_selector!(LINK_SELECTOR <- "a[href]");

    let document = scraper::Html::parse_document(html);
    let mut halls = Vec::new();
    for location in document.select(&LOCATION_SELECTOR) {
        let Some(link) = location.select(&LINK_SELECTOR).next() else {
            continue;
        };
        let href = link.attr("href").unwrap_or_default();
        let url = match base.join(href) {
            Ok(url) => url,
            Err(e) => {
                log::debug!("Skipping location link {href:?}: {e}");
                continue;
            }
        };
        if !url.as_str().contains("Hall") {
            continue;
        }
        halls.push(DiningHall::from_listing(url, &element_text(link)));
    }
    halls
}
