use std::collections::HashSet;

use scraper::Html;

use super::{
    category_map::CategoryMap,
    token::{menu_container, tokens, MenuToken},
};

/// The parsed menu of one dining hall at the time it was fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSnapshot {
    categories: CategoryMap,
    unique_items: HashSet<String>,
}

impl MenuSnapshot {
    /// Rebuilds the category/item structure of a short menu page.
    ///
    /// A page without the menu table yields the empty snapshot.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let Some(container) = menu_container(&document) else {
            log::debug!("Menu table not found.");
            return Self::default();
        };
        let snapshot = Self::from_tokens(tokens(container));
        snapshot.log_contents();
        snapshot
    }

    pub fn from_tokens(tokens: impl IntoIterator<Item = MenuToken>) -> Self {
        tokens
            .into_iter()
            .fold(MenuFold::default(), MenuFold::apply)
            .snapshot
    }

    pub const fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    pub const fn unique_items(&self) -> &HashSet<String> {
        &self.unique_items
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.unique_items.is_empty()
    }

    fn log_contents(&self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        for (category, items) in self.categories.iter() {
            log::debug!("{category}:");
            for item in items {
                log::debug!("  - {item}");
            }
        }
        log::debug!("Total unique menu items: {}", self.unique_items().len());
    }
}

#[derive(Debug, Default)]
struct MenuFold {
    current: Option<usize>,
    snapshot: MenuSnapshot,
}

impl MenuFold {
    fn apply(mut self, token: MenuToken) -> Self {
        match token {
            MenuToken::Category(name) if name.is_empty() => self.current = None,
            MenuToken::Category(name) => {
                self.current = Some(self.snapshot.categories.reset(&name));
            }
            MenuToken::Item(item) if item.is_empty() => {}
            MenuToken::Item(item) => {
                if let Some(index) = self.current {
                    self.snapshot.categories.push_unique(index, &item);
                }
                self.snapshot.unique_items.insert(item);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> MenuToken {
        MenuToken::Category(name.into())
    }

    fn item(name: &str) -> MenuToken {
        MenuToken::Item(name.into())
    }

    /// `detached` are the items expected outside every category, ex. those
    /// listed before the first category marker.
    fn assert_items_are_unique_and_listed(snapshot: &MenuSnapshot, detached: &[&str]) {
        for (_, items) in snapshot.categories().iter() {
            let distinct: HashSet<&String> = items.iter().collect();
            assert_eq!(distinct.len(), items.len());
            assert!(items.iter().all(|x| snapshot.unique_items().contains(x)));
        }
        for unique in snapshot.unique_items() {
            let listed = snapshot
                .categories()
                .iter()
                .any(|(_, items)| items.contains(unique));
            assert!(
                listed || detached.contains(&unique.as_str()),
                "{unique:?} is in no category"
            );
        }
    }

    const DINING_HALL: &str = r##"
    <html><body>
    <table bordercolor="#CCC"><tbody><tr><td>
      <table bordercolor="#FFFF00"><tbody>
        <tr><td><div class="shortmenumeals">Breakfast</div></td></tr>
        <tr><td><table><tbody>
          <tr><td><div class="shortmenucats"><span>-- Breakfast --</span></div></td></tr>
          <tr><td><div class="shortmenurecipes"><span>Scrambled Eggs&nbsp;</span></div></td></tr>
          <tr><td><div class="shortmenurecipes"><span>Bacon&nbsp;</span></div></td></tr>
        </tbody></table></td></tr>
      </tbody></table>
      <table bordercolor="#FFFF00"><tbody>
        <tr><td><div class="shortmenumeals">Lunch</div></td></tr>
        <tr><td><table><tbody>
          <tr><td><div class="shortmenurecipes"><span>Apple Pie&nbsp;</span></div></td></tr>
          <tr><td><div class="shortmenurecipes"><span>Bacon&nbsp;</span></div></td></tr>
          <tr><td><div class="shortmenurecipes"><span>Apple Pie</span></div></td></tr>
          <tr><td><div class="shortmenurecipes"><span>&nbsp;</span></div></td></tr>
        </tbody></table></td></tr>
      </tbody></table>
    </td></tr></tbody></table>
    </body></html>"##;

    #[test]
    fn test_parse_dining_hall() {
        let snapshot = MenuSnapshot::parse(DINING_HALL);
        let categories = snapshot.categories();
        assert_eq!(categories.categories().collect::<Vec<_>>(), ["Breakfast", "Lunch"]);
        assert_eq!(
            categories.get("Breakfast").unwrap(),
            ["Scrambled Eggs", "Bacon"]
        );
        assert_eq!(categories.get("Lunch").unwrap(), ["Apple Pie", "Bacon"]);
        assert_eq!(snapshot.unique_items().len(), 3);
        assert_items_are_unique_and_listed(&snapshot, &[]);
    }

    #[test]
    fn test_missing_menu_table() {
        let snapshot = MenuSnapshot::parse(
            r#"<html><body><div class="shortmenumeals">Breakfast</div>
            <div class="shortmenurecipes">Bacon</div></body></html>"#,
        );
        assert!(snapshot.is_empty());
        assert_eq!(snapshot, MenuSnapshot::default());
    }

    #[test]
    fn test_no_category_markers() {
        let snapshot = MenuSnapshot::from_tokens([item("Bacon"), item("Toast"), item("Bacon")]);
        assert!(snapshot.categories().is_empty());
        assert_eq!(snapshot.unique_items().len(), 2);
    }

    #[test]
    fn test_items_before_first_category() {
        let snapshot =
            MenuSnapshot::from_tokens([item("Coffee"), category("Breakfast"), item("Bacon")]);
        assert_eq!(snapshot.categories().len(), 1);
        assert_eq!(snapshot.categories().get("Breakfast").unwrap(), ["Bacon"]);
        assert!(snapshot.unique_items().contains("Coffee"));
        assert_items_are_unique_and_listed(&snapshot, &["Coffee"]);
    }

    #[test]
    fn test_unique_items_come_from_categories() {
        let snapshot = MenuSnapshot::from_tokens([
            item("Coffee"),
            item("Tea"),
            category("Breakfast"),
            item("Bacon"),
            item("Coffee"),
            category("Lunch"),
            item("Soup"),
            item("Bacon"),
        ]);
        assert_eq!(snapshot.unique_items().len(), 4);
        assert_items_are_unique_and_listed(&snapshot, &["Tea"]);
    }

    #[test]
    fn test_dedup_is_per_category_and_case_sensitive() {
        let snapshot = MenuSnapshot::from_tokens([
            category("Breakfast"),
            item("Bacon"),
            item("bacon"),
            item("Bacon"),
            category("Lunch"),
            item("Bacon"),
        ]);
        assert_eq!(
            snapshot.categories().get("Breakfast").unwrap(),
            ["Bacon", "bacon"]
        );
        assert_eq!(snapshot.categories().get("Lunch").unwrap(), ["Bacon"]);
        assert_eq!(snapshot.unique_items().len(), 2);
    }

    #[test]
    fn test_repeated_category_starts_over() {
        let snapshot = MenuSnapshot::from_tokens([
            category("Breakfast"),
            item("Bacon"),
            category("Lunch"),
            item("Soup"),
            category("Breakfast"),
            item("Waffles"),
        ]);
        assert_eq!(
            snapshot.categories().categories().collect::<Vec<_>>(),
            ["Breakfast", "Lunch"]
        );
        assert_eq!(snapshot.categories().get("Breakfast").unwrap(), ["Waffles"]);
        assert!(snapshot.unique_items().contains("Bacon"));
    }

    #[test]
    fn test_empty_category_name_detaches_items() {
        let snapshot = MenuSnapshot::from_tokens([
            category("Breakfast"),
            item("Bacon"),
            category(""),
            item("Toast"),
        ]);
        assert_eq!(snapshot.categories().len(), 1);
        assert_eq!(snapshot.categories().get("Breakfast").unwrap(), ["Bacon"]);
        assert!(snapshot.unique_items().contains("Toast"));
    }
}
