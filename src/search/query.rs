use crate::parse::{CategoryMap, MenuSnapshot};

/// Lower-cases `keyword` and derives its singular and plural forms.
///
/// Only a trailing "s" is considered, so "tomatoes" becomes "tomatoe" and
/// "bus" becomes "bu".
pub fn normalize(keyword: &str) -> (String, String) {
    let keyword = keyword.to_lowercase();
    if keyword.ends_with('s') {
        (keyword[..keyword.len() - 1].to_string(), keyword)
    } else {
        let plural = format!("{keyword}s");
        (keyword, plural)
    }
}

/// Substring match, so "Pineapple Cake" matches "apple".
pub fn matches(item_name: &str, singular: &str, plural: &str) -> bool {
    let item = item_name.to_lowercase();
    item.contains(singular) || item.contains(plural)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    keyword: String,
    singular: String,
    plural: String,
}

impl SearchQuery {
    pub fn new(keyword: &str) -> Self {
        let (singular, plural) = normalize(keyword);
        Self {
            keyword: keyword.to_string(),
            singular,
            plural,
        }
    }

    /// The keyword as the user typed it.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    pub fn matches(&self, item_name: &str) -> bool {
        matches(item_name, &self.singular, &self.plural)
    }

    /// Matching items per category, in menu order. Categories without a match
    /// are left out, and `None` means the hall does not serve the keyword.
    pub fn search(&self, snapshot: &MenuSnapshot) -> Option<MatchSet> {
        let mut found = CategoryMap::new();
        for (category, items) in snapshot.categories().iter() {
            let hits: Vec<String> = items
                .iter()
                .filter(|item| self.matches(item))
                .cloned()
                .collect();
            if !hits.is_empty() {
                found.insert(category.to_string(), hits);
            }
        }
        (!found.is_empty()).then_some(MatchSet(found))
    }
}

/// Categories of one hall mapped to the items that matched a query.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct MatchSet(CategoryMap);

impl MatchSet {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter()
    }

    #[cfg(test)]
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0.get(category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
