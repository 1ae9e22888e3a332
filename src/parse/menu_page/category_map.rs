use serde::ser::{Serialize, SerializeMap, Serializer};

/// Category name to item names, in the order the categories were first seen.
///
/// Menus have a handful of categories, so lookups scan the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    entries: Vec<(String, Vec<String>)>,
}

impl CategoryMap {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.position(category).map(|i| self.entries[i].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    #[cfg(test)]
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Starts `category` over with no items and returns its index.
    /// A category seen before keeps its original position.
    pub fn reset(&mut self, category: &str) -> usize {
        if let Some(i) = self.position(category) {
            self.entries[i].1.clear();
            i
        } else {
            self.entries.push((category.to_owned(), Vec::new()));
            self.entries.len() - 1
        }
    }

    /// Appends `item` to the category at `index` unless it is already listed there.
    pub fn push_unique(&mut self, index: usize, item: &str) -> bool {
        let items = &mut self.entries[index].1;
        if items.iter().any(|x| x == item) {
            false
        } else {
            items.push(item.to_owned());
            true
        }
    }

    pub(crate) fn insert(&mut self, category: String, items: Vec<String>) {
        match self.position(&category) {
            Some(i) => self.entries[i].1 = items,
            None => self.entries.push((category, items)),
        }
    }

    fn position(&self, category: &str) -> Option<usize> {
        self.entries.iter().position(|(name, _)| name == category)
    }
}

impl Serialize for CategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, items) in &self.entries {
            map.serialize_entry(name, items)?;
        }
        map.end()
    }
}
