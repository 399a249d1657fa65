//! Filter & sort engine of the skip catalog

use serde::{Deserialize, Serialize};

use super::aggregate::SkipOption;
use crate::enums::{CatalogTab, SortOrder};

/// Search match on a skip size.
///
/// Empty term always matches. Otherwise the term must be a substring of the
/// plain number, or (case-insensitively) of "<size> yard".
pub fn matches_search(size: u32, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let plain = size.to_string();
    if plain.contains(term) {
        return true;
    }
    format!("{} yard", size)
        .to_lowercase()
        .contains(&term.to_lowercase())
}

/// Sorts in place, stable
pub fn sort_skips(items: &mut [SkipOption], order: SortOrder) {
    items.sort_by(|a, b| order.compare(a, b));
}

/// Active tab, search term and sort order of the catalog page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub tab: CatalogTab,
    pub search: String,
    pub sort: SortOrder,
}

impl CatalogQuery {
    pub fn new(tab: CatalogTab, search: impl Into<String>, sort: SortOrder) -> Self {
        Self {
            tab,
            search: search.into(),
            sort,
        }
    }

    pub fn matches(&self, skip: &SkipOption) -> bool {
        self.tab.accepts(skip.category()) && matches_search(skip.size, &self.search)
    }

    /// Keeps the input order
    pub fn filter(&self, items: &[SkipOption]) -> Vec<SkipOption> {
        items
            .iter()
            .filter(|skip| self.matches(skip))
            .cloned()
            .collect()
    }

    /// Filtered and sorted copy; `items` is left untouched
    pub fn apply(&self, items: &[SkipOption]) -> Vec<SkipOption> {
        let mut visible = self.filter(items);
        sort_skips(&mut visible, self.sort);
        visible
    }
}
