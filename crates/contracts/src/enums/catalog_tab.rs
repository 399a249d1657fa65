use super::skip_category::SkipCategory;
use serde::{Deserialize, Serialize};

/// Category tab of the catalog page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogTab {
    #[default]
    All,
    Small,
    Medium,
    Large,
}

impl CatalogTab {
    pub fn code(&self) -> &'static str {
        match self {
            CatalogTab::All => "all",
            CatalogTab::Small => "small",
            CatalogTab::Medium => "medium",
            CatalogTab::Large => "large",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CatalogTab::All => "All Sizes",
            CatalogTab::Small => SkipCategory::Small.display_name(),
            CatalogTab::Medium => SkipCategory::Medium.display_name(),
            CatalogTab::Large => SkipCategory::Large.display_name(),
        }
    }

    pub fn all() -> Vec<CatalogTab> {
        vec![
            CatalogTab::All,
            CatalogTab::Small,
            CatalogTab::Medium,
            CatalogTab::Large,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(CatalogTab::All),
            "small" => Some(CatalogTab::Small),
            "medium" => Some(CatalogTab::Medium),
            "large" => Some(CatalogTab::Large),
            _ => None,
        }
    }

    /// Unknown codes select every size
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    /// `All` passes every category, the other tabs pass only their own
    pub fn accepts(&self, category: SkipCategory) -> bool {
        match self {
            CatalogTab::All => true,
            CatalogTab::Small => category == SkipCategory::Small,
            CatalogTab::Medium => category == SkipCategory::Medium,
            CatalogTab::Large => category == SkipCategory::Large,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_accepts_everything() {
        for category in SkipCategory::all() {
            assert!(CatalogTab::All.accepts(category));
        }
    }

    #[test]
    fn test_category_tab_accepts_only_own_bucket() {
        assert!(CatalogTab::Small.accepts(SkipCategory::Small));
        assert!(!CatalogTab::Small.accepts(SkipCategory::Medium));
        assert!(!CatalogTab::Medium.accepts(SkipCategory::Large));
        assert!(CatalogTab::Large.accepts(SkipCategory::Large));
    }

    #[test]
    fn test_labels() {
        assert_eq!(CatalogTab::All.display_name(), "All Sizes");
        assert_eq!(CatalogTab::Large.display_name(), "Large (14+ Yards)");
        assert_eq!(CatalogTab::from_code("medium"), Some(CatalogTab::Medium));
        assert_eq!(CatalogTab::from_code("xl"), None);
    }

    #[test]
    fn test_code_round_trip_and_fallback() {
        for tab in CatalogTab::all() {
            assert_eq!(CatalogTab::from_code_or_default(tab.code()), tab);
        }
        assert_eq!(CatalogTab::from_code_or_default(""), CatalogTab::All);
        assert_eq!(CatalogTab::from_code_or_default("xl"), CatalogTab::All);
    }
}
