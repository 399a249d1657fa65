use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::a001_skip_option::SkipOption;

/// Sort order of the catalog grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "size-asc")]
    SizeAsc,
    #[serde(rename = "size-desc")]
    SizeDesc,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
}

impl SortOrder {
    pub fn code(&self) -> &'static str {
        match self {
            SortOrder::SizeAsc => "size-asc",
            SortOrder::SizeDesc => "size-desc",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::SizeAsc => "Size: Small to Large",
            SortOrder::SizeDesc => "Size: Large to Small",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
        }
    }

    pub fn all() -> Vec<SortOrder> {
        vec![
            SortOrder::SizeAsc,
            SortOrder::SizeDesc,
            SortOrder::PriceAsc,
            SortOrder::PriceDesc,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "size-asc" => Some(SortOrder::SizeAsc),
            "size-desc" => Some(SortOrder::SizeDesc),
            "price-asc" => Some(SortOrder::PriceAsc),
            "price-desc" => Some(SortOrder::PriceDesc),
            _ => None,
        }
    }

    /// Unknown keys fall back to size ascending
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    /// Compares two skips by this order. Price is the pre-VAT price.
    pub fn compare(&self, a: &SkipOption, b: &SkipOption) -> Ordering {
        match self {
            SortOrder::SizeAsc => a.size.cmp(&b.size),
            SortOrder::SizeDesc => b.size.cmp(&a.size),
            SortOrder::PriceAsc => a.price_before_vat.total_cmp(&b.price_before_vat),
            SortOrder::PriceDesc => b.price_before_vat.total_cmp(&a.price_before_vat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_falls_back_to_size_asc() {
        assert_eq!(SortOrder::from_code_or_default("price-desc"), SortOrder::PriceDesc);
        assert_eq!(SortOrder::from_code_or_default("popularity"), SortOrder::SizeAsc);
        assert_eq!(SortOrder::from_code_or_default(""), SortOrder::SizeAsc);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&SortOrder::PriceAsc).unwrap();
        assert_eq!(json, "\"price-asc\"");
        for order in SortOrder::all() {
            assert_eq!(SortOrder::from_code(order.code()), Some(order));
        }
    }
}
