use serde::{Deserialize, Serialize};

/// Size bucket of a skip, derived from its yard capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipCategory {
    Small,
    Medium,
    Large,
}

impl SkipCategory {
    /// Largest size (inclusive) of the small bucket
    pub const SMALL_MAX_YARDS: u32 = 6;
    /// Largest size (inclusive) of the medium bucket
    pub const MEDIUM_MAX_YARDS: u32 = 12;

    /// Bucket for a capacity in cubic yards
    pub fn from_size(size: u32) -> Self {
        if size <= Self::SMALL_MAX_YARDS {
            SkipCategory::Small
        } else if size <= Self::MEDIUM_MAX_YARDS {
            SkipCategory::Medium
        } else {
            SkipCategory::Large
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SkipCategory::Small => "small",
            SkipCategory::Medium => "medium",
            SkipCategory::Large => "large",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SkipCategory::Small => "Small (4-6 Yards)",
            SkipCategory::Medium => "Medium (8-12 Yards)",
            SkipCategory::Large => "Large (14+ Yards)",
        }
    }

    pub fn all() -> Vec<SkipCategory> {
        vec![SkipCategory::Small, SkipCategory::Medium, SkipCategory::Large]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "small" => Some(SkipCategory::Small),
            "medium" => Some(SkipCategory::Medium),
            "large" => Some(SkipCategory::Large),
            _ => None,
        }
    }
}

impl std::fmt::Display for SkipCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        for size in 1..=6 {
            assert_eq!(SkipCategory::from_size(size), SkipCategory::Small, "size {size}");
        }
        for size in 7..=12 {
            assert_eq!(SkipCategory::from_size(size), SkipCategory::Medium, "size {size}");
        }
        for size in [13, 14, 16, 20, 40, 100] {
            assert_eq!(SkipCategory::from_size(size), SkipCategory::Large, "size {size}");
        }
    }

    #[test]
    fn test_code_round_trip() {
        for category in SkipCategory::all() {
            assert_eq!(SkipCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(SkipCategory::from_code("huge"), None);
    }
}
