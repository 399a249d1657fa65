use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateId;
use crate::enums::SkipCategory;
use crate::shared::money::{format_money, round_to_cents};

// ============================================================================
// ID Type
// ============================================================================

/// Backend identifier of a skip option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkipOptionId(pub i64);

impl SkipOptionId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for SkipOptionId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }
}

// ============================================================================
// Derivations
// ============================================================================

/// Image shown when the size has no dedicated picture
pub const FALLBACK_IMAGE: &str = "/images/8-yarder-skip.jpg";

/// Exact-size image table. 20 yards reuses the 40-yard picture.
const IMAGE_TABLE: [(u32, &str); 6] = [
    (4, "/images/4-yarder-skip.jpg"),
    (5, "/images/5-yarder-skip.jpg"),
    (6, "/images/6-yarder-skip.jpg"),
    (16, "/images/16-yarder-skip.jpg"),
    (20, "/images/40-yarder-skip.jpg"),
    (40, "/images/40-yarder-skip.jpg"),
];

pub fn skip_image(size: u32) -> &'static str {
    IMAGE_TABLE
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, path)| *path)
        .unwrap_or(FALLBACK_IMAGE)
}

pub fn suitable_uses(size: u32, allows_heavy_waste: bool) -> Vec<&'static str> {
    match SkipCategory::from_size(size) {
        SkipCategory::Small => vec!["Home Projects", "Garden Cleanup", "Small Renovations"],
        SkipCategory::Medium => vec!["Renovations", "Construction", "Commercial Use"],
        SkipCategory::Large => {
            let mut uses = vec!["Large Construction", "Industrial", "Commercial"];
            if allows_heavy_waste {
                uses.push("Heavy Materials");
            }
            uses
        }
    }
}

pub fn skip_description(size: u32, allows_heavy_waste: bool) -> String {
    match SkipCategory::from_size(size) {
        SkipCategory::Small => format!(
            "Perfect for household projects and garden waste. Compact {} yard capacity.",
            size
        ),
        SkipCategory::Medium => format!(
            "Ideal for renovation projects and medium construction work. {} yard capacity.",
            size
        ),
        SkipCategory::Large => format!(
            "Designed for large-scale projects{}. {} yard capacity.",
            if allows_heavy_waste {
                " including heavy materials"
            } else {
                ""
            },
            size
        ),
    }
}

/// Price including VAT, rounded once to whole pence.
/// The VAT amount itself is never rounded.
pub fn total_price(price_before_vat: f64, vat: f64) -> f64 {
    let vat_amount = price_before_vat * vat / 100.0;
    round_to_cents(price_before_vat + vat_amount)
}

// ============================================================================
// Aggregate
// ============================================================================

/// Skip offered for hire, as delivered by the catalog endpoint.
/// Unknown payload fields (postcode, area, transport cost...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipOption {
    pub id: SkipOptionId,
    /// Capacity in cubic yards
    pub size: u32,
    pub price_before_vat: f64,
    /// VAT percentage, 0..=100
    pub vat: f64,
    pub hire_period_days: u32,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

impl SkipOption {
    pub fn category(&self) -> SkipCategory {
        SkipCategory::from_size(self.size)
    }

    pub fn suitable_uses(&self) -> Vec<&'static str> {
        suitable_uses(self.size, self.allows_heavy_waste)
    }

    pub fn description(&self) -> String {
        skip_description(self.size, self.allows_heavy_waste)
    }

    pub fn total_price(&self) -> f64 {
        total_price(self.price_before_vat, self.vat)
    }

    /// Total price with currency symbol and two decimals, e.g. "£120.00"
    pub fn formatted_total_price(&self) -> String {
        format_money(self.total_price())
    }

    pub fn image(&self) -> &'static str {
        skip_image(self.size)
    }

    pub fn title(&self) -> String {
        format!("{} Yard Skip", self.size)
    }

    pub fn size_badge(&self) -> String {
        format!("{} Yards", self.size)
    }

    pub fn hire_period_label(&self) -> String {
        format!("{} day hire period", self.hire_period_days)
    }

    pub fn road_label(&self) -> &'static str {
        if self.allowed_on_road {
            "Road Placement Available"
        } else {
            "Private Property Only"
        }
    }

    pub fn waste_label(&self) -> &'static str {
        if self.allows_heavy_waste {
            "Heavy Materials Accepted"
        } else {
            "Light Materials Only"
        }
    }

    /// Card shows a "Road Restrictions" flag for these
    pub fn has_road_restrictions(&self) -> bool {
        !self.allowed_on_road
    }

    /// Invariant check
    pub fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err(format!("Skip {}: size must be positive", self.id.value()));
        }
        if !(0.0..=100.0).contains(&self.vat) {
            return Err(format!(
                "Skip {}: VAT {} outside 0..=100",
                self.id.value(),
                self.vat
            ));
        }
        if !self.price_before_vat.is_finite() {
            return Err(format!("Skip {}: price is not a number", self.id.value()));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample(id: i64, size: u32, price_before_vat: f64, vat: f64) -> SkipOption {
    SkipOption {
        id: SkipOptionId(id),
        size,
        price_before_vat,
        vat,
        hire_period_days: 14,
        allowed_on_road: true,
        allows_heavy_waste: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_table_and_fallback() {
        assert_eq!(skip_image(4), "/images/4-yarder-skip.jpg");
        assert_eq!(skip_image(6), "/images/6-yarder-skip.jpg");
        assert_eq!(skip_image(16), "/images/16-yarder-skip.jpg");
        assert_eq!(skip_image(20), "/images/40-yarder-skip.jpg");
        assert_eq!(skip_image(40), "/images/40-yarder-skip.jpg");
        // fallback does not depend on category
        assert_eq!(skip_image(8), FALLBACK_IMAGE);
        assert_eq!(skip_image(3), FALLBACK_IMAGE);
        assert_eq!(skip_image(14), FALLBACK_IMAGE);
    }

    #[test]
    fn test_suitable_uses() {
        assert_eq!(
            suitable_uses(6, true),
            vec!["Home Projects", "Garden Cleanup", "Small Renovations"]
        );
        assert_eq!(
            suitable_uses(12, true),
            vec!["Renovations", "Construction", "Commercial Use"]
        );
        assert_eq!(
            suitable_uses(14, false),
            vec!["Large Construction", "Industrial", "Commercial"]
        );
        assert_eq!(
            suitable_uses(14, true),
            vec!["Large Construction", "Industrial", "Commercial", "Heavy Materials"]
        );
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            skip_description(4, true),
            "Perfect for household projects and garden waste. Compact 4 yard capacity."
        );
        assert_eq!(
            skip_description(8, false),
            "Ideal for renovation projects and medium construction work. 8 yard capacity."
        );
        assert_eq!(
            skip_description(20, true),
            "Designed for large-scale projects including heavy materials. 20 yard capacity."
        );
        assert_eq!(
            skip_description(20, false),
            "Designed for large-scale projects. 20 yard capacity."
        );
    }

    #[test]
    fn test_total_price() {
        let cases = [
            (100.0, 20.0, 120.0),
            (500.0, 20.0, 600.0),
            (278.0, 20.0, 333.6),
            (99.99, 20.0, 119.99),
            (311.0, 0.0, 311.0),
            (0.0, 20.0, 0.0),
        ];
        for (price, vat, expected) in cases {
            assert_eq!(total_price(price, vat), expected, "{price} @ {vat}%");
        }
    }

    #[test]
    fn test_formatted_total_price() {
        assert_eq!(sample(1, 4, 100.0, 20.0).formatted_total_price(), "£120.00");
        assert_eq!(sample(2, 20, 500.0, 20.0).formatted_total_price(), "£600.00");
        assert_eq!(sample(3, 8, 278.0, 20.0).formatted_total_price(), "£333.60");
    }

    #[test]
    fn test_display_labels() {
        let mut skip = sample(7, 12, 390.0, 20.0);
        skip.allowed_on_road = false;
        skip.allows_heavy_waste = true;
        assert_eq!(skip.title(), "12 Yard Skip");
        assert_eq!(skip.size_badge(), "12 Yards");
        assert_eq!(skip.hire_period_label(), "14 day hire period");
        assert_eq!(skip.road_label(), "Private Property Only");
        assert_eq!(skip.waste_label(), "Heavy Materials Accepted");
        assert!(skip.has_road_restrictions());
        assert_eq!(skip.category(), SkipCategory::Medium);
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let json = r#"{
            "id": 17933,
            "size": 4,
            "hire_period_days": 14,
            "transport_cost": null,
            "per_tonne_cost": null,
            "price_before_vat": 278,
            "vat": 20,
            "postcode": "NR32",
            "area": "",
            "forbidden": false,
            "allowed_on_road": true,
            "allows_heavy_waste": false
        }"#;
        let skip: SkipOption = serde_json::from_str(json).unwrap();
        assert_eq!(skip.id, SkipOptionId(17933));
        assert_eq!(skip.size, 4);
        assert_eq!(skip.price_before_vat, 278.0);
        assert!(skip.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(sample(1, 0, 100.0, 20.0).validate().is_err());
        assert!(sample(1, 4, 100.0, 120.0).validate().is_err());
        assert!(sample(1, 4, 100.0, 100.0).validate().is_ok());
    }

    #[test]
    fn test_id_string_key() {
        let id = SkipOptionId(42);
        assert_eq!(id.as_string(), "42");
        assert_eq!(id.value(), 42);
    }
}
