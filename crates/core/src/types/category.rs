//! Product categories for farm stock.
//!
//! The category decides how a product's stock is tracked: `animal_medicine`
//! gets one ledger record per physical box, everything else only keeps the
//! aggregate per-product counter.

use serde::{Deserialize, Serialize};

/// Category of a purchasable product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "product_category", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// Veterinary medicine; tracked per physical box/dose.
    AnimalMedicine,
    /// Feed stock; aggregate counter only.
    AnimalFeed,
    /// Tools and durable equipment; aggregate counter only.
    Equipment,
    /// Everything else; aggregate counter only.
    General,
}

impl ProductCategory {
    /// Whether products of this category get per-unit ledger records.
    #[must_use]
    pub const fn requires_unit_tracking(self) -> bool {
        matches!(self, Self::AnimalMedicine)
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnimalMedicine => write!(f, "animal_medicine"),
            Self::AnimalFeed => write!(f, "animal_feed"),
            Self::Equipment => write!(f, "equipment"),
            Self::General => write!(f, "general"),
        }
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "animal_medicine" => Ok(Self::AnimalMedicine),
            "animal_feed" => Ok(Self::AnimalFeed),
            "equipment" => Ok(Self::Equipment),
            "general" => Ok(Self::General),
            _ => Err(format!("invalid product category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_medicine_is_unit_tracked() {
        assert!(ProductCategory::AnimalMedicine.requires_unit_tracking());
        assert!(!ProductCategory::AnimalFeed.requires_unit_tracking());
        assert!(!ProductCategory::Equipment.requires_unit_tracking());
        assert!(!ProductCategory::General.requires_unit_tracking());
    }

    #[test]
    fn test_display_from_str_roundtrip() {
        for category in [
            ProductCategory::AnimalMedicine,
            ProductCategory::AnimalFeed,
            ProductCategory::Equipment,
            ProductCategory::General,
        ] {
            let parsed: ProductCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("medicine".parse::<ProductCategory>().is_err());
    }
}
