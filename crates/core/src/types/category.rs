//! Product category enum.

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a recognized category.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid category: {0}")]
pub struct CategoryParseError(pub String);

/// A product category.
///
/// The catalog is small and the category set is fixed; the wire format
/// uses the capitalized names (`"Perfume"`, `"Clothes"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Perfume,
    Clothes,
    Phone,
    Electronics,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [Self::Perfume, Self::Clothes, Self::Phone, Self::Electronics];

    /// The canonical wire name of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Perfume => "Perfume",
            Self::Clothes => "Clothes",
            Self::Phone => "Phone",
            Self::Electronics => "Electronics",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Perfume" => Ok(Self::Perfume),
            "Clothes" => Ok(Self::Clothes),
            "Phone" => Ok(Self::Phone),
            "Electronics" => Ok(Self::Electronics),
            other => Err(CategoryParseError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_serde_wire_names() {
        let json = serde_json::to_string(&Category::Electronics).unwrap();
        assert_eq!(json, "\"Electronics\"");
        let back: Category = serde_json::from_str("\"Perfume\"").unwrap();
        assert_eq!(back, Category::Perfume);
    }

    #[test]
    fn test_category_rejects_unknown() {
        assert!("Gadgets".parse::<Category>().is_err());
        assert!(serde_json::from_str::<Category>("\"Gadgets\"").is_err());
    }
}
