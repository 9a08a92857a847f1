//! Expense categories
//!
//! A category partitions expenses for filtering and aggregation. There is a
//! fixed set of well-known labels plus a free-text fallback for anything else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Longest free-text label accepted
pub const MAX_CATEGORY_LEN: usize = 50;

/// The label an expense is filed under
///
/// Serialized as its display label, so `HomeUtilities` is stored as
/// `"Home & Utilities"` and `Custom("Gifts")` as `"Gifts"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Food,
    Rent,
    Transport,
    Clothes,
    HomeUtilities,
    Other,
    /// Any other label; never empty and never equal to a fixed label
    Custom(String),
}

impl Category {
    /// The fixed labels, in the order presented to users
    pub fn presets() -> &'static [Category] {
        &[
            Self::Food,
            Self::Rent,
            Self::Transport,
            Self::Clothes,
            Self::HomeUtilities,
            Self::Other,
        ]
    }

    /// Parse a label, matching fixed labels case-insensitively
    pub fn parse(label: &str) -> Result<Self, CategoryValidationError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        if label.chars().count() > MAX_CATEGORY_LEN {
            return Err(CategoryValidationError::NameTooLong(label.chars().count()));
        }

        let category = match label.to_lowercase().as_str() {
            "food" => Self::Food,
            "rent" => Self::Rent,
            "transport" => Self::Transport,
            "clothes" => Self::Clothes,
            "home & utilities" | "home and utilities" => Self::HomeUtilities,
            "other" => Self::Other,
            _ => Self::Custom(label.to_string()),
        };
        Ok(category)
    }

    /// Re-check a category built directly, folding `Custom("food")` into `Food`
    pub fn normalize(self) -> Result<Self, CategoryValidationError> {
        match self {
            Self::Custom(label) => Self::parse(&label),
            fixed => Ok(fixed),
        }
    }

    /// The display label
    pub fn label(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Transport => "Transport",
            Self::Clothes => "Clothes",
            Self::HomeUtilities => "Home & Utilities",
            Self::Other => "Other",
            Self::Custom(label) => label,
        }
    }

    /// Whether this is one of the fixed labels
    pub fn is_preset(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).map_err(|e| LedgerError::Validation(e.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = CategoryValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(label) => label,
            fixed => fixed.label().to_string(),
        }
    }
}

/// Which categories a listing should include
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No filtering
    #[default]
    All,
    /// Only expenses in this category
    Only(Category),
}

impl CategoryFilter {
    /// Check whether a category passes this filter
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        category.map(Self::Only).unwrap_or_default()
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = LedgerError;

    /// An empty string or "All" (any case) selects everything
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Ok(Self::Only(s.parse()?))
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category cannot be empty"),
            Self::NameTooLong(len) => {
                write!(
                    f,
                    "Category too long ({} chars, max {})",
                    len, MAX_CATEGORY_LEN
                )
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_presets_case_insensitive() {
        assert_eq!(Category::parse("food").unwrap(), Category::Food);
        assert_eq!(Category::parse("  RENT ").unwrap(), Category::Rent);
        assert_eq!(
            Category::parse("Home & Utilities").unwrap(),
            Category::HomeUtilities
        );
        assert_eq!(Category::parse("other").unwrap(), Category::Other);
    }

    #[test]
    fn test_parse_custom() {
        let category = Category::parse(" Gifts ").unwrap();
        assert_eq!(category, Category::Custom("Gifts".into()));
        assert_eq!(category.label(), "Gifts");
        assert!(!category.is_preset());
    }

    #[test]
    fn test_parse_validation() {
        assert_eq!(Category::parse("   "), Err(CategoryValidationError::EmptyName));
        assert!(matches!(
            Category::parse(&"x".repeat(51)),
            Err(CategoryValidationError::NameTooLong(51))
        ));
    }

    #[test]
    fn test_normalize_folds_custom_presets() {
        assert_eq!(
            Category::Custom("transport".into()).normalize().unwrap(),
            Category::Transport
        );
        assert!(Category::Custom(String::new()).normalize().is_err());
    }

    #[test]
    fn test_presets_order() {
        let labels: Vec<_> = Category::presets().iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Food", "Rent", "Transport", "Clothes", "Home & Utilities", "Other"]
        );
    }

    #[test]
    fn test_serialization_uses_label() {
        let json = serde_json::to_string(&Category::HomeUtilities).unwrap();
        assert_eq!(json, "\"Home & Utilities\"");

        let deserialized: Category = serde_json::from_str("\"Gifts\"").unwrap();
        assert_eq!(deserialized, Category::Custom("Gifts".into()));

        assert!(serde_json::from_str::<Category>("\"\"").is_err());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "food".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Food)
        );
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(&Category::Rent));
        let only_food = CategoryFilter::from(Category::Food);
        assert!(only_food.matches(&Category::Food));
        assert!(!only_food.matches(&Category::Rent));
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);
    }
}
