//! Product catalog filtering and search.
//!
//! The storefront's product grid can be narrowed by category or by a search
//! term. Both take their input explicitly; nothing reads ambient UI state.

use std::path::Path;

use luxe_core::Price;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A product shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Category slug, e.g. `rings`.
    pub category: String,
    pub price: Price,
    /// Optional ribbon such as "New" or "Bestseller".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// Which categories to show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Products whose category matches exactly.
    Category(String),
}

impl CategoryFilter {
    /// Whether `product` passes this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => product.category == *category,
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    /// `all` (any case) selects everything; anything else names a category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Category(s.to_owned()))
        }
    }
}

/// The full product list in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not a valid product list.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Products passing `filter`, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Products whose name or category contains `query`, ignoring case.
    ///
    /// An empty query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"[
                {"name": "Eternity Ring", "category": "rings", "price": 1200, "badge": "New"},
                {"name": "Pearl Necklace", "category": "necklaces", "price": 450},
                {"name": "Gold Band", "category": "rings", "price": 300},
                {"name": "Diamond Studs", "category": "earrings", "price": 899.99}
            ]"#,
        )
        .unwrap()
    }

    fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_filter_all() {
        let catalog = catalog();
        assert_eq!(catalog.filter(&CategoryFilter::All).len(), 4);
    }

    #[test]
    fn test_filter_category() {
        let catalog = catalog();
        let rings = catalog.filter(&"rings".parse().unwrap());
        assert_eq!(names(&rings), ["Eternity Ring", "Gold Band"]);
        assert!(catalog.filter(&"watches".parse().unwrap()).is_empty());
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            " rings ".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Category("rings".to_string())
        );
    }

    #[test]
    fn test_search_name_and_category() {
        let catalog = catalog();
        assert_eq!(names(&catalog.search("PEARL")), ["Pearl Necklace"]);
        assert_eq!(names(&catalog.search("ear")), ["Pearl Necklace", "Diamond Studs"]);
        assert_eq!(catalog.search("").len(), 4);
        assert!(catalog.search("watch").is_empty());
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        assert_eq!(catalog().categories(), ["rings", "necklaces", "earrings"]);
    }

    #[test]
    fn test_badge_is_optional() {
        let catalog = catalog();
        assert_eq!(catalog.products()[0].badge.as_deref(), Some("New"));
        assert!(catalog.products()[1].badge.is_none());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Json(_))));
    }
}
