//! Product listing.
//!
//! # Usage
//!
//! ```bash
//! luxe products
//! luxe products --category rings
//! luxe products --search diamond
//! ```

use std::io::Write;
use std::path::Path;

use luxe_cart::{Catalog, CategoryFilter};

use super::CommandError;
use crate::render;

/// Demo catalog shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Load the catalog at `path`, or the bundled one.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or parsed.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CommandError> {
    let catalog = match path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::from_json(BUNDLED_CATALOG)?,
    };
    tracing::debug!(products = catalog.products().len(), "catalog loaded");
    Ok(catalog)
}

/// List products in `category` whose name or category matches `search`.
///
/// # Errors
///
/// Returns an error if output cannot be written.
pub fn list(
    catalog: &Catalog,
    out: &mut impl Write,
    category: &CategoryFilter,
    search: Option<&str>,
) -> Result<(), CommandError> {
    let mut shown = catalog.filter(category);
    if let Some(query) = search {
        let hits = catalog.search(query);
        shown.retain(|product| hits.contains(product));
    }

    render::products(out, &shown)?;
    Ok(())
}
