//! JSON catalog output
//!
//! The catalog is a single array of product objects, written in one go.

use crate::catalog::Product;
use crate::config::OutputConfig;
use crate::CatalogError;
use std::fs;
use std::path::Path;

/// Serializes products as a JSON array
///
/// # Arguments
///
/// * `products` - Products in output order
/// * `pretty` - Indent the output instead of writing it on one line
pub fn catalog_to_json(products: &[Product], pretty: bool) -> Result<String, CatalogError> {
    let json = if pretty {
        serde_json::to_string_pretty(products)?
    } else {
        serde_json::to_string(products)?
    };
    Ok(json)
}

/// Writes the catalog to the configured output path
///
/// Any existing file at that path is replaced.
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the catalog
/// * `Err(CatalogError)` - Failed to serialize or write
pub fn write_catalog(products: &[Product], config: &OutputConfig) -> Result<(), CatalogError> {
    let json = catalog_to_json(products, config.pretty)?;
    fs::write(Path::new(&config.path), json)?;
    tracing::info!("Wrote {} products to {}", products.len(), config.path);
    Ok(())
}
