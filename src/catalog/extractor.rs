//! Product extraction from a listing page
//!
//! Each product block yields one record per colour swatch. Fields shared
//! by all variants of a block are read once, then copied into each
//! variant that the catalog does not already hold.

use super::product::{is_available, OUT_OF_STOCK};
use super::{selectors, variant_key, Catalog, Product};
use crate::normalize::{clean_price, clean_url_with_base, format_shipping_date, get_capacity};
use scraper::{ElementRef, Html, Selector};

/// Fields common to every colour variant of one product block
#[derive(Debug)]
struct BlockFields {
    title: String,
    price: String,
    image_url: String,
    capacity_mb: String,
    availability_text: String,
    is_available: bool,
    shipping_text: String,
    shipping_date: String,
}

impl BlockFields {
    fn variant(&self, colour: &str) -> Product {
        Product {
            title: self.title.clone(),
            price: self.price.clone(),
            image_url: self.image_url.clone(),
            capacity_mb: self.capacity_mb.clone(),
            colour: colour.to_string(),
            availability_text: self.availability_text.clone(),
            is_available: self.is_available,
            shipping_text: self.shipping_text.clone(),
            shipping_date: self.shipping_date.clone(),
        }
    }
}

/// Extracts product variants from a listing page into the catalog
///
/// Blocks without a title are skipped, as are blocks without colour
/// swatches. A swatch without a colour attribute still counts, with an
/// empty colour. Variants already in the catalog are left untouched.
///
/// # Arguments
///
/// * `document` - The parsed listing page
/// * `catalog` - The run's accumulator
/// * `base_path` - Replacement for `../` in image links
///
/// # Returns
///
/// The number of variants newly added to the catalog
///
/// # Example
///
/// ```
/// use catalog_crawl::catalog::{extract_products, Catalog};
/// use scraper::Html;
///
/// let html = r#"<div><div class="flex-wrap"><div class="product">
///     <h3>Phone</h3><div class="px-2"><span data-colour="Red"></span></div>
/// </div></div></div>"#;
/// let mut catalog = Catalog::new();
/// let added = extract_products(&Html::parse_document(html), &mut catalog, "https://example.com/");
/// assert_eq!(added, 1);
/// ```
pub fn extract_products(document: &Html, catalog: &mut Catalog, base_path: &str) -> usize {
    let mut added = 0;

    for block in document.select(&selectors::PRODUCT) {
        let title = first_text(block, &selectors::TITLE);
        if title.trim().is_empty() {
            tracing::debug!("Skipping product block without a title");
            continue;
        }

        let colours: Vec<&str> = block
            .select(&selectors::COLOUR)
            .map(|swatch| swatch.value().attr(selectors::COLOUR_ATTR).unwrap_or_default())
            .collect();
        if colours.is_empty() {
            tracing::debug!("Skipping '{}': no colour variants", title);
            continue;
        }

        let mut fields: Option<BlockFields> = None;
        for colour in colours {
            if catalog.contains_key(&variant_key(&title, colour)) {
                continue;
            }

            let shared = fields.get_or_insert_with(|| read_block(block, &title, base_path));
            if catalog.insert(shared.variant(colour)) {
                added += 1;
            }
        }
    }

    added
}

/// Reads the shared fields of a product block
fn read_block(block: ElementRef<'_>, title: &str, base_path: &str) -> BlockFields {
    let info_lines: Vec<String> = block.select(&selectors::INFO_LINE).map(element_text).collect();

    let availability_text = info_lines
        .first()
        .and_then(|line| line.split(": ").nth(1))
        .map(|label| label.trim().to_string())
        .unwrap_or_else(|| OUT_OF_STOCK.to_string());

    let (shipping_text, shipping_date) = match info_lines.as_slice() {
        [_, .., last] => (last.clone(), format_shipping_date(last)),
        _ => (String::new(), String::new()),
    };

    let image_src = block
        .select(&selectors::IMAGE)
        .next()
        .and_then(|img| img.value().attr("src"))
        .unwrap_or_default();

    BlockFields {
        title: title.to_string(),
        price: clean_price(&first_text(block, &selectors::PRICE)),
        image_url: clean_url_with_base(image_src, base_path),
        capacity_mb: get_capacity(&first_text(block, &selectors::CAPACITY)),
        is_available: is_available(&availability_text),
        availability_text,
        shipping_text,
        shipping_date,
    }
}

/// Text of the first match inside `scope`, or empty when nothing matches
fn first_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Text content of an element with whitespace runs collapsed and trimmed
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
