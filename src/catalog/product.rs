use serde::{Deserialize, Serialize};

/// Availability label used when a block has none, and the only label
/// that marks a product unavailable
pub const OUT_OF_STOCK: &str = "Out of Stock";

/// One colour variant of a listed product
///
/// Serialized field names are part of the output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,

    /// Price text without the currency symbol
    pub price: String,

    #[serde(rename = "imageUrl")]
    pub image_url: String,

    /// Storage capacity, e.g. `65536MB`
    #[serde(rename = "capacityMB")]
    pub capacity_mb: String,

    pub colour: String,

    #[serde(rename = "availabilityText")]
    pub availability_text: String,

    #[serde(rename = "isAvailable")]
    pub is_available: bool,

    #[serde(rename = "shippingText")]
    pub shipping_text: String,

    /// `YYYY-MM-DD`, or empty when unknown
    #[serde(rename = "shippingDate")]
    pub shipping_date: String,
}

impl Product {
    /// Returns true if a shipping date could be determined
    pub fn has_shipping_date(&self) -> bool {
        !self.shipping_date.is_empty()
    }
}

/// Availability is false only for the exact out-of-stock label
pub fn is_available(availability_text: &str) -> bool {
    availability_text != OUT_OF_STOCK
}
