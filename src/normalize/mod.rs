//! Field normalizers
//!
//! Pure functions turning raw text fragments from a product block into
//! canonical field values. None of them fail: text that cannot be
//! normalized comes back empty (dates) or unchanged (capacities).

mod date;
mod fields;

pub use date::{format_shipping_date, format_shipping_date_from};
pub use fields::{clean_price, clean_url, clean_url_with_base, get_capacity, DEFAULT_BASE_PATH};
