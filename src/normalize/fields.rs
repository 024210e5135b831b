use regex::Regex;
use std::sync::LazyLock;

/// Base path substituted for relative-parent markers in scraped links
pub const DEFAULT_BASE_PATH: &str = "https://www.magpiehq.com/developer-challenge/";

const PARENT_MARKER: &str = "../";

/// Leading decimal number, as read from a capacity label like `1.5GB`
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)").expect("valid number pattern"));

/// Removes the pound sign from a price label
///
/// No other transformation happens: thousands separators and any
/// surrounding text are left alone.
///
/// ```
/// use catalog_crawl::normalize::clean_price;
///
/// assert_eq!(clean_price("£399.99"), "399.99");
/// ```
pub fn clean_price(text: &str) -> String {
    text.replace('£', "")
}

/// Rewrites every `../` in a link against [`DEFAULT_BASE_PATH`]
pub fn clean_url(text: &str) -> String {
    clean_url_with_base(text, DEFAULT_BASE_PATH)
}

/// Rewrites every `../` in a link against the given base path
///
/// # Arguments
///
/// * `text` - An image `src` or pagination `href`
/// * `base` - Replacement for each relative-parent marker, ending in `/`
pub fn clean_url_with_base(text: &str, base: &str) -> String {
    text.replace(PARENT_MARKER, base)
}

/// Normalizes a storage capacity label to megabytes
///
/// Spaces are stripped first. Labels containing `GB` are converted with a
/// binary multiplier (1 GB = 1024 MB) and suffixed with `MB`; anything else
/// is returned space-stripped but otherwise untouched.
///
/// # Examples
///
/// ```
/// use catalog_crawl::normalize::get_capacity;
///
/// assert_eq!(get_capacity("4 GB"), "4096MB");
/// assert_eq!(get_capacity("128MB"), "128MB");
/// ```
pub fn get_capacity(value: &str) -> String {
    let capacity = value.replace(' ', "");
    if !capacity.contains("GB") {
        return capacity;
    }

    let number = leading_number(capacity.replace("GB", "").trim());
    format!("{}MB", number * 1024.0)
}

/// Reads the numeric prefix of a string, or zero when there is none
fn leading_number(text: &str) -> f64 {
    LEADING_NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}
