//! CSS selectors for the product listing markup
//!
//! Block-level selectors are applied to a whole page; field selectors are
//! applied inside one product block

use scraper::Selector;
use std::sync::LazyLock;

fn parse(selector: &str) -> Selector {
    Selector::parse(selector).expect("static selector is valid")
}

/// One product block in the listing grid
pub static PRODUCT: LazyLock<Selector> = LazyLock::new(|| parse("div > .flex-wrap > .product"));

/// Product name plus capacity label
pub static TITLE: LazyLock<Selector> = LazyLock::new(|| parse("h3"));

/// Capacity label inside the title
pub static CAPACITY: LazyLock<Selector> = LazyLock::new(|| parse("h3 > .product-capacity"));

pub static PRICE: LazyLock<Selector> = LazyLock::new(|| parse(".my-8.text-center"));

pub static IMAGE: LazyLock<Selector> = LazyLock::new(|| parse("img"));

/// Colour swatches; each carries [`COLOUR_ATTR`]
pub static COLOUR: LazyLock<Selector> = LazyLock::new(|| parse(".px-2 > span"));

pub const COLOUR_ATTR: &str = "data-colour";

/// Small print lines: availability first, shipping last
pub static INFO_LINE: LazyLock<Selector> = LazyLock::new(|| parse(".my-4.text-sm"));

/// Links in the page switcher
pub static PAGE_LINK: LazyLock<Selector> = LazyLock::new(|| parse("#pages .flex-wrap a"));

/// Class marking the page currently displayed
pub const ACTIVE_CLASS: &str = "active";
