//! Field extraction from a product page fragment.
//!
//! TN Universe is a WooCommerce storefront: product attributes are rows of
//! a `shop_attributes` table (label in the `th`, value as an anchor in the
//! `td`), and the gallery image keeps its real source in `data-src`
//! because of lazy loading.

pub mod model;

#[cfg(test)]
mod tests;

pub use model::{NOT_FOUND, Product};

use std::collections::HashMap;

use scraper::{Html, Selector};

use crate::fetcher::ContentFragment;

const LABEL_NAME: &str = "Name(s)";
const LABEL_PRODUCTION_DATE: &str = "Production Date";
const LABEL_COUNTRY: &str = "Country of Manufacture";
const LABEL_COLORWAY: &str = "Colorway";

/// Extract the product record from a fetched fragment.
///
/// Total: an attribute row or image the page lacks degrades to its
/// sentinel, never an error, so a half-filled page still yields a reply.
pub fn extract(fragment: &ContentFragment) -> Product {
    let document = Html::parse_fragment(fragment.as_str());
    let mut attributes = attribute_map(&document);

    Product {
        image_url: gallery_image(&document),
        name: attributes.remove(LABEL_NAME).unwrap_or_else(not_found),
        production_date: attributes
            .remove(LABEL_PRODUCTION_DATE)
            .unwrap_or_else(not_found),
        country_manufacture: attributes.remove(LABEL_COUNTRY).unwrap_or_else(not_found),
        color: attributes.remove(LABEL_COLORWAY).unwrap_or_else(not_found),
    }
}

fn not_found() -> String {
    NOT_FOUND.to_string()
}

/// One pass over all attribute rows, trimmed `th` text → anchor text.
/// The first row wins when a label repeats; a row whose data cell has no
/// anchor maps its label to the sentinel, matching row order semantics.
fn attribute_map(document: &Html) -> HashMap<String, String> {
    let mut map = HashMap::new();

    let Ok(rows) = Selector::parse(".shop_attributes tr") else {
        return map;
    };
    let Ok(header) = Selector::parse("th") else {
        return map;
    };
    let Ok(anchor) = Selector::parse("td a") else {
        return map;
    };

    for row in document.select(&rows) {
        let Some(th) = row.select(&header).next() else {
            continue;
        };
        let label = th.text().collect::<String>().trim().to_string();
        let value = row
            .select(&anchor)
            .next()
            .map(|a| a.text().collect::<String>().trim().to_string())
            .unwrap_or_else(not_found);
        map.entry(label).or_insert(value);
    }

    map
}

fn gallery_image(document: &Html) -> Option<String> {
    let selector = Selector::parse(".woocommerce-product-gallery__image img").ok()?;
    let img = document.select(&selector).next()?;
    img.value().attr("data-src").map(str::to_string)
}
