//! SKU classification and product-URL construction.
//!
//! TN Universe accepts two textual shapes for a product identifier: the
//! canonical hyphenated form (`BQ4629-001`) and a compact nine-character
//! form (`604133001`) that users paste without the hyphen. Anything else
//! is rejected here, before any network traffic happens.

use once_cell::sync::Lazy;
use regex::Regex;

/// Catalog root. Product pages live under `/produit/<sku>`.
pub const BASE_URL: &str = "https://tnuniverse.com";

static HYPHENATED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{6}-\d{3}$").expect("valid sku regex"));
static COMPACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{9}$").expect("valid sku regex"));

/// A validated product identifier, held in canonical `XXXXXX-XXX` form.
///
/// Both accepted shapes are uppercased on classification so one SKU always
/// maps to one URL no matter how the user typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sku {
    /// Input already carried the hyphen.
    Hyphenated(String),
    /// Nine characters without a hyphen; one was inserted after position 6.
    Compact(String),
}

impl Sku {
    /// Canonical hyphenated form used in the catalog path.
    pub fn canonical(&self) -> &str {
        match self {
            Sku::Hyphenated(s) | Sku::Compact(s) => s,
        }
    }
}

/// Classify raw user input. `None` for anything that is not a SKU in one
/// of the two accepted shapes. No side effects.
pub fn classify(raw: &str) -> Option<Sku> {
    if HYPHENATED.is_match(raw) {
        Some(Sku::Hyphenated(raw.to_uppercase()))
    } else if COMPACT.is_match(raw) {
        // ASCII-only per the regex, so byte slicing is safe
        let normalized = format!("{}-{}", &raw[..6], &raw[6..]).to_uppercase();
        Some(Sku::Compact(normalized))
    } else {
        None
    }
}

/// Opaque catalog URL for one product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUrl(String);

impl ProductUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Map a classified SKU to its catalog page. Pure and deterministic: one
/// SKU, one URL.
pub fn product_url(sku: &Sku) -> ProductUrl {
    product_url_with_base(BASE_URL, sku)
}

/// Same mapping against an arbitrary base; integration tests point this at
/// a local mock server.
pub fn product_url_with_base(base: &str, sku: &Sku) -> ProductUrl {
    ProductUrl(format!(
        "{}/produit/{}",
        base.trim_end_matches('/'),
        sku.canonical()
    ))
}
