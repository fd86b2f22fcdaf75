use serde::{Deserialize, Serialize};

/// Placeholder for attribute rows the page does not carry.
pub const NOT_FOUND: &str = "Not found";

/// The record extracted from one product page.
///
/// Built once per successful fetch and dropped after the reply goes out;
/// nothing is cached between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub image_url: Option<String>,
    pub name: String,
    pub production_date: String,
    pub country_manufacture: String,
    pub color: String,
}
