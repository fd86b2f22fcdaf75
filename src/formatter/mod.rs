//! Projection from an extracted [`Product`] to a display card.
//!
//! Kept free of any Discord type so the card can be unit tested and
//! rendered by whatever surface delivers the reply.

use chrono::{DateTime, Utc};

use crate::extractor::Product;
use crate::sku::ProductUrl;

pub const FOOTER_TEXT: &str = "TN Universe";
pub const LINK_LABEL: &str = "Voir sur TN Universe";

pub const FIELD_PRODUCTION_DATE: &str = "Date de Production";
pub const FIELD_COUNTRY: &str = "Pays de Fabrication";
pub const FIELD_COLORWAY: &str = "Colorway";

/// One labeled value on the card; `inline` asks the renderer for the
/// side-by-side layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub name: &'static str,
    pub value: String,
    pub inline: bool,
}

/// External link affordance pointing back at the scraped page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkButton {
    pub label: &'static str,
    pub url: String,
}

/// Renderer-agnostic reply card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub title: String,
    pub fields: Vec<CardField>,
    pub image_url: Option<String>,
    pub footer: &'static str,
    pub generated_at: DateTime<Utc>,
    pub link: Option<LinkButton>,
}

/// Assemble the reply card. The title carries the name field as-is, even
/// when it is the sentinel; the image and link slots stay empty when their
/// sources are absent.
pub fn render(product: &Product, source_url: Option<&ProductUrl>) -> ProductCard {
    ProductCard {
        title: product.name.clone(),
        fields: vec![
            CardField {
                name: FIELD_PRODUCTION_DATE,
                value: product.production_date.clone(),
                inline: true,
            },
            CardField {
                name: FIELD_COUNTRY,
                value: product.country_manufacture.clone(),
                inline: true,
            },
            CardField {
                name: FIELD_COLORWAY,
                value: product.color.clone(),
                inline: true,
            },
        ],
        image_url: product.image_url.clone(),
        footer: FOOTER_TEXT,
        generated_at: Utc::now(),
        link: source_url.map(|url| LinkButton {
            label: LINK_LABEL,
            url: url.as_str().to_string(),
        }),
    }
}
