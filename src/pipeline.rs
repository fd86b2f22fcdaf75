//! The lookup pipeline: classify → build URL → fetch → extract.
//!
//! A pure function of the raw input plus a single outbound HTTP call. The
//! Discord layer only maps the outcome onto replies; nothing here depends
//! on the gateway session.

use thiserror::Error;
use tracing::warn;

use crate::extractor::{self, Product};
use crate::fetcher::{self, FetchError};
use crate::sku::{self, ProductUrl};

/// Outcome of a successful lookup. The URL rides along so the reply can
/// carry a link button back to the scraped page.
#[derive(Debug)]
pub struct Lookup {
    pub product: Product,
    pub url: ProductUrl,
}

#[derive(Error, Debug)]
pub enum LookupError {
    /// Input matched neither SKU shape; no request was made.
    #[error("input is not a recognizable SKU")]
    InvalidSku,

    /// The catalog answered, but without a usable product page.
    #[error("product page unavailable: {0}")]
    NotFound(FetchError),

    /// The request itself failed.
    #[error("fetch failed: {0}")]
    Fetch(FetchError),
}

impl LookupError {
    /// Fixed reply shown in the channel for this failure. Transport causes
    /// are logged by the pipeline, never echoed to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::InvalidSku => "Désolé, SKU invalide",
            LookupError::NotFound(_) => {
                "Désolé, soit ce SKU n'existe pas, soit il n'est pas enregistré sur TN Universe"
            }
            LookupError::Fetch(_) => "Erreur lors de la récupération des données du produit.",
        }
    }
}

impl From<FetchError> for LookupError {
    fn from(err: FetchError) -> Self {
        if err.is_not_found() {
            LookupError::NotFound(err)
        } else {
            LookupError::Fetch(err)
        }
    }
}

/// Run the full pipeline against the production catalog.
pub async fn lookup(raw: &str) -> Result<Lookup, LookupError> {
    lookup_with_base(sku::BASE_URL, raw).await
}

/// Same pipeline against an arbitrary catalog base; integration tests
/// substitute a local server here.
pub async fn lookup_with_base(base: &str, raw: &str) -> Result<Lookup, LookupError> {
    let sku = sku::classify(raw).ok_or(LookupError::InvalidSku)?;
    let url = sku::product_url_with_base(base, &sku);

    let fragment = match fetcher::fetch_fragment(&url).await {
        Ok(fragment) => fragment,
        Err(err) => {
            let err = LookupError::from(err);
            if let LookupError::Fetch(cause) = &err {
                warn!(%url, error = %cause, "product fetch failed");
            }
            return Err(err);
        }
    };

    let product = extractor::extract(&fragment);
    Ok(Lookup { product, url })
}
