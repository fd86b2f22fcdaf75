use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use scraper::{Html, Selector};
use tracing::instrument;

use crate::fetcher::{errors::FetchError, types::ContentFragment};
use crate::sku::ProductUrl;

// The catalog serves a stripped-down page to non-browser agents; present
// the same desktop identity the site is known to accept.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:130.0) Gecko/20100101 Firefox/130.0";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .user_agent(USER_AGENT)
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(reqwest::header::ACCEPT, "text/html".parse().unwrap());
            headers
        })
        .build()
        .expect("Failed to build HTTP client")
});

/// Fetch a product page and return the inner markup of its `<main>`
/// element. Exactly one GET per call: no retries, no caching, transport
/// defaults for timeouts and redirects.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_fragment(url: &ProductUrl) -> Result<ContentFragment, FetchError> {
    let parsed_url = url::Url::parse(url.as_str())?;

    let response = HTTP_CLIENT
        .get(parsed_url)
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::BadStatus(status));
    }

    let body = response
        .text()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    main_content(&body).ok_or(FetchError::MissingContent)
}

// `scraper::Html` is not Send; keep it inside a sync helper so the fetch
// future stays spawnable.
fn main_content(document: &str) -> Option<ContentFragment> {
    let document = Html::parse_document(document);
    let selector = Selector::parse("main").ok()?;
    let main = document.select(&selector).next()?;
    Some(ContentFragment::new(main.inner_html()))
}
