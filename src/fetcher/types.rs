/// Inner markup of the fetched page's `<main>` element.
///
/// Transient: parsed once by the extractor, then dropped. The rest of the
/// document (navigation, scripts, footer) never leaves the fetcher.
#[derive(Debug, Clone)]
pub struct ContentFragment(String);

impl ContentFragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
