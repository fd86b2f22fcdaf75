use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("http status {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("page has no main content region")]
    MissingContent,

    #[error("transport failure: {0}")]
    Transport(String),
}

impl FetchError {
    /// True when the remote answered but without a usable product page.
    /// The caller words this as "not found" rather than a hard failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BadStatus(_) | Self::MissingContent)
    }

    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::BadStatus(status)
        } else {
            // DNS, connection, timeout and protocol errors all land here
            Self::Transport(err.to_string())
        }
    }
}
