use ::scraper::error::SelectorErrorKind;

/// All errors that can occur during NPB scraping operations.
#[derive(thiserror::Error, Debug)]
pub enum NpbError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The HTTP client could not be built from the given configuration.
    #[error("failed to build http client: {0}")]
    HttpClient(reqwest::Error),

    /// A configured header value contains characters HTTP does not allow.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// A text pattern could not be compiled.
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    /// No team in the registry has the given identifier.
    #[error("team not found: {0}")]
    TeamNotFound(String),

    /// Player identifiers are exactly eight decimal digits.
    #[error("invalid player id format: {0}, expected 8 digits")]
    InvalidPlayerId(String),

    /// Fetching or reading a player's detail page failed.
    #[error("failed to fetch player details for id {player_id}: {source}")]
    PlayerDetails {
        player_id: String,
        source: Box<NpbError>,
    },
}

impl<'a> From<SelectorErrorKind<'a>> for NpbError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        NpbError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NpbError>;
