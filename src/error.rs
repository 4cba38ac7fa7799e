use url::Url;

/// Faults that escape `handle`: the response could not be delivered, or the batch was malformed.
///
/// Everything that goes wrong while processing a single event ends up in a FAILED response instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to put the response to {url} status code {status}, {body}")]
    Delivery {
        url: Url,
        status: u16,
        body: String,
    },
    #[error("failed to put the response to {url}: {source}")]
    Transport {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid ResponseURL {url:?}: {source}")]
    ResponseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("The provided event is not compliant with the SNS schema: {0}")]
    Envelope(String),
    #[error("invalid CloudFormation request in SNS record {index}: {source}")]
    Message {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
