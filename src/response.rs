use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header;
use url::Url;

use crate::config::Config;
use crate::model::CloudFormationResponse;
use crate::Error;

/// Delivers a serialized response to the pre-signed `ResponseURL`.
pub trait Transport {
    fn put(&self, url: &Url, body: &str) -> Result<(), Error>;
}

impl<'a, T: Transport + ?Sized> Transport for &'a T {
    fn put(&self, url: &Url, body: &str) -> Result<(), Error> {
        (**self).put(url, body)
    }
}

/// Blocking HTTPS PUT.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        HttpTransport { timeout: timeout }
    }

    pub fn from_config(config: &Config) -> Self {
        HttpTransport::new(config.response_timeout())
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        HttpTransport::from_config(&Config::default())
    }
}

impl Transport for HttpTransport {
    fn put(&self, url: &Url, body: &str) -> Result<(), Error> {
        let transport_error = |source| Error::Transport {
            url: url.clone(),
            source: source,
        };

        let client = Client::builder().timeout(self.timeout).build().map_err(transport_error)?;
        // The pre-signed S3 URL is not signed for a content type
        let response = client
            .put(url.clone())
            .header(header::CONTENT_TYPE, "")
            .body(body.to_owned())
            .send()
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().unwrap_or_default();
            error!("S3 response: {} {}", status, body);

            Err(Error::Delivery {
                url: url.clone(),
                status: status.as_u16(),
                body: body,
            })
        }
    }
}

pub fn send<T: Transport>(transport: &T, url: &str, response: &CloudFormationResponse) -> Result<(), Error> {
    let url = Url::parse(url).map_err(|source| Error::ResponseUrl {
        url: url.into(),
        source: source,
    })?;
    let response_json = serde_json::to_string(response)?;

    debug!("sending response to {} request {}", url, response_json);
    transport.put(&url, &response_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        sent: RefCell<Vec<(Url, String)>>,
    }

    impl Transport for Recorder {
        fn put(&self, url: &Url, body: &str) -> Result<(), Error> {
            self.sent.borrow_mut().push((url.clone(), body.into()));
            Ok(())
        }
    }

    #[test]
    fn sends_json_body() {
        let recorder = Recorder::default();
        let response = CloudFormationResponse::default();
        send(&recorder, "https://example.com/put?sig=1", &response).unwrap();

        let sent = recorder.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0.as_str(), "https://example.com/put?sig=1");
        let body: CloudFormationResponse = serde_json::from_str(&sent[0].1).unwrap();
        assert_eq!(body, response);
    }

    #[test]
    fn rejects_bad_url() {
        let recorder = Recorder::default();
        match send(&recorder, "not a url", &CloudFormationResponse::default()) {
            Err(Error::ResponseUrl { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(recorder.sent.borrow().is_empty());
    }
}
