use photogallery_core::error::{Error, Result};
use photogallery_core::loader::{FetchResponse, ManifestSource};
use photogallery_core::url::manifest_url;

/// Fetches `{base}/images.json` over HTTP.
pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base: &str) -> Self {
        Self {
            url: manifest_url(base),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl ManifestSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<FetchResponse> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(FetchResponse { status, body })
    }
}

/// True for bases that must be fetched over the network.
pub fn is_remote(base: &str) -> bool {
    base.starts_with("http://") || base.starts_with("https://")
}
