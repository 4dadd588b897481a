//! The single network operation the gallery performs: a plain GET.
//!
//! [`ReqwestTransport`] runs on both targets; in the browser reqwest drives
//! `window.fetch`, so relative locations are resolved against the page URL
//! before the request is issued.

use reqwest::{Client, Url};

use crate::error::GalleryError;

#[allow(async_fn_in_trait)]
pub trait Transport {
    type Response: TransportResponse;

    /// Issues one GET for `url` and resolves once the response head arrives.
    async fn get(&self, url: &str) -> Result<Self::Response, GalleryError>;
}

#[allow(async_fn_in_trait)]
pub trait TransportResponse {
    fn status(&self) -> u16;

    /// Reads the whole body. This is the second point where the pipeline waits.
    async fn bytes(self) -> Result<Vec<u8>, GalleryError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base: Url,
}

impl ReqwestTransport {
    /// Creates a transport resolving relative locations against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Network`] if `base` is not an absolute URL.
    pub fn new(base: &str) -> Result<Self, GalleryError> {
        Self::with_client(Client::new(), base)
    }

    /// Like [`ReqwestTransport::new`], with a preconfigured client.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Network`] if `base` is not an absolute URL.
    pub fn with_client(client: Client, base: &str) -> Result<Self, GalleryError> {
        let base = Url::parse(base)
            .map_err(|e| GalleryError::Network(format!("invalid page URL {base}: {e}")))?;
        Ok(Self { client, base })
    }

    /// Resolves `url` the way a browser resolves it against the page location.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Network`] if the location cannot be joined.
    pub fn resolve(&self, url: &str) -> Result<Url, GalleryError> {
        self.base
            .join(url)
            .map_err(|e| GalleryError::Network(format!("invalid location {url}: {e}")))
    }
}

impl Transport for ReqwestTransport {
    type Response = reqwest::Response;

    async fn get(&self, url: &str) -> Result<Self::Response, GalleryError> {
        let url = self.resolve(url)?;
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| GalleryError::Network(e.to_string()))
    }
}

impl TransportResponse for reqwest::Response {
    fn status(&self) -> u16 {
        reqwest::Response::status(self).as_u16()
    }

    async fn bytes(self) -> Result<Vec<u8>, GalleryError> {
        reqwest::Response::bytes(self)
            .await
            .map(|body| body.to_vec())
            .map_err(|e| GalleryError::Network(e.to_string()))
    }
}
