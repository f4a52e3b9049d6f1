use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use xtrema_common::models::InlineImage;
use xtrema_common::models::image::DEFAULT_IMAGE_MIME;

/// Retrieves a remote image so it can be submitted inline.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> anyhow::Result<InlineImage>;
}

pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &Url) -> anyhow::Result<InlineImage> {
        tracing::debug!("Fetching remote image {}", url);

        let response = self.client.get(url.clone()).send().await?.error_for_status()?;

        // Keep the server's media type only when it is actually an image.
        let mime = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| v.starts_with("image/"))
            .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string());

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(anyhow::anyhow!("Remote image at {} is empty", url));
        }

        tracing::debug!("Fetched {} bytes ({}) from {}", bytes.len(), mime, url);
        Ok(InlineImage::from_bytes(mime, &bytes))
    }
}

/// Fetcher used when the network is switched off. Remote images are refused
/// without a request being made.
#[derive(Debug, Default, Clone)]
pub struct OfflineFetcher;

#[async_trait]
impl ImageFetcher for OfflineFetcher {
    async fn fetch(&self, url: &Url) -> anyhow::Result<InlineImage> {
        Err(anyhow::anyhow!("offline mode: not fetching {}", url))
    }
}
