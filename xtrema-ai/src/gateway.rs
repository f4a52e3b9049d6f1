use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{debug, error, info};

use xtrema_common::Error;
use xtrema_common::models::{ImageRef, InlineImage, WasteAnalysis, WasteCategory};
use xtrema_common::traits::WasteAnalyzer;

use crate::fetch::{HttpImageFetcher, ImageFetcher, OfflineFetcher};
use crate::models::GeminiConfig;
use crate::provider::{GeminiProvider, OfflineProvider, VisionProvider};

/// Returned whenever the real analysis cannot be obtained.
pub const FALLBACK_ANALYSIS: WasteAnalysis = WasteAnalysis::new(45.0, 10.0, 20.0, 15.0, 10.0);

pub const ANALYSIS_INSTRUCTION: &str = "Analyze this image and identify the composition of waste materials. \
Return the percentage (0-100) for each category: plastic, glass, cardboard, metal, and general trash. \
The percentages must sum to 100.";

/// Response schema: an object with exactly the five category fields, all
/// numeric and all required.
pub fn analysis_schema() -> Value {
    let properties: serde_json::Map<String, Value> = WasteCategory::ALL
        .iter()
        .map(|c| (c.field_name().to_string(), json!({ "type": "NUMBER" })))
        .collect();
    let required: Vec<&str> = WasteCategory::ALL.iter().map(|c| c.field_name()).collect();

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

/// Boundary between the application and the external vision model.
///
/// `analyze` never fails: any error on the way (fetching a remote image, the
/// HTTP call, a malformed payload) is logged and replaced by
/// [`FALLBACK_ANALYSIS`].
pub struct AnalysisGateway {
    provider: Arc<dyn VisionProvider>,
    fetcher: Arc<dyn ImageFetcher>,
}

impl AnalysisGateway {
    pub fn new(provider: Arc<dyn VisionProvider>, fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self { provider, fetcher }
    }

    /// Builds the Gemini-backed gateway. With `offline` set, no analysis
    /// request ever leaves the process.
    pub fn from_config(config: GeminiConfig, offline: bool) -> Result<Self, Error> {
        if offline {
            info!("Analysis gateway offline; every report uses the fallback");
            return Ok(Self::new(Arc::new(OfflineProvider), Arc::new(OfflineFetcher)));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let provider: Arc<dyn VisionProvider> = Arc::new(GeminiProvider::new(config, client.clone()));
        info!("Analysis gateway using provider '{}'", provider.name());
        Ok(Self::new(provider, Arc::new(HttpImageFetcher::new(client))))
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub async fn analyze(&self, image: &ImageRef) -> WasteAnalysis {
        match self.try_analyze(image).await {
            Ok(analysis) => analysis,
            Err(e) => {
                error!("Gemini analysis error: {:#}", e);
                FALLBACK_ANALYSIS
            }
        }
    }

    async fn try_analyze(&self, image: &ImageRef) -> anyhow::Result<WasteAnalysis> {
        let inline = self.resolve_inline(image).await?;
        let text = self
            .provider
            .generate(&inline, ANALYSIS_INSTRUCTION, &analysis_schema())
            .await?;
        let analysis = parse_analysis(&text)?;
        debug!("Analysis result: {:?}", analysis);
        Ok(analysis)
    }

    async fn resolve_inline(&self, image: &ImageRef) -> anyhow::Result<InlineImage> {
        match image {
            ImageRef::Inline(inline) => Ok(inline.clone()),
            ImageRef::Remote(url) => self.fetcher.fetch(url).await,
        }
    }
}

/// Parses the model's JSON text. Values are taken as-is, with no range or
/// sum checks.
pub fn parse_analysis(text: &str) -> anyhow::Result<WasteAnalysis> {
    serde_json::from_str::<WasteAnalysis>(text.trim())
        .map_err(|e| anyhow::anyhow!("Malformed analysis payload: {}", e))
}

#[async_trait]
impl WasteAnalyzer for AnalysisGateway {
    async fn analyze(&self, image: &ImageRef) -> WasteAnalysis {
        AnalysisGateway::analyze(self, image).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MockImageFetcher;
    use crate::provider::MockVisionProvider;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use url::Url;

    fn gateway(provider: MockVisionProvider, fetcher: MockImageFetcher) -> AnalysisGateway {
        AnalysisGateway::new(Arc::new(provider), Arc::new(fetcher))
    }

    #[test]
    fn schema_requires_all_five_numeric_fields() {
        let schema = analysis_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, ["plastic", "glass", "cardboard", "metal", "trash"]);
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 5);
        assert!(properties.values().all(|p| p["type"] == "NUMBER"));
    }

    #[tokio::test]
    async fn inline_image_is_submitted_without_fetching() {
        let mut provider = MockVisionProvider::new();
        provider
            .expect_generate()
            .withf(|image, instruction, _schema| {
                image.data == "AAAA" && image.mime_type == "image/png" && instruction.contains("sum to 100")
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(r#"{"plastic":30,"glass":20,"cardboard":20,"metal":15,"trash":15}"#.to_string())
            });
        let mut fetcher = MockImageFetcher::new();
        fetcher.expect_fetch().never();

        let image = ImageRef::Inline(InlineImage::new("image/png", "AAAA"));
        let result = gateway(provider, fetcher).analyze(&image).await;
        assert_eq!(result, WasteAnalysis::new(30.0, 20.0, 20.0, 15.0, 15.0));
    }

    #[tokio::test]
    async fn remote_image_is_fetched_then_sent_inline() {
        let url = Url::parse("https://images.example.com/bins.jpg").unwrap();
        let expected_url = url.clone();

        let mut fetcher = MockImageFetcher::new();
        fetcher
            .expect_fetch()
            .withf(move |u| u.as_str() == expected_url.as_str())
            .times(1)
            .returning(|_| Ok(InlineImage::from_bytes("image/jpeg", b"jpeg-bytes")));

        let encoded = STANDARD.encode(b"jpeg-bytes");
        let mut provider = MockVisionProvider::new();
        provider
            .expect_generate()
            .withf(move |image, _, _| image.data == encoded && !image.data.starts_with("http"))
            .times(1)
            .returning(|_, _, _| {
                Ok(r#"{"plastic":10,"glass":10,"cardboard":60,"metal":10,"trash":10}"#.to_string())
            });

        let result = gateway(provider, fetcher).analyze(&ImageRef::Remote(url)).await;
        assert_eq!(result.cardboard, 60.0);
    }

    #[tokio::test]
    async fn transport_failure_yields_fallback() {
        let mut provider = MockVisionProvider::new();
        provider
            .expect_generate()
            .returning(|_, _, _| Err(anyhow::anyhow!("connection reset")));
        let fetcher = MockImageFetcher::new();

        let image = ImageRef::Inline(InlineImage::new("image/jpeg", "AAAA"));
        assert_eq!(gateway(provider, fetcher).analyze(&image).await, FALLBACK_ANALYSIS);
    }

    #[tokio::test]
    async fn fetch_failure_skips_the_model_and_yields_fallback() {
        let mut fetcher = MockImageFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|_| Err(anyhow::anyhow!("404 Not Found")));
        let mut provider = MockVisionProvider::new();
        provider.expect_generate().never();

        let image = ImageRef::parse("https://images.example.com/missing.jpg").unwrap();
        assert_eq!(gateway(provider, fetcher).analyze(&image).await, FALLBACK_ANALYSIS);
    }

    #[tokio::test]
    async fn malformed_payload_yields_fallback() {
        for payload in ["not json", "{}", r#"{"plastic":"lots"}"#] {
            let mut provider = MockVisionProvider::new();
            let owned = payload.to_string();
            provider
                .expect_generate()
                .returning(move |_, _, _| Ok(owned.clone()));
            let image = ImageRef::Inline(InlineImage::new("image/jpeg", "AAAA"));
            let result = gateway(provider, MockImageFetcher::new()).analyze(&image).await;
            assert_eq!(result, FALLBACK_ANALYSIS, "payload {payload:?}");
        }
    }

    #[test]
    fn parse_accepts_out_of_range_values_as_is() {
        let parsed = parse_analysis(r#" {"plastic":120,"glass":-5,"cardboard":0,"metal":0,"trash":0} "#).unwrap();
        assert_eq!(parsed.plastic, 120.0);
        assert_eq!(parsed.glass, -5.0);
    }
}
