// File: xtrema-ai/tests/gateway_tests.rs

mod test_utils;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;
use url::Url;

use test_utils::{closed_port_url, serve_once};
use xtrema_ai::{AnalysisGateway, FALLBACK_ANALYSIS, GeminiConfig, HttpImageFetcher, ImageFetcher};
use xtrema_common::models::{ImageRef, InlineImage, WasteAnalysis};

fn config_for(api_base: &str) -> GeminiConfig {
    GeminiConfig {
        api_key: "test-key".to_string(),
        api_base: api_base.to_string(),
        model: "gemini-test".to_string(),
        timeout_secs: Some(5),
    }
}

fn gemini_reply(analysis_json: &str) -> Vec<u8> {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": analysis_json }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
    .into_bytes()
}

#[tokio::test]
async fn remote_image_round_trip_submits_inline_payload() {
    let image_bytes = b"\x89PNG fake image bytes".to_vec();
    let (image_base, image_server) = serve_once("200 OK", "image/png", image_bytes.clone()).await;
    let (gemini_base, gemini_server) = serve_once(
        "200 OK",
        "application/json",
        gemini_reply(r#"{"plastic":30,"glass":20,"cardboard":20,"metal":15,"trash":15}"#),
    )
    .await;

    let gateway = AnalysisGateway::from_config(config_for(&gemini_base), false).unwrap();
    let image_url = format!("{}/drive/plastic_bottles.png", image_base);
    let image = ImageRef::parse(&image_url).unwrap();

    let result = gateway.analyze(&image).await;
    assert_eq!(result, WasteAnalysis::new(30.0, 20.0, 20.0, 15.0, 15.0));
    assert_eq!(result.total(), 100.0);

    let image_request = image_server.await.unwrap();
    assert!(image_request.starts_with("GET /drive/plastic_bottles.png"));

    let gemini_request = gemini_server.await.unwrap();
    assert!(gemini_request.starts_with("POST /models/gemini-test:generateContent"));
    assert!(gemini_request.to_lowercase().contains("x-goog-api-key: test-key"));
    assert!(gemini_request.contains("\"inlineData\""));
    assert!(gemini_request.contains("\"mimeType\":\"image/png\""));
    assert!(gemini_request.contains(&STANDARD.encode(&image_bytes)));
    assert!(!gemini_request.contains(&image_url));
}

#[tokio::test]
async fn unreachable_service_returns_fallback() {
    let gateway = AnalysisGateway::from_config(config_for(&closed_port_url().await), false).unwrap();
    let image = ImageRef::Inline(InlineImage::from_bytes("image/jpeg", b"jpeg"));
    assert_eq!(gateway.analyze(&image).await, FALLBACK_ANALYSIS);
}

#[tokio::test]
async fn server_error_page_returns_fallback() {
    let (gemini_base, _server) = serve_once(
        "503 Service Unavailable",
        "text/html",
        b"<html>overloaded</html>".to_vec(),
    )
    .await;
    let gateway = AnalysisGateway::from_config(config_for(&gemini_base), false).unwrap();
    let image = ImageRef::Inline(InlineImage::from_bytes("image/jpeg", b"jpeg"));
    assert_eq!(gateway.analyze(&image).await, FALLBACK_ANALYSIS);
}

#[tokio::test]
async fn api_error_body_returns_fallback() {
    let body = json!({"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}})
        .to_string()
        .into_bytes();
    let (gemini_base, _server) = serve_once("400 Bad Request", "application/json", body).await;
    let gateway = AnalysisGateway::from_config(config_for(&gemini_base), false).unwrap();
    let image = ImageRef::Inline(InlineImage::from_bytes("image/jpeg", b"jpeg"));
    assert_eq!(gateway.analyze(&image).await, FALLBACK_ANALYSIS);
}

#[tokio::test]
async fn offline_gateway_never_calls_out() {
    let gateway = AnalysisGateway::from_config(config_for(&closed_port_url().await), true).unwrap();
    assert_eq!(gateway.provider_name(), "offline");
    let image = ImageRef::Inline(InlineImage::from_bytes("image/jpeg", b"jpeg"));
    assert_eq!(gateway.analyze(&image).await, FALLBACK_ANALYSIS);
}

#[tokio::test]
async fn offline_gateway_does_not_fetch_remote_images() {
    let (image_base, image_server) = serve_once("200 OK", "image/png", b"png".to_vec()).await;
    let gateway = AnalysisGateway::from_config(config_for(&closed_port_url().await), true).unwrap();
    let image = ImageRef::parse(&format!("{}/drive/x.png", image_base)).unwrap();

    assert_eq!(gateway.analyze(&image).await, FALLBACK_ANALYSIS);

    // A request would have let the one-shot server finish by now.
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    assert!(!image_server.is_finished());
    image_server.abort();
}

#[tokio::test]
async fn fetcher_defaults_non_image_content_type_to_jpeg() {
    let (base, _server) = serve_once("200 OK", "application/octet-stream", b"raw".to_vec()).await;
    let fetcher = HttpImageFetcher::new(reqwest::Client::new());
    let url = Url::parse(&format!("{}/blob", base)).unwrap();

    let inline = fetcher.fetch(&url).await.unwrap();
    assert_eq!(inline.mime_type, "image/jpeg");
    assert_eq!(inline.decode().unwrap(), b"raw");
}

#[tokio::test]
async fn fetcher_rejects_missing_image() {
    let (base, _server) = serve_once("404 Not Found", "text/plain", b"nope".to_vec()).await;
    let fetcher = HttpImageFetcher::new(reqwest::Client::new());
    let url = Url::parse(&format!("{}/gone.jpg", base)).unwrap();
    assert!(fetcher.fetch(&url).await.is_err());
}
