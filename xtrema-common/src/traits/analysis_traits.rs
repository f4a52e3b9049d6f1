// File: xtrema-common/src/traits/analysis_traits.rs

use async_trait::async_trait;

use crate::models::{ImageRef, WasteAnalysis};

/// Turns an image into a category breakdown.
///
/// Implementations always produce a usable value; failures are absorbed and
/// logged on their side of the boundary.
#[async_trait]
pub trait WasteAnalyzer: Send + Sync {
    async fn analyze(&self, image: &ImageRef) -> WasteAnalysis;
}
