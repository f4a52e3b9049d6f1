pub mod fetch;
pub mod gateway;
pub mod models;
pub mod provider;

// Re-export public APIs
pub use fetch::{HttpImageFetcher, ImageFetcher, OfflineFetcher};
pub use gateway::{ANALYSIS_INSTRUCTION, AnalysisGateway, FALLBACK_ANALYSIS, analysis_schema};
pub use models::GeminiConfig;
pub use provider::{GeminiProvider, OfflineProvider, VisionProvider};
