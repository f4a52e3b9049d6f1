// File: xtrema-common/src/models/mod.rs
pub mod analysis;
pub mod image;
pub mod pickup;
pub mod user;
pub mod view;

pub use analysis::{WasteAnalysis, WasteCategory};
pub use image::{ImageRef, InlineImage};
pub use pickup::{PickupDetails, WasteType};
pub use user::UserProfile;
pub use view::Screen;
