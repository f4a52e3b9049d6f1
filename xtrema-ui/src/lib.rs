pub mod events;
pub mod forms;
pub mod home;
pub mod state;
pub mod views;

pub use events::{Notice, UIEvent};
pub use forms::{ContactForm, FormError, LoginForm, PickupForm};
pub use home::{DRIVE_FILES, DriveFile, HomeState};
pub use state::AppState;
pub use views::{NavItem, RenderedView, ReportView};

use anyhow::Result;

// Trait for different rendering backends
pub trait UIRenderer {
    fn render(&mut self, state: &AppState, home: &HomeState, pickup: &PickupForm) -> Result<()>;
    /// Shows a notice the user has to dismiss before the next view is drawn.
    fn acknowledge(&mut self, notice: &Notice) -> Result<()>;
}
