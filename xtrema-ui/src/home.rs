use std::path::Path;

use tracing::{info, warn};

use xtrema_common::Error;
use xtrema_common::models::ImageRef;
use xtrema_common::traits::WasteAnalyzer;

use crate::events::UIEvent;

/// An entry in the sample drive picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveFile {
    pub id: u32,
    pub name: &'static str,
    pub url: &'static str,
    pub size: &'static str,
}

pub const DRIVE_FILES: [DriveFile; 6] = [
    DriveFile {
        id: 1,
        name: "waste_collection_01.jpg",
        url: "https://images.unsplash.com/photo-1532996122724-e3c354a0b15b?auto=format&fit=crop&q=80&w=400",
        size: "2.4 MB",
    },
    DriveFile {
        id: 2,
        name: "plastic_bottles.png",
        url: "https://images.unsplash.com/photo-1595273670150-db0a3d39074f?auto=format&fit=crop&q=80&w=400",
        size: "1.1 MB",
    },
    DriveFile {
        id: 3,
        name: "cardboard_boxes.jpg",
        url: "https://images.unsplash.com/photo-1589939705384-5185137a7f0f?auto=format&fit=crop&q=80&w=400",
        size: "3.7 MB",
    },
    DriveFile {
        id: 4,
        name: "glass_recycling.jpg",
        url: "https://images.unsplash.com/photo-1618477462146-050d2767eac4?auto=format&fit=crop&q=80&w=400",
        size: "1.8 MB",
    },
    DriveFile {
        id: 5,
        name: "mixed_trash_bins.jpg",
        url: "https://images.unsplash.com/photo-1611284446314-60a58ac0deb9?auto=format&fit=crop&q=80&w=400",
        size: "4.2 MB",
    },
    DriveFile {
        id: 6,
        name: "metal_scraps.jpg",
        url: "https://images.unsplash.com/photo-1558449028-b53a39d100fc?auto=format&fit=crop&q=80&w=400",
        size: "2.9 MB",
    },
];

/// Local state of the upload screen: the selected image, whether the drive
/// picker is open, and whether an analysis is in flight.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    preview: Option<ImageRef>,
    drive_open: bool,
    busy: bool,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview(&self) -> Option<&ImageRef> {
        self.preview.as_ref()
    }

    pub fn is_drive_open(&self) -> bool {
        self.drive_open
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The "generate report" control is live only with an image selected and
    /// nothing already running.
    pub fn can_generate(&self) -> bool {
        self.preview.is_some() && !self.busy
    }

    pub fn set_preview(&mut self, image: ImageRef) {
        self.preview = Some(image);
    }

    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    pub fn select_local_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let image = ImageRef::from_file(path)?;
        self.set_preview(image);
        Ok(())
    }

    pub fn connect_drive(&mut self) {
        self.drive_open = true;
    }

    pub fn cancel_drive(&mut self) {
        self.drive_open = false;
    }

    /// Files whose name contains `query`, ignoring case.
    pub fn search_drive(query: &str) -> Vec<&'static DriveFile> {
        let query = query.trim().to_lowercase();
        DRIVE_FILES
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn select_drive_file(&mut self, id: u32) -> Result<&'static DriveFile, Error> {
        let file = DRIVE_FILES
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| Error::Validation(format!("no drive file with id {id}")))?;
        self.set_preview(ImageRef::parse(file.url)?);
        self.drive_open = false;
        Ok(file)
    }

    /// Marks an analysis as started and hands back the image to analyze.
    /// Returns `None` when there is nothing selected or one is already
    /// running.
    pub fn begin_analysis(&mut self) -> Option<ImageRef> {
        if !self.can_generate() {
            return None;
        }
        self.busy = true;
        self.preview.clone()
    }

    pub fn finish_analysis(&mut self) {
        self.busy = false;
    }

    /// Runs the analyzer on the selected image and produces the event that
    /// moves the controller to the report.
    pub async fn generate_report(&mut self, analyzer: &dyn WasteAnalyzer) -> Option<UIEvent> {
        let Some(image) = self.begin_analysis() else {
            warn!("Generate report requested without an image or while busy");
            return None;
        };

        info!("Analyzing {}", image);
        let analysis = analyzer.analyze(&image).await;
        self.finish_analysis();

        Some(UIEvent::ReportGenerated { analysis, image })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
