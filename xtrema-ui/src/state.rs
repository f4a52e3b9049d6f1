use tracing::debug;

use xtrema_common::models::{ImageRef, Screen, UserProfile, WasteAnalysis};

use crate::events::{Notice, UIEvent};
use crate::views::{NavItem, RenderedView};

/// The view controller: which screen is active, who is logged in, and the
/// last analysis together with the image it was produced from.
///
/// Every operation is total. Renderers only ever see borrowed state.
#[derive(Debug, Clone)]
pub struct AppState {
    screen: Screen,
    user: UserProfile,
    analysis: Option<WasteAnalysis>,
    image: Option<ImageRef>,
    pending_notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Login,
            user: UserProfile::default(),
            analysis: None,
            image: None,
            pending_notice: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn analysis(&self) -> Option<&WasteAnalysis> {
        self.analysis.as_ref()
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// No credential check: any submitted login succeeds.
    pub fn login(&mut self) {
        self.set_screen(Screen::Home);
    }

    pub fn logout(&mut self) {
        self.set_screen(Screen::Login);
        self.analysis = None;
        self.image = None;
        self.user = UserProfile::default();
        self.pending_notice = None;
    }

    /// Unconditional; a report without data falls back at render time.
    pub fn navigate(&mut self, target: Screen) {
        self.set_screen(target);
    }

    pub fn report_generated(&mut self, analysis: WasteAnalysis, image: ImageRef) {
        self.analysis = Some(analysis);
        self.image = Some(image);
        self.set_screen(Screen::Report);
    }

    /// Returns to home and raises the pickup confirmation, which the front
    /// end must show before it draws the home view.
    pub fn scheduled(&mut self) {
        self.pending_notice = Some(Notice::PickupConfirmed);
        self.set_screen(Screen::Home);
    }

    pub fn pending_notice(&self) -> Option<&Notice> {
        self.pending_notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.pending_notice.take()
    }

    pub fn handle(&mut self, event: UIEvent) {
        match event {
            UIEvent::Login => self.login(),
            UIEvent::Logout => self.logout(),
            UIEvent::Navigate(target) => self.navigate(target),
            UIEvent::ReportGenerated { analysis, image } => self.report_generated(analysis, image),
            UIEvent::SchedulePickup => self.navigate(Screen::Schedule),
            UIEvent::Scheduled => self.scheduled(),
            UIEvent::EarnMore => self.navigate(Screen::Home),
        }
    }

    /// The view to draw. Pure in the current screen, except that the report
    /// needs both an analysis and an image; without them home is shown.
    pub fn rendered_view(&self) -> RenderedView<'_> {
        match self.screen {
            Screen::Login => RenderedView::Login,
            Screen::Home => RenderedView::Home,
            Screen::Report => match (&self.analysis, &self.image) {
                (Some(analysis), Some(image)) => RenderedView::Report { analysis, image },
                _ => RenderedView::Home,
            },
            Screen::Profile => RenderedView::Profile(&self.user),
            Screen::Points => RenderedView::Points(&self.user),
            Screen::Schedule => RenderedView::Schedule,
        }
    }

    pub fn shows_header(&self) -> bool {
        self.screen != Screen::Login
    }

    pub fn nav_items(&self) -> [NavItem; 3] {
        [Screen::Home, Screen::Profile, Screen::Points].map(|screen| NavItem {
            label: NavItem::label_for(screen),
            screen,
            active: self.screen == screen,
        })
    }

    fn set_screen(&mut self, screen: Screen) {
        debug!("Screen {} -> {}", self.screen, screen);
        self.screen = screen;
    }
}
