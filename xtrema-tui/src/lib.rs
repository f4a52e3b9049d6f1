pub mod commands;
pub mod help;
pub mod render;

use std::sync::Arc;

use tracing::error;

use xtrema_common::models::Screen;
use xtrema_common::traits::WasteAnalyzer;
use xtrema_ui::{AppState, ContactForm, HomeState, Notice, PickupForm, RenderedView, UIRenderer};

pub use render::TextRenderer;

/// Everything the terminal front end holds between input lines: the view
/// controller plus the local state of the screens that own forms.
pub struct TuiModule {
    pub state: AppState,
    pub home: HomeState,
    pub pickup: PickupForm,
    pub contact: ContactForm,
    analyzer: Arc<dyn WasteAnalyzer>,
    local_notice: Option<Notice>,
    awaiting_ack: bool,
}

impl TuiModule {
    pub fn new(analyzer: Arc<dyn WasteAnalyzer>) -> Self {
        Self {
            state: AppState::new(),
            home: HomeState::new(),
            pickup: PickupForm::default(),
            contact: ContactForm::default(),
            analyzer,
            local_notice: None,
            awaiting_ack: false,
        }
    }

    pub fn analyzer(&self) -> Arc<dyn WasteAnalyzer> {
        self.analyzer.clone()
    }

    pub fn prompt_string(&self) -> String {
        if self.awaiting_ack {
            "[press Enter] ".to_string()
        } else {
            format!("xtrema:{}> ", self.state.screen())
        }
    }

    pub fn is_awaiting_ack(&self) -> bool {
        self.awaiting_ack
    }

    /// Queues a notice raised outside the view controller.
    pub fn raise_notice(&mut self, notice: Notice) {
        self.local_notice = Some(notice);
    }

    /// The current view as text.
    pub fn render_current(&self) -> String {
        let mut renderer = TextRenderer::new();
        if let Err(e) = renderer.render(&self.state, &self.home, &self.pickup) {
            error!("Failed to render {}: {}", self.state.screen(), e);
        }
        renderer.finish()
    }

    /// Handles one line of input. Returns whether to quit, and the text to
    /// print.
    pub async fn process_line(&mut self, line: &str) -> (bool, String) {
        // A pending notice swallows the next line, whatever it is.
        if self.awaiting_ack {
            self.awaiting_ack = false;
            return (false, self.render_current());
        }

        let was_home = self.renders_home();
        let was_schedule = self.state.screen() == Screen::Schedule;
        let screen_before = self.state.screen();
        let shown_before = self.shown_screen();

        let (quit, output) = commands::dispatch(line, self).await;

        let mut renderer = TextRenderer::new();
        if let Some(msg) = output {
            renderer.push_line(msg);
        }
        if quit {
            return (true, renderer.finish());
        }

        // Screens drop their local state when they stop being shown.
        if was_home && !self.renders_home() {
            self.home.reset();
        }
        if was_schedule && self.state.screen() != Screen::Schedule {
            self.pickup = PickupForm::default();
        }

        if let Some(notice) = self.state.take_notice().or_else(|| self.local_notice.take()) {
            if let Err(e) = renderer.acknowledge(&notice) {
                error!("Failed to show notice: {}", e);
            }
            self.awaiting_ack = true;
        } else if self.state.screen() != screen_before || self.shown_screen() != shown_before {
            if let Err(e) = renderer.render(&self.state, &self.home, &self.pickup) {
                error!("Failed to render {}: {}", self.state.screen(), e);
            }
        }

        (false, renderer.finish())
    }

    pub(crate) fn renders_home(&self) -> bool {
        matches!(self.state.rendered_view(), RenderedView::Home)
    }

    fn shown_screen(&self) -> Screen {
        self.state.rendered_view().screen()
    }
}
