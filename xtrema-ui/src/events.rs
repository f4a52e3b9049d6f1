use xtrema_common::models::{ImageRef, Screen, WasteAnalysis};

/// User actions the view controller reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum UIEvent {
    Login,
    Logout,
    Navigate(Screen),
    ReportGenerated {
        analysis: WasteAnalysis,
        image: ImageRef,
    },
    /// "Schedule pickup" on the report screen.
    SchedulePickup,
    Scheduled,
    /// "Earn more points" on the points screen.
    EarnMore,
}

/// Blocking acknowledgements shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    PickupConfirmed,
    MessageSent,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::PickupConfirmed => "pickup confirmed",
            Notice::MessageSent => {
                "Message Sent! Our support team will get back to you within 24 hours."
            }
        }
    }
}
