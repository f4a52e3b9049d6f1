use xtrema_common::models::{ImageRef, Screen, UserProfile, WasteAnalysis, WasteCategory};

/// What the front end should draw right now, with borrowed data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderedView<'a> {
    Login,
    Home,
    Report {
        analysis: &'a WasteAnalysis,
        image: &'a ImageRef,
    },
    Profile(&'a UserProfile),
    Points(&'a UserProfile),
    Schedule,
}

impl RenderedView<'_> {
    /// The screen actually on display, which differs from the stored one
    /// when an empty report falls back to home.
    pub fn screen(&self) -> Screen {
        match self {
            RenderedView::Login => Screen::Login,
            RenderedView::Home => Screen::Home,
            RenderedView::Report { .. } => Screen::Report,
            RenderedView::Profile(_) => Screen::Profile,
            RenderedView::Points(_) => Screen::Points,
            RenderedView::Schedule => Screen::Schedule,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub screen: Screen,
    pub active: bool,
}

impl NavItem {
    pub fn label_for(screen: Screen) -> &'static str {
        match screen {
            Screen::Login => "Login",
            Screen::Home => "Home",
            Screen::Report => "Report",
            Screen::Profile => "Profile",
            Screen::Points => "Points",
            Screen::Schedule => "Schedule",
        }
    }
}

/// Bar colours, named after the palette the report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Orange,
    Cyan,
    Amber,
    Blue,
    Slate,
}

impl BarColor {
    fn for_category(category: WasteCategory) -> Self {
        match category {
            WasteCategory::Plastic => BarColor::Orange,
            WasteCategory::Glass => BarColor::Cyan,
            WasteCategory::Cardboard => BarColor::Amber,
            WasteCategory::Metal => BarColor::Blue,
            WasteCategory::Trash => BarColor::Slate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionBar {
    pub category: WasteCategory,
    pub value: f64,
    pub color: BarColor,
}

impl CompositionBar {
    /// Narrow bars have no room for their own percentage.
    pub fn shows_inline_label(&self) -> bool {
        self.value > 15.0
    }
}

/// Display model for the report screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView<'a> {
    pub image: &'a ImageRef,
    pub bars: Vec<CompositionBar>,
    pub dominant: WasteCategory,
}

impl<'a> ReportView<'a> {
    pub fn new(analysis: &WasteAnalysis, image: &'a ImageRef) -> Self {
        let bars = analysis
            .entries()
            .map(|(category, value)| CompositionBar {
                category,
                value,
                color: BarColor::for_category(category),
            })
            .collect();
        Self {
            image,
            bars,
            dominant: analysis.dominant(),
        }
    }

    pub fn recommendation(&self) -> String {
        format!(
            "Based on the detected {} content, we recommend using the industrial compactor for your scheduled pickup to maximize points.",
            self.dominant.label().to_lowercase()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub points: u32,
}

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        title: "Recycling Rookie",
        description: "Recycled first 5kg of plastic",
        points: 50,
    },
    Achievement {
        title: "Cardboard King",
        description: "100% accurate cardboard sorting",
        points: 200,
    },
    Achievement {
        title: "Daily Streak",
        description: "7 days of waste scanning",
        points: 100,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub title: &'static str,
    pub unlock_at: u32,
}

pub const REWARDS: [Reward; 2] = [
    Reward {
        title: "50% Electricity Voucher",
        unlock_at: 1500,
    },
    Reward {
        title: "Organic Fertilizers Bag",
        unlock_at: 2000,
    },
];

impl Reward {
    /// Points still needed; zero once unlocked.
    pub fn remaining_for(&self, user: &UserProfile) -> u32 {
        self.unlock_at.saturating_sub(user.points)
    }
}

/// Label/value pairs for the profile stat cards.
pub fn profile_stats(user: &UserProfile) -> [(&'static str, String); 2] {
    [
        ("Waste Contribution", user.contribution.clone()),
        ("Points Earned", user.points.to_string()),
    ]
}
