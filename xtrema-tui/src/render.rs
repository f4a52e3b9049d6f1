use std::fmt::Write;

use anyhow::Result;
use colored::{ColoredString, Colorize};

use xtrema_common::models::{ImageRef, UserProfile, WasteAnalysis, WasteType};
use xtrema_ui::views::{ACHIEVEMENTS, BarColor, CompositionBar, REWARDS, profile_stats};
use xtrema_ui::{AppState, HomeState, Notice, PickupForm, RenderedView, ReportView, UIRenderer};

const BAR_WIDTH: usize = 40;

/// Renders views as plain terminal text into an internal buffer.
#[derive(Debug, Default)]
pub struct TextRenderer {
    out: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: impl AsRef<str>) {
        self.out.push_str(line.as_ref());
        if !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn header(&mut self, state: &AppState) -> Result<()> {
        let nav: Vec<String> = state
            .nav_items()
            .iter()
            .map(|item| {
                if item.active {
                    format!("[{}]", item.label).green().bold().to_string()
                } else {
                    item.label.to_string()
                }
            })
            .collect();
        writeln!(
            self.out,
            "{}  |  {}  |  {} (logout)",
            "Xtrema".green().bold(),
            nav.join("  "),
            state.user().name
        )?;
        writeln!(self.out, "{}", "-".repeat(64))?;
        Ok(())
    }

    fn login(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "Xtrema".green().bold())?;
        writeln!(self.out, "Welcome back! Please login to continue")?;
        writeln!(self.out, "  login <email> <password>")?;
        Ok(())
    }

    fn home(&mut self, home: &HomeState) -> Result<()> {
        writeln!(self.out, "{}", "Upload waste photo".bold())?;
        match home.preview() {
            Some(ImageRef::Inline(_)) => {
                writeln!(self.out, "  Local upload : {}", describe_image(home.preview()))?;
                writeln!(self.out, "  Google Drive : drive")?;
            }
            Some(ImageRef::Remote(_)) => {
                writeln!(self.out, "  Local upload : upload <path>")?;
                writeln!(self.out, "  Google Drive : {}", describe_image(home.preview()))?;
            }
            None => {
                writeln!(self.out, "  Local upload : upload <path>")?;
                writeln!(self.out, "  Google Drive : drive")?;
            }
        }

        if home.is_drive_open() {
            writeln!(self.out)?;
            writeln!(self.out, "{}", "Google Drive - select a file (drive <id>, drive cancel)".bold())?;
            for file in HomeState::search_drive("") {
                writeln!(self.out, "  {:>2}  {:<26} {}", file.id, file.name, file.size)?;
            }
        }

        writeln!(self.out)?;
        let button = if home.is_busy() {
            "Analyzing...".yellow()
        } else if home.can_generate() {
            "Generate Report (generate)".green().bold()
        } else {
            "Generate Report (select an image first)".dimmed()
        };
        writeln!(self.out, "  {}", button)?;
        Ok(())
    }

    fn report(&mut self, analysis: &WasteAnalysis, image: &ImageRef) -> Result<()> {
        let report = ReportView::new(analysis, image);
        writeln!(self.out, "{}", "Analysis Report".bold())?;
        writeln!(self.out, "  Image: {}", describe_image(Some(report.image)))?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", "Waste Composition".bold())?;
        for bar in &report.bars {
            self.bar(bar)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "  {}", report.recommendation())?;
        writeln!(self.out)?;
        writeln!(self.out, "  {}", "Schedule Pickup (schedule)".green().bold())?;
        Ok(())
    }

    fn bar(&mut self, bar: &CompositionBar) -> Result<()> {
        let fraction = (bar.value / 100.0).clamp(0.0, 1.0);
        let filled = (fraction * BAR_WIDTH as f64).round() as usize;
        let mut body = "#".repeat(filled);
        if bar.shows_inline_label() {
            let label = format!("{}%", bar.value);
            if label.len() < body.len() {
                body.replace_range(..label.len(), &label);
            }
        }
        writeln!(
            self.out,
            "  {:<10} {}{} {}%",
            bar.category.label(),
            paint(&body, bar.color),
            " ".repeat(BAR_WIDTH - filled),
            bar.value
        )?;
        Ok(())
    }

    fn profile(&mut self, user: &UserProfile) -> Result<()> {
        writeln!(self.out, "{}", user.name.bold())?;
        writeln!(self.out, "  Platinum Contributor")?;
        writeln!(self.out, "  Avatar       : {}", user.avatar_url(Some(512)))?;
        writeln!(self.out, "  Email ID     : {}", user.email)?;
        writeln!(self.out, "  Phone Number : {}", user.phone)?;
        for (label, value) in profile_stats(user) {
            writeln!(self.out, "  {:<19}: {}", label, value)?;
        }
        Ok(())
    }

    fn points(&mut self, user: &UserProfile) -> Result<()> {
        writeln!(self.out, "{} {}", user.points.to_string().green().bold(), "points")?;
        writeln!(self.out, "You're doing great!")?;
        writeln!(self.out, "Every point brings you closer to exclusive eco-rewards.")?;
        writeln!(self.out, "  {}", "Earn more points (earn)".green())?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", "Recent Achievements".bold())?;
        for a in ACHIEVEMENTS {
            writeln!(self.out, "  +{:<4} {} - {}", a.points, a.title, a.description)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "{}", "Upcoming Rewards".bold())?;
        for r in REWARDS {
            let remaining = r.remaining_for(user);
            let status = if remaining == 0 {
                "unlocked".green().to_string()
            } else {
                format!("{} points to go", remaining)
            };
            writeln!(self.out, "  {} (unlock at {}) - {}", r.title, r.unlock_at, status)?;
        }
        Ok(())
    }

    fn schedule(&mut self, form: &PickupForm) -> Result<()> {
        writeln!(self.out, "{}", "Schedule a Pickup".bold())?;
        let rows = [
            ("address", form.address.as_str(), "Street name, building..."),
            ("pincode", form.pincode.as_str(), "6-digit code"),
            ("state", form.state.as_str(), "Your state"),
            ("landmark", form.landmark.as_str(), "Near hospital, park... (optional)"),
            ("date", form.date.as_str(), "YYYY-MM-DD"),
        ];
        for (name, value, placeholder) in rows {
            let shown = if value.is_empty() {
                placeholder.dimmed()
            } else {
                value.normal()
            };
            writeln!(self.out, "  {:<9}: {}", name, shown)?;
        }
        let types: Vec<String> = WasteType::ALL
            .iter()
            .map(|t| {
                if *t == form.waste_type {
                    format!("[{}]", t.code())
                } else {
                    t.code().to_string()
                }
            })
            .collect();
        writeln!(self.out, "  {:<9}: {}", "type", types.join(" "))?;
        writeln!(self.out)?;
        writeln!(self.out, "  set <field> <value>  |  {}", "Confirm Scheduled Pick up (submit)".green().bold())?;
        Ok(())
    }
}

impl UIRenderer for TextRenderer {
    fn render(&mut self, state: &AppState, home: &HomeState, pickup: &PickupForm) -> Result<()> {
        if state.shows_header() {
            self.header(state)?;
        }
        match state.rendered_view() {
            RenderedView::Login => self.login(),
            RenderedView::Home => self.home(home),
            RenderedView::Report { analysis, image } => self.report(analysis, image),
            RenderedView::Profile(user) => self.profile(user),
            RenderedView::Points(user) => self.points(user),
            RenderedView::Schedule => self.schedule(pickup),
        }
    }

    fn acknowledge(&mut self, notice: &Notice) -> Result<()> {
        writeln!(self.out, "{}", "=".repeat(64))?;
        writeln!(self.out, "  {}", notice.message().green().bold())?;
        writeln!(self.out, "{}", "=".repeat(64))?;
        writeln!(self.out, "Press Enter to continue.")?;
        Ok(())
    }
}

fn paint(text: &str, color: BarColor) -> ColoredString {
    match color {
        BarColor::Orange => text.truecolor(249, 115, 22),
        BarColor::Cyan => text.truecolor(34, 211, 238),
        BarColor::Amber => text.truecolor(217, 119, 6),
        BarColor::Blue => text.truecolor(37, 99, 235),
        BarColor::Slate => text.truecolor(100, 116, 139),
    }
}

fn describe_image(image: Option<&ImageRef>) -> String {
    match image {
        Some(image) => image.to_string(),
        None => "none".to_string(),
    }
}
