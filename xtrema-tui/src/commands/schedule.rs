use tracing::info;

use xtrema_common::models::Screen;
use xtrema_ui::{PickupForm, RenderedView, UIEvent};

use crate::TuiModule;

/// Handle "schedule" on the report screen and "set"/"submit" on the pickup
/// form.
pub fn handle_schedule_command(cmd: &str, args: &[&str], tui: &mut TuiModule) -> Option<String> {
    match cmd {
        "schedule" => {
            if !matches!(tui.state.rendered_view(), RenderedView::Report { .. }) {
                return Some("Generate a report first, then 'schedule' from it.".to_string());
            }
            tui.state.handle(UIEvent::SchedulePickup);
            None
        }
        "set" => Some(set_field(args, tui)),
        "submit" => submit(tui),
        _ => None,
    }
}

fn set_field(args: &[&str], tui: &mut TuiModule) -> String {
    if tui.state.screen() != Screen::Schedule {
        return "'set' is only available on the schedule screen.".to_string();
    }
    let [field, value @ ..] = args else {
        return format!("Usage: set <{}> <value>", PickupForm::FIELDS.join("|"));
    };
    match tui.pickup.set_field(field, &value.join(" ")) {
        Ok(()) => tui.render_current(),
        Err(e) => e.to_string(),
    }
}

fn submit(tui: &mut TuiModule) -> Option<String> {
    if tui.state.screen() != Screen::Schedule {
        return Some("'submit' is only available on the schedule screen.".to_string());
    }
    match tui.pickup.validate() {
        Ok(details) => {
            info!(
                "Pickup scheduled for {} ({}) on {}",
                details.pincode, details.waste_type, details.date
            );
            tui.state.handle(UIEvent::Scheduled);
            None
        }
        Err(e) => Some(e.to_string()),
    }
}
