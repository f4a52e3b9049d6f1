use tracing::{info, warn};

use xtrema_common::models::ImageRef;
use xtrema_ui::HomeState;

use crate::TuiModule;

/// Handle "upload", "drive", "clear" and "generate" on the home screen.
pub async fn handle_home_command(cmd: &str, args: &[&str], tui: &mut TuiModule) -> Option<String> {
    if !tui.renders_home() {
        return Some(format!("'{}' is only available on the home screen. Try 'go home'.", cmd));
    }

    match cmd {
        "upload" => Some(upload(args, tui)),
        "drive" => Some(drive(args, tui)),
        "clear" => {
            tui.home.clear_preview();
            Some(tui.render_current())
        }
        "generate" => generate(tui).await,
        _ => None,
    }
}

fn upload(args: &[&str], tui: &mut TuiModule) -> String {
    // Paths may contain spaces.
    let source = args.join(" ");
    if source.is_empty() {
        return "Usage: upload <path|http(s) url|data url>".to_string();
    }

    let result = if source.starts_with("http://")
        || source.starts_with("https://")
        || source.starts_with("data:")
    {
        ImageRef::parse(&source).map(|image| tui.home.set_preview(image))
    } else {
        tui.home.select_local_file(&source)
    };

    match result {
        Ok(()) => tui.render_current(),
        Err(e) => {
            warn!("Could not load image '{}': {}", source, e);
            "Failed to analyze image. Please try again.".to_string()
        }
    }
}

fn drive(args: &[&str], tui: &mut TuiModule) -> String {
    match args {
        [] => {
            tui.home.connect_drive();
            tui.render_current()
        }
        ["cancel"] => {
            tui.home.cancel_drive();
            tui.render_current()
        }
        ["search", query @ ..] => {
            let query = query.join(" ");
            let hits = HomeState::search_drive(&query);
            if hits.is_empty() {
                return format!("No files found matching \"{}\"", query);
            }
            let mut out = String::new();
            for file in hits {
                out.push_str(&format!("  {:>2}  {:<26} {}\n", file.id, file.name, file.size));
            }
            out
        }
        [id] => match id.parse::<u32>() {
            Ok(id) => match tui.home.select_drive_file(id) {
                Ok(file) => {
                    info!("Selected drive file {}", file.name);
                    tui.render_current()
                }
                Err(e) => e.to_string(),
            },
            Err(_) => "Usage: drive [<id>|search <query>|cancel]".to_string(),
        },
        _ => "Usage: drive [<id>|search <query>|cancel]".to_string(),
    }
}

async fn generate(tui: &mut TuiModule) -> Option<String> {
    if tui.home.is_busy() {
        return Some("Analysis already in progress.".to_string());
    }
    if !tui.home.can_generate() {
        return Some("Select an image first ('upload <path>' or 'drive').".to_string());
    }

    let analyzer = tui.analyzer();
    let event = tui.home.generate_report(&*analyzer).await?;
    tui.state.handle(event);
    None
}
