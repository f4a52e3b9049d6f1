// File: xtrema-tui/src/commands/mod.rs

use xtrema_common::models::Screen;
use xtrema_ui::{LoginForm, UIEvent};

use crate::TuiModule;
use crate::help;

mod contact;
mod home;
mod schedule;

pub async fn dispatch(line: &str, tui: &mut TuiModule) -> (bool, Option<String>) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let cmd = parts.first().unwrap_or(&"").to_lowercase();
    let args = parts.get(1..).unwrap_or(&[]);

    match cmd.as_str() {
        "" => (false, None),
        "help" => {
            let sub = args.first().map(|s| s.to_lowercase()).unwrap_or_default();
            (false, Some(help::show_command_help(&sub)))
        }
        "quit" | "exit" => (true, Some("(TUI) shutting down...".to_string())),
        "show" | "view" => (false, Some(tui.render_current())),
        "login" => (false, handle_login(args, tui)),

        // Everything past this point sits behind the login screen.
        _ if tui.state.screen() == Screen::Login => (
            false,
            Some("Please login to continue. Usage: login <email> <password>".to_string()),
        ),

        "logout" => {
            tui.state.handle(UIEvent::Logout);
            (false, Some("Logged out.".to_string()))
        }
        "go" | "nav" => (false, handle_go(args, tui)),
        "home" | "profile" | "points" => match cmd.parse::<Screen>() {
            Ok(screen) => {
                tui.state.handle(UIEvent::Navigate(screen));
                (false, None)
            }
            Err(e) => (false, Some(e.to_string())),
        },
        "earn" => {
            if tui.state.screen() != Screen::Points {
                return (false, Some("'earn' is available on the points screen.".to_string()));
            }
            tui.state.handle(UIEvent::EarnMore);
            (false, None)
        }
        "upload" | "drive" | "clear" | "generate" => {
            let message = home::handle_home_command(&cmd, args, tui).await;
            (false, message)
        }
        "schedule" | "set" | "submit" => {
            let message = schedule::handle_schedule_command(&cmd, args, tui);
            (false, message)
        }
        "contact" => {
            let message = contact::handle_contact_command(args, tui);
            (false, message)
        }
        _ => {
            let msg = format!("Unknown command '{}'. Type 'help' for usage.", cmd);
            (false, Some(msg))
        }
    }
}

fn handle_login(args: &[&str], tui: &mut TuiModule) -> Option<String> {
    if tui.state.screen() != Screen::Login {
        return Some(format!("Already logged in as {}.", tui.state.user().email));
    }
    let form = LoginForm::new(
        args.first().copied().unwrap_or_default(),
        args.get(1).copied().unwrap_or_default(),
    );
    match form.validate() {
        Ok(()) => {
            tui.state.handle(UIEvent::Login);
            None
        }
        Err(e) => Some(format!("{}\nUsage: login <email> <password>", e)),
    }
}

fn handle_go(args: &[&str], tui: &mut TuiModule) -> Option<String> {
    let Some(target) = args.first() else {
        return Some("Usage: go <home|report|profile|points|schedule|login>".to_string());
    };
    match target.parse::<Screen>() {
        Ok(screen) => {
            tui.state.handle(UIEvent::Navigate(screen));
            None
        }
        Err(e) => Some(e.to_string()),
    }
}
