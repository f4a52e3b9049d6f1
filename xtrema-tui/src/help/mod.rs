//! Central help module that provides a single entry point (`show_command_help`)
//! to display usage details for any recognized TUI command.

pub mod help_contact;
pub mod help_home;
pub mod help_schedule;

fn show_general_help() -> String {
    let text = r#"Xtrema TUI - Available Commands:

  help [command]
    Show general help, or detailed help on a specific command.

  login <email> <password>
    Sign in. Any well-formed email and non-empty password is accepted.

  logout
    Sign out and clear the current report.

  go <home|report|profile|points|schedule|login>
    Switch screens. A report screen without a report shows home.

  home | profile | points
    Shortcuts for the navigation bar entries.

  upload <path|url|data url>
    Select a photo of the waste to analyze (home screen).

  drive [<id>|search <query>|cancel]
    Pick a photo from the connected drive (home screen).

  clear
    Remove the selected photo (home screen).

  generate
    Analyze the selected photo and open the report (home screen).

  schedule
    Open the pickup form from a report.

  set <field> <value>
    Fill in a pickup form field (schedule screen).

  submit
    Confirm the pickup (schedule screen).

  earn
    Go back to uploading from the points screen.

  contact [show|set <field> <value>|send]
    Write to the support team.

  show
    Redraw the current screen.

  quit
    Exit the TUI.
"#;
    text.to_owned()
}

pub fn show_command_help(command: &str) -> String {
    match command {
        "" => show_general_help(),

        "upload" | "drive" | "clear" | "generate" => help_home::HOME_HELP_TEXT.to_owned(),
        "schedule" | "set" | "submit" => help_schedule::SCHEDULE_HELP_TEXT.to_owned(),
        "contact" => help_contact::CONTACT_HELP_TEXT.to_owned(),

        "login" => {
            r#"Login Command:
  Usage: login <email> <password>
    Both values are required and the email needs an '@'.
    Credentials are not checked against anything.
"#
            .to_owned()
        }

        "go" | "nav" => {
            r#"Go Command:
  Usage: go <screen>
    Screens: login, home, report, profile, points, schedule
    'go report' shows home until a report has been generated.
"#
            .to_owned()
        }

        "quit" | "exit" => {
            r#"Quit Command:
  Usage: quit
    Exits the TUI.
"#
            .to_owned()
        }

        other => format!("No detailed help found for '{}'. Type 'help' for an overview.", other),
    }
}
