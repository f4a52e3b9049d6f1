use xtrema_ui::{ContactForm, Notice};

use crate::TuiModule;

/// Handle "contact <show|set|send>".
pub fn handle_contact_command(args: &[&str], tui: &mut TuiModule) -> Option<String> {
    let message = match args {
        [] | ["show"] => show(&tui.contact),
        ["set", field, value @ ..] => match tui.contact.set_field(field, &value.join(" ")) {
            Ok(()) => show(&tui.contact),
            Err(e) => e.to_string(),
        },
        ["send"] => match tui.contact.validate() {
            Ok(()) => {
                tui.contact = ContactForm::default();
                tui.raise_notice(Notice::MessageSent);
                return None;
            }
            Err(e) => e.to_string(),
        },
        _ => format!(
            "Usage: contact [show|set <{}> <value>|send]",
            ContactForm::FIELDS.join("|")
        ),
    };
    Some(message)
}

fn show(form: &ContactForm) -> String {
    let mut out = String::from("Contact Support\n");
    for (name, value) in [
        ("name", &form.name),
        ("email", &form.email),
        ("subject", &form.subject),
        ("message", &form.message),
    ] {
        out.push_str(&format!("  {:<8}: {}\n", name, value));
    }
    out.push_str("  contact set <field> <value>  |  contact send\n");
    out
}
