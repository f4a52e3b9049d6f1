// Detailed help text for the "contact" command.

pub const CONTACT_HELP_TEXT: &str = r#"Contact Command:

Usage:

  contact
    Shows the support form.

  contact set <name|email|subject|message> <value>
    Fills in a field. Every field is required.

  contact send
    Sends the message and clears the form.
"#;
