// Detailed help text for the pickup commands.

pub const SCHEDULE_HELP_TEXT: &str = r#"Schedule Commands:

Usage:

  schedule
    From a report, opens the pickup form.

  set <field> <value>
    Fields: address, pincode, state, landmark, date, type
    The date is YYYY-MM-DD. The type is one of
    mixed, dry, wet, e-waste, hazardous (default mixed).

  submit
    Checks that address, pincode, state and date are filled in, confirms the
    pickup and returns to home once acknowledged.

Examples:
  set address 12 Green Street
  set pincode 560001
  set state Karnataka
  set date 2026-11-02
  set type e-waste
  submit
"#;
