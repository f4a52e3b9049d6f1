// Detailed help text for the home screen commands.

pub const HOME_HELP_TEXT: &str = r#"Home Screen Commands:

Usage:

  upload <path>
    Reads a local image file and selects it. The mime type comes from the
    file extension (png, gif, webp, bmp, heic, heif); anything else is sent
    as jpeg.

  upload <http(s) url>
    Selects a remote image. It is downloaded and inlined at analysis time.

  upload <data:image/...;base64,...>
    Selects an already encoded image.

  drive
    Opens the drive picker and lists the available files.

  drive <id>
    Selects a file from the drive picker and closes it.

  drive search <query>
    Lists drive files whose name contains the query.

  drive cancel
    Closes the picker without selecting anything.

  clear
    Drops the selected image.

  generate
    Analyzes the selected image and opens the report. If the analysis service
    is unreachable or answers with something unusable, a default breakdown is
    shown instead.

Examples:
  upload ./photos/bin.jpg
  drive 3
  generate
"#;
