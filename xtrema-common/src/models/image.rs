// File: xtrema-common/src/models/image.rs

use std::fmt;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use url::Url;

use crate::Error;

pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Base64-encoded image bytes together with their declared media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Standard base64, no `data:` prefix.
    pub data: String,
}

impl InlineImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, STANDARD.encode(bytes))
    }

    /// Wraps already encoded data, rejecting payloads that are not valid
    /// base64.
    pub fn from_base64(mime_type: impl Into<String>, data: impl Into<String>) -> Result<Self, Error> {
        let image = Self::new(mime_type, data);
        image.decode()?;
        Ok(image)
    }

    pub fn decode(&self) -> Result<Vec<u8>, Error> {
        Ok(STANDARD.decode(self.data.as_bytes())?)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Parses `data:<mime>;base64,<payload>`.
    pub fn from_data_url(s: &str) -> Result<Self, Error> {
        let rest = s
            .strip_prefix("data:")
            .ok_or_else(|| Error::InvalidImage("not a data URL".into()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::InvalidImage("data URL has no payload".into()))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| Error::InvalidImage("only base64 data URLs are supported".into()))?;
        if payload.is_empty() {
            return Err(Error::InvalidImage("empty image payload".into()));
        }
        let mime = if mime.is_empty() { DEFAULT_IMAGE_MIME } else { mime };
        Self::from_base64(mime, payload)
    }
}

/// An image selected by the user: either bytes already in hand, or a remote
/// location that still has to be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Inline(InlineImage),
    Remote(Url),
}

impl ImageRef {
    /// Accepts an http(s) URL, a base64 data URL, or a bare base64 string
    /// (assumed to be JPEG).
    pub fn parse(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidImage("empty image reference".into()));
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(ImageRef::Remote(Url::parse(s)?));
        }
        if s.starts_with("data:") {
            return Ok(ImageRef::Inline(InlineImage::from_data_url(s)?));
        }
        Ok(ImageRef::Inline(InlineImage::from_base64(DEFAULT_IMAGE_MIME, s)?))
    }

    /// Reads a local file and encodes it inline.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        if bytes.is_empty() {
            return Err(Error::InvalidImage(format!("{} is empty", path.display())));
        }
        let mime = mime_for_path(path);
        tracing::debug!("Loaded {} ({} bytes, {})", path.display(), bytes.len(), mime);
        Ok(ImageRef::Inline(InlineImage::from_bytes(mime, &bytes)))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ImageRef::Remote(_))
    }

    /// The string a viewer would load: the URL itself or a data URL.
    pub fn source(&self) -> String {
        match self {
            ImageRef::Inline(img) => img.to_data_url(),
            ImageRef::Remote(url) => url.to_string(),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Inline(img) => write!(
                f,
                "inline {} ({} base64 chars)",
                img.mime_type,
                img.data.len()
            ),
            ImageRef::Remote(url) => write!(f, "{url}"),
        }
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        _ => DEFAULT_IMAGE_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_recognises_each_form() {
        let remote = ImageRef::parse("https://images.example.com/bin.jpg").unwrap();
        assert!(remote.is_remote());

        let data = ImageRef::parse("data:image/png;base64,AAAA").unwrap();
        assert_eq!(data, ImageRef::Inline(InlineImage::new("image/png", "AAAA")));

        let bare = ImageRef::parse("QUJD").unwrap();
        assert_eq!(bare, ImageRef::Inline(InlineImage::new("image/jpeg", "QUJD")));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(ImageRef::parse("   ").is_err());
        assert!(ImageRef::parse("data:image/png,raw").is_err());
        assert!(ImageRef::parse("data:image/png;base64,").is_err());
        assert!(ImageRef::parse("https://").is_err());
        assert!(matches!(
            ImageRef::parse("data:image/png;base64,@@not base64@@"),
            Err(Error::Base64(_))
        ));
        assert!(matches!(ImageRef::parse("bin photo.jpg"), Err(Error::Base64(_))));
    }

    #[test]
    fn from_file_encodes_bytes() {
        let mut file = tempfile::Builder::new().suffix(".PNG").tempfile().unwrap();
        file.write_all(b"not really a png").unwrap();

        let image = ImageRef::from_file(file.path()).unwrap();
        match image {
            ImageRef::Inline(inline) => {
                assert_eq!(inline.mime_type, "image/png");
                assert_eq!(inline.decode().unwrap(), b"not really a png");
            }
            other => panic!("expected inline image, got {other:?}"),
        }
    }

    #[test]
    fn source_round_trips_data_url() {
        let image = ImageRef::Inline(InlineImage::from_bytes("image/webp", b"xyz"));
        let again = ImageRef::parse(&image.source()).unwrap();
        assert_eq!(image, again);
    }
}
