use serde::{Deserialize, Serialize};

/// Static profile shown on the profile and points screens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub contribution: String,
    pub points: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "xtrema ui dev".to_string(),
            email: "abc@xtrema.com".to_string(),
            phone: "345XXXX68".to_string(),
            contribution: "50 kgs".to_string(),
            points: 1000,
        }
    }
}

impl UserProfile {
    /// Generated avatar for the header and profile card.
    pub fn avatar_url(&self, size: Option<u32>) -> String {
        let mut url = format!(
            "https://ui-avatars.com/api/?name={}&background=16a34a&color=fff",
            urlencoding::encode(&self.name)
        );
        if let Some(size) = size {
            url.push_str(&format!("&size={size}"));
        }
        url
    }
}
